use std::fmt;

const EPSILON: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    Unique(Vec<f64>),
    /// Infinitely many solutions. Variables fixed by the system are still
    /// reported, the free ones are `None`.
    Partial(Vec<Option<f64>>),
    Inconsistent,
}

/// Solves `a x = b` by Gauss-Jordan elimination with partial pivoting.
pub fn solve(a: Vec<Vec<f64>>, b: Vec<f64>) -> Result<Solution, ShapeError> {
    let n = a.len();
    if b.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(ShapeError { rows: n, rhs: b.len() });
    }

    // Augmented matrix [a | b]
    let mut aug: Vec<Vec<f64>> = a
        .into_iter()
        .zip(b)
        .map(|(mut row, rhs)| {
            row.push(rhs);
            row
        })
        .collect();

    let mut row = 0;
    for col in 0..n {
        if row == n {
            break;
        }

        let pivot = (row..n)
            .max_by(|&i, &j| aug[i][col].abs().total_cmp(&aug[j][col].abs()))
            .unwrap_or(row);
        if aug[pivot][col].abs() < EPSILON {
            continue;
        }
        aug.swap(pivot, row);

        for i in 0..n {
            if i == row {
                continue;
            }
            let factor = aug[i][col] / aug[row][col];
            if factor == 0.0 {
                continue;
            }
            for j in col..=n {
                let delta = aug[row][j] * factor;
                aug[i][j] -= delta;
            }
        }
        row += 1;
    }

    // Read out the values of the variables that are alone in their row.
    let mut values = vec![None; n];
    for row in &aug {
        let mut nonzero = (0..n).filter(|&j| row[j].abs() >= EPSILON);
        match (nonzero.next(), nonzero.next()) {
            (None, _) if row[n].abs() >= EPSILON => return Ok(Solution::Inconsistent),
            (Some(j), None) => values[j] = Some(row[n] / row[j]),
            _ => {}
        }
    }

    if values.iter().all(Option::is_some) {
        Ok(Solution::Unique(values.into_iter().flatten().collect()))
    } else {
        Ok(Solution::Partial(values))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ShapeError {
    pub rows: usize,
    pub rhs: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "expected a square {0}x{0} system with {0} right-hand sides, got {1} right-hand sides",
            self.rows, self.rhs
        )
    }
}

impl std::error::Error for ShapeError {}
