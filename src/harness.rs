//! Drivers that read a problem in its textual format, run the matching
//! algorithm and produce the textual answer.

use std::fmt::Write;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;

use crate::knapsack::{self, Item};
use crate::linear_system::{self, Solution};
use crate::scanner::Scanner;
use crate::{fft, interval_cover, lis, DisjointSet, FenwickTree};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum FenwickOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "?")]
    Query,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum SetOp {
    #[strum(serialize = "=")]
    Union,
    #[strum(serialize = "?")]
    Query,
}

/// `N Q` followed by `Q` operations `+ i delta` or `? i`. Answers every query
/// with the sum of the values before index `i`.
pub fn fenwick(input: &str) -> Result<String> {
    let mut scanner = Scanner::new(input);
    let len: usize = scanner.next()?;
    let num_ops: usize = scanner.next()?;
    debug!("fenwick tree over {len} values, {num_ops} operations");

    let mut tree = FenwickTree::new(len);
    let mut out = String::new();
    for op in 1..=num_ops {
        match scanner.next::<FenwickOp>()? {
            FenwickOp::Add => {
                let i: usize = scanner.next()?;
                let delta: i64 = scanner.next()?;
                tree.add(i, delta)
                    .with_context(|| format!("operation {op}: + {i} {delta}"))?;
            }
            FenwickOp::Query => {
                let i: usize = scanner.next()?;
                let sum = tree
                    .prefix_sum(i)
                    .with_context(|| format!("operation {op}: ? {i}"))?;
                writeln!(out, "{sum}")?;
            }
        }
    }
    Ok(out)
}

/// `N Q` followed by `Q` operations `= a b` or `? a b`. Answers every query
/// with `yes` or `no`.
pub fn union_find(input: &str) -> Result<String> {
    let mut scanner = Scanner::new(input);
    let len: usize = scanner.next()?;
    let num_ops: usize = scanner.next()?;
    debug!("disjoint set over {len} elements, {num_ops} operations");

    let mut set = DisjointSet::new(len);
    let mut out = String::new();
    for op in 1..=num_ops {
        let kind: SetOp = scanner.next()?;
        let a: usize = scanner.next()?;
        let b: usize = scanner.next()?;
        let context = || format!("operation {op}: {kind} {a} {b}");
        match kind {
            SetOp::Union => {
                set.union(a, b).with_context(context)?;
            }
            SetOp::Query => {
                let answer = if set.connected(a, b).with_context(context)? {
                    "yes"
                } else {
                    "no"
                };
                writeln!(out, "{answer}")?;
            }
        }
    }
    debug!("{} sets remain", set.num_sets());
    Ok(out)
}

/// The number of cases, then for each case two polynomials given as a degree
/// followed by their coefficients. Answers with the degree and coefficients of
/// each product.
pub fn poly_mul(input: &str) -> Result<String> {
    let mut scanner = Scanner::new(input);
    let num_cases: usize = scanner.next()?;

    let mut out = String::new();
    for _ in 0..num_cases {
        let x1 = read_polynomial(&mut scanner)?;
        let x2 = read_polynomial(&mut scanner)?;
        debug!(
            "multiplying polynomials of degree {} and {}",
            x1.len() - 1,
            x2.len() - 1
        );

        let product = fft::multiply_integers(&x1, &x2);
        writeln!(out, "{}", product.len() - 1)?;
        writeln!(out, "{}", product.iter().join(" "))?;
    }
    Ok(out)
}

fn read_polynomial(scanner: &mut Scanner) -> Result<Vec<i64>> {
    let degree: usize = scanner.next()?;
    scanner
        .take(degree + 1)
        .with_context(|| format!("reading polynomial of degree {degree}"))
}

/// Until the end of the input: a target interval `A B`, the number of
/// intervals and the intervals. Answers with the chosen intervals or
/// `impossible`.
pub fn interval_cover(input: &str) -> Result<String> {
    let mut scanner = Scanner::new(input);
    let mut out = String::new();
    while let Some(start) = scanner.try_next::<f64>()? {
        let end: f64 = scanner.next()?;
        let n: usize = scanner.next()?;
        let intervals = (0..n)
            .map(|_| Ok((scanner.next()?, scanner.next()?)))
            .collect::<Result<Vec<(f64, f64)>>>()?;
        debug!("covering [{start}, {end}] with {n} intervals");

        match interval_cover::cover((start, end), &intervals) {
            Some(chosen) => {
                writeln!(out, "{}", chosen.len())?;
                writeln!(out, "{}", chosen.iter().join(" "))?;
            }
            None => writeln!(out, "impossible")?,
        }
    }
    Ok(out)
}

/// Until the end of the input: a capacity, the number of items and each
/// item's value and weight. Answers with the chosen items.
pub fn knapsack(input: &str) -> Result<String> {
    let mut scanner = Scanner::new(input);
    let mut out = String::new();
    while let Some(capacity) = scanner.try_next::<usize>()? {
        let n: usize = scanner.next()?;
        let items = (0..n)
            .map(|_| {
                Ok(Item {
                    value: scanner.next()?,
                    weight: scanner.next()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("knapsack of capacity {capacity} with {n} items");

        let chosen = knapsack::solve(capacity, &items);
        writeln!(out, "{}", chosen.len())?;
        writeln!(out, "{}", chosen.iter().join(" "))?;
    }
    Ok(out)
}

/// Systems of the form `n`, the `n * n` coefficients and the `n` right-hand
/// sides, terminated by `n = 0`. Answers with the solution, `?` for variables
/// that are not determined, or `inconsistent`.
pub fn lin_solve(input: &str) -> Result<String> {
    let mut scanner = Scanner::new(input);
    let mut out = String::new();
    loop {
        let n: usize = match scanner.try_next()? {
            None | Some(0) => break,
            Some(n) => n,
        };
        let a = (0..n)
            .map(|_| scanner.take(n))
            .collect::<Result<Vec<Vec<f64>>>>()?;
        let b = scanner.take(n)?;
        debug!("solving a {n}x{n} system");

        match linear_system::solve(a, b)? {
            Solution::Unique(values) => {
                writeln!(out, "{}", values.into_iter().map(format_value).join(" "))?;
            }
            Solution::Partial(values) => {
                let values = values
                    .into_iter()
                    .map(|v| v.map_or_else(|| "?".to_string(), format_value))
                    .join(" ");
                writeln!(out, "{values}")?;
            }
            Solution::Inconsistent => writeln!(out, "inconsistent")?,
        }
    }
    Ok(out)
}

fn format_value(value: f64) -> String {
    // Avoid printing "-0.000"
    if value.abs() < 5e-4 {
        return format!("{:.3}", 0.0);
    }
    format!("{value:.3}")
}

/// Until the end of the input: a length `n` and `n` integers. Answers with
/// the length and indices of a longest increasing subsequence.
pub fn lis(input: &str) -> Result<String> {
    let mut scanner = Scanner::new(input);
    let mut out = String::new();
    while let Some(n) = scanner.try_next::<usize>()? {
        let seq: Vec<i64> = scanner.take(n)?;
        let indices = lis::longest_increasing_subsequence(&seq);
        debug!("longest increasing subsequence of {n} values has length {}", indices.len());

        writeln!(out, "{}", indices.len())?;
        writeln!(out, "{}", indices.iter().join(" "))?;
    }
    Ok(out)
}
