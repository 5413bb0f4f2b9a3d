use std::f64::consts::PI;
use std::iter;
use std::ops::{Add, Div, Mul, Sub};

use itertools::Itertools;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    fn div(self, d: f64) -> Complex {
        Complex::new(self.re / d, self.im / d)
    }
}

/// Replaces `signal` by its discrete Fourier transform, or by the inverse
/// transform if `invert` is set. The inverse halves every value at each of
/// the `log2(n)` levels, so `fft(fft(x, false), true)` gives back `x`.
///
/// # Panics
/// Panics if the length of `signal` is not a power of two.
pub fn fft(signal: &mut [Complex], invert: bool) {
    let n = signal.len();
    assert!(n.is_power_of_two(), "fft length must be a power of two, got {n}");
    if n == 1 {
        return;
    }

    let (mut even, mut odd): (Vec<_>, Vec<_>) = signal
        .iter()
        .copied()
        .tuples::<(Complex, Complex)>()
        .unzip();
    fft(&mut even, invert);
    fft(&mut odd, invert);

    let angle = 2.0 * PI / n as f64 * if invert { -1.0 } else { 1.0 };
    let half = n / 2;
    for i in 0..half {
        let w = Complex::from_polar(1.0, angle * i as f64);
        let t = w * odd[i];
        signal[i] = even[i] + t;
        signal[i + half] = even[i] - t;
        if invert {
            signal[i] = signal[i] / 2.0;
            signal[i + half] = signal[i + half] / 2.0;
        }
    }
}

/// Multiplies two polynomials given by their coefficients, lowest degree
/// first. The result has `x1.len() + x2.len() - 1` coefficients, or none if
/// either operand is empty.
///
/// The imaginary parts of the result are numerical noise.
pub fn multiply(x1: &[f64], x2: &[f64]) -> Vec<Complex> {
    if x1.is_empty() || x2.is_empty() {
        return vec![];
    }

    let len = x1.len() + x2.len() - 1;
    let size = (x1.len() + x2.len()).next_power_of_two();
    let padded = |x: &[f64]| -> Vec<Complex> {
        x.iter()
            .map(|&c| Complex::from(c))
            .chain(iter::repeat(Complex::ZERO))
            .take(size)
            .collect()
    };

    let mut a = padded(x1);
    let mut b = padded(x2);
    fft(&mut a, false);
    fft(&mut b, false);

    let mut product = a.into_iter().zip(b).map(|(a, b)| a * b).collect_vec();
    fft(&mut product, true);
    product.truncate(len);
    product
}

/// [`multiply`] for integer coefficients, rounding the result.
pub fn multiply_integers(x1: &[i64], x2: &[i64]) -> Vec<i64> {
    let to_f64 = |x: &[i64]| x.iter().map(|&c| c as f64).collect_vec();
    multiply(&to_f64(x1), &to_f64(x2))
        .into_iter()
        .map(|c| c.re.round() as i64)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_close(actual: &[Complex], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, &e) in actual.iter().zip(expected) {
            assert!((*a - Complex::from(e)).norm() < 1e-6, "{a:?} != {e}");
        }
    }

    #[test]
    fn multiply_test() {
        let product = multiply(&[1.0, 2.0, 3.0], &[1.0, 1.0]);
        assert_close(&product, &[1.0, 3.0, 5.0, 3.0]);
        assert_eq!(multiply_integers(&[1, 2, 3], &[1, 1]), vec![1, 3, 5, 3]);
    }

    #[test]
    fn multiply_negative_test() {
        // (x - 1)(x + 1) = x^2 - 1
        assert_eq!(multiply_integers(&[-1, 1], &[1, 1]), vec![-1, 0, 1]);
        assert_eq!(
            multiply_integers(&[0, 0, 5], &[-2, 0, 0, 1]),
            vec![0, 0, -10, 0, 0, 5]
        );
    }

    #[test]
    fn multiply_constant_test() {
        assert_eq!(multiply_integers(&[7], &[6]), vec![42]);
        assert_eq!(multiply_integers(&[4, 0, 2], &[1]), vec![4, 0, 2]);
        assert_eq!(multiply_integers(&[], &[1, 2]), Vec::<i64>::new());
        assert!(multiply(&[1.0], &[]).is_empty());
    }

    #[test]
    fn multiply_fractional_test() {
        let product = multiply(&[0.5, 0.25], &[2.0, -4.0]);
        assert_close(&product, &[1.0, -1.5, -1.0]);
    }

    #[test]
    fn fft_test() {
        // The transform of an impulse is constant
        let mut signal = [Complex::ONE, Complex::ZERO, Complex::ZERO, Complex::ZERO];
        fft(&mut signal, false);
        assert_close(&signal, &[1.0, 1.0, 1.0, 1.0]);

        // ... and the inverse of a constant is an impulse
        fft(&mut signal, true);
        assert_close(&signal, &[1.0, 0.0, 0.0, 0.0]);

        let mut signal = [Complex::new(3.0, -1.0)];
        fft(&mut signal, false);
        assert_eq!(signal, [Complex::new(3.0, -1.0)]);
    }

    #[test]
    #[should_panic]
    fn fft_non_power_of_two_test() {
        let mut signal = [Complex::ONE; 3];
        fft(&mut signal, false);
    }
}

#[cfg(test)]
mod fft_proptests {
    use super::*;
    use proptest::prelude::*;

    fn naive_multiply(x1: &[i64], x2: &[i64]) -> Vec<i64> {
        let mut res = vec![0; x1.len() + x2.len() - 1];
        for (i, &a) in x1.iter().enumerate() {
            for (j, &b) in x2.iter().enumerate() {
                res[i + j] += a * b;
            }
        }
        res
    }

    fn arb_poly() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-1000i64..=1000, 1..100)
    }

    proptest! {
        #[test]
        fn round_trip(log_len in 0u32..9, seed in proptest::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 256)) {
            let len = 1 << log_len;
            let original = seed[..len].iter().map(|&(re, im)| Complex::new(re, im)).collect_vec();
            let mut signal = original.clone();
            fft(&mut signal, false);
            fft(&mut signal, true);
            for (a, b) in signal.iter().zip(&original) {
                prop_assert!((*a - *b).norm() < 1e-6);
            }
        }

        #[test]
        fn agrees_with_naive_multiply(x1 in arb_poly(), x2 in arb_poly()) {
            let product = multiply_integers(&x1, &x2);
            prop_assert_eq!(product.len(), x1.len() + x2.len() - 1);
            prop_assert_eq!(product, naive_multiply(&x1, &x2));
        }

        #[test]
        fn one_is_identity(x in arb_poly()) {
            let p = x.iter().map(|&c| c as f64).collect_vec();
            let product = multiply(&p, &[1.0]);
            prop_assert_eq!(product.len(), p.len());
            for (a, &e) in product.iter().zip(&p) {
                prop_assert!((a.re - e).abs() < 1e-6);
                prop_assert!(a.im.abs() < 1e-6);
            }
        }
    }
}
