use std::any::type_name;
use std::str::{FromStr, SplitAsciiWhitespace};

use anyhow::{anyhow, Result};

/// Reads whitespace separated tokens from problem input.
pub struct Scanner<'a> {
    tokens: SplitAsciiWhitespace<'a>,
    /// Number of tokens read so far, for error messages.
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_ascii_whitespace(),
            position: 0,
        }
    }

    /// Parses the next token, failing at the end of the input.
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.try_next()? {
            Some(value) => Ok(value),
            None => Err(anyhow!(
                "expected {} at token {}, but found end of input",
                type_name::<T>(),
                self.position + 1
            )),
        }
    }

    /// Parses the next token, or returns `None` at the end of the input.
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(token) = self.tokens.next() else {
            return Ok(None);
        };
        self.position += 1;
        token.parse().map(Some).map_err(|e| {
            anyhow!(
                "failed to parse {:?} at token {} as {}: {}",
                token,
                self.position,
                type_name::<T>(),
                e
            )
        })
    }

    /// Parses the next `n` tokens.
    pub fn take<T>(&mut self, n: usize) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        (0..n).map(|_| self.next()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scanner_test() {
        let mut scanner = Scanner::new("3 -1\n  2.5\t?\n");
        assert_eq!(scanner.next::<usize>().unwrap(), 3);
        assert_eq!(scanner.next::<i64>().unwrap(), -1);
        assert_eq!(scanner.next::<f64>().unwrap(), 2.5);
        assert_eq!(scanner.next::<char>().unwrap(), '?');
        assert!(scanner.try_next::<i64>().unwrap().is_none());
        assert!(scanner.next::<i64>().is_err());
    }

    #[test]
    fn take_test() {
        let mut scanner = Scanner::new("1 2 3 4");
        assert_eq!(scanner.take::<i64>(3).unwrap(), vec![1, 2, 3]);
        assert!(scanner.take::<i64>(2).is_err());
    }

    #[test]
    fn parse_error_test() {
        let mut scanner = Scanner::new("1 x");
        scanner.next::<i64>().unwrap();
        let err = scanner.next::<i64>().unwrap_err();
        assert!(err.to_string().contains("\"x\" at token 2"));
    }
}
