// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Bounded cursor over a whitespace-tokenized source
//!
//! Problem and result files have no section terminators: every section
//! declares a count and the reader has to consume exactly that many groups.
//! All reads go through [`TokenCursor`], which turns an overrun or a bad
//! numeric token into a [`ParseError`] carrying the token position.

use std::str::FromStr;

use crate::error::{ParseError, ParseResult};

#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: Vec<&'a str>,
    index: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            tokens: content.split_whitespace().collect(),
            index: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.index)
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.index).copied()
    }

    /// Skip one token
    pub fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    pub fn next_token(&mut self, expected: &str) -> ParseResult<&'a str> {
        match self.tokens.get(self.index).copied() {
            Some(token) => {
                self.index += 1;
                Ok(token)
            }
            None => Err(ParseError::UnexpectedEof {
                expected: expected.to_string(),
                position: self.index,
            }),
        }
    }

    pub fn next_int<T: FromStr>(&mut self, expected: &str) -> ParseResult<T> {
        let position = self.index;
        let token = self.next_token(expected)?;
        token.parse::<T>().map_err(|_| ParseError::InvalidNumber {
            token: token.to_string(),
            expected: expected.to_string(),
            position,
        })
    }

    /// Read a strictly positive integer extent.
    pub fn next_dimension(&mut self, expected: &str) -> ParseResult<i64> {
        let position = self.index;
        let value: i64 = self.next_int(expected)?;
        if value > 0 {
            Ok(value)
        } else {
            Err(ParseError::InvalidNumber {
                token: value.to_string(),
                expected: format!("positive {expected}"),
                position,
            })
        }
    }

    pub fn next_float(&mut self, expected: &str) -> ParseResult<f64> {
        let position = self.index;
        let token = self.next_token(expected)?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::InvalidNumber {
                token: token.to_string(),
                expected: expected.to_string(),
                position,
            }),
        }
    }

    /// Read a section count. Negative or non-numeric counts are rejected.
    pub fn next_count(&mut self, section: &'static str) -> ParseResult<usize> {
        let position = self.index;
        let token = self.next_token(&format!("{section} count"))?;
        token.parse::<usize>().map_err(|_| ParseError::InvalidCount {
            section,
            count: token.to_string(),
            position,
        })
    }

    /// Check that `count` fixed-width groups of `group_len` tokens are still available.
    pub fn ensure_groups(
        &self,
        section: &'static str,
        count: usize,
        group_len: usize,
    ) -> ParseResult<()> {
        let needed = count.checked_mul(group_len);
        match needed {
            Some(needed) if needed <= self.remaining() => Ok(()),
            _ => Err(ParseError::InvalidCount {
                section,
                count: count.to_string(),
                position: self.index.saturating_sub(1),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_any_whitespace() {
        let cursor = TokenCursor::new("CHIP  100\n200\t\r\n");
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.peek(), Some("CHIP"));
    }

    #[test]
    fn test_typed_reads() {
        let mut cursor = TokenCursor::new("42 -7 3.25");
        assert_eq!(cursor.next_int::<i64>("a").unwrap(), 42);
        assert_eq!(cursor.next_int::<i64>("b").unwrap(), -7);
        assert_eq!(cursor.next_float("c").unwrap(), 3.25);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_dimension_must_be_positive() {
        let mut cursor = TokenCursor::new("7 0 -5");
        assert_eq!(cursor.next_dimension("width").unwrap(), 7);
        assert_eq!(
            cursor.next_dimension("width"),
            Err(ParseError::InvalidNumber {
                token: "0".to_string(),
                expected: "positive width".to_string(),
                position: 1,
            })
        );
        assert!(cursor.next_dimension("height").is_err());
    }

    #[test]
    fn test_overrun_reports_position() {
        let mut cursor = TokenCursor::new("A");
        cursor.advance();
        assert_eq!(
            cursor.next_token("module name"),
            Err(ParseError::UnexpectedEof {
                expected: "module name".to_string(),
                position: 1,
            })
        );
    }

    #[test]
    fn test_invalid_number() {
        let mut cursor = TokenCursor::new("x12");
        let err = cursor.next_int::<i64>("width").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                token: "x12".to_string(),
                expected: "width".to_string(),
                position: 0,
            }
        );
    }

    #[test]
    fn test_float_rejects_nan() {
        let mut cursor = TokenCursor::new("NaN");
        assert!(cursor.next_float("HPWL").is_err());
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut cursor = TokenCursor::new("-1");
        assert!(matches!(
            cursor.next_count("FIXEDMODULE"),
            Err(ParseError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_ensure_groups() {
        let mut cursor = TokenCursor::new("2 a 1 b 2");
        let count = cursor.next_count("SOFTMODULE").unwrap();
        assert!(cursor.ensure_groups("SOFTMODULE", count, 2).is_ok());
        assert!(cursor.ensure_groups("SOFTMODULE", 3, 2).is_err());
        assert!(cursor.ensure_groups("SOFTMODULE", usize::MAX, 2).is_err());
    }
}
