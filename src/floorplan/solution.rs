// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Result file parser
//!
//! ```text
//! HPWL <float>
//! SOFTMODULE <n> (<name> <cornerCount> (<x> <y>){cornerCount}){n}
//! ```

use super::tokens::TokenCursor;
use super::{SoftModule, Solution};
use crate::error::ParseResult;

pub fn parse_solution(content: &str) -> ParseResult<Solution> {
    let mut cursor = TokenCursor::new(content);
    let mut hpwl = 0.0;
    let mut soft_modules = Vec::new();

    while let Some(token) = cursor.peek() {
        match token {
            "HPWL" => {
                cursor.advance();
                hpwl = cursor.next_float("HPWL value")?;
            }
            "SOFTMODULE" => {
                cursor.advance();
                let count = cursor.next_count("SOFTMODULE")?;
                for _ in 0..count {
                    soft_modules.push(parse_soft_module(&mut cursor)?);
                }
            }
            _ => {
                log::debug!(
                    "Skipping unknown token '{token}' at position {}",
                    cursor.position()
                );
                cursor.advance();
            }
        }
    }

    Ok(Solution { hpwl, soft_modules })
}

fn parse_soft_module(cursor: &mut TokenCursor) -> ParseResult<SoftModule> {
    let name = cursor.next_token("SOFTMODULE name")?.to_string();
    let corner_count = cursor.next_count("SOFTMODULE corner")?;
    cursor.ensure_groups("SOFTMODULE corner", corner_count, 2)?;

    let mut corners = Vec::with_capacity(corner_count);
    for _ in 0..corner_count {
        let x = cursor.next_int("corner x")?;
        let y = cursor.next_int("corner y")?;
        corners.push((x, y));
    }
    Ok(SoftModule { name, corners })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_parse_rectilinear_modules() {
        let solution = parse_solution(
            "HPWL 12345.6
SOFTMODULE 2
S1 4
0 0
0 10
10 10
10 0
S2 6
10 0 30 0 30 20 20 20 20 10 10 10
",
        )
        .unwrap();
        assert_eq!(solution.hpwl, 12345.6);
        assert_eq!(solution.soft_modules.len(), 2);
        assert_eq!(
            solution.soft_modules[0].corners,
            vec![(0, 0), (0, 10), (10, 10), (10, 0)]
        );
        assert_eq!(solution.soft_modules[1].corners.len(), 6);
        assert_eq!(solution.soft_modules[1].corners[3], (20, 20));
    }

    #[test]
    fn test_missing_hpwl_defaults_to_zero() {
        let solution = parse_solution("SOFTMODULE 0").unwrap();
        assert_eq!(solution.hpwl, 0.0);
        assert!(solution.soft_modules.is_empty());
    }

    #[test]
    fn test_declared_corner_count_trusted() {
        // Two corners parse fine; rendering decides what to do with them.
        let solution = parse_solution("SOFTMODULE 1 S 2 0 0 5 5").unwrap();
        assert_eq!(solution.soft_modules[0].corners.len(), 2);
    }

    #[test]
    fn test_truncated_corners() {
        let err = parse_solution("SOFTMODULE 1 S 4 0 0 5 5 5").unwrap_err();
        assert!(matches!(err, ParseError::InvalidCount { .. }));
    }

    #[test]
    fn test_missing_module() {
        let err = parse_solution("HPWL 1.0 SOFTMODULE 2 S 3 0 0 1 0 1 1").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_bad_hpwl() {
        let err = parse_solution("HPWL fast").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }
}
