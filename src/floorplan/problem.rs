// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Problem file parser
//!
//! ```text
//! CHIP <w> <h>
//! SOFTMODULE <n> (<name> <area>){n}
//! FIXEDMODULE <n> (<name> <x> <y> <w> <h>){n}
//! CONNECTION <n> (<mod1> <mod2> <weight>){n}
//! ```
//!
//! Sections may come in any order. Unknown tokens are skipped one at a time.

use super::tokens::TokenCursor;
use super::{ChipOutline, Connection, FixedModule, Problem, SoftModuleSpec};
use crate::error::{ParseError, ParseResult};

pub fn parse_problem(content: &str) -> ParseResult<Problem> {
    let mut cursor = TokenCursor::new(content);
    let mut outline: Option<(i64, i64)> = None;
    let mut fixed_modules = Vec::new();
    let mut soft_modules = Vec::new();
    let mut connections = Vec::new();

    while let Some(token) = cursor.peek() {
        match token {
            "CHIP" => {
                cursor.advance();
                let width = cursor.next_int::<i64>("CHIP width")?;
                let height = cursor.next_int::<i64>("CHIP height")?;
                outline = Some((width, height));
            }
            "FIXEDMODULE" => {
                cursor.advance();
                fixed_modules.extend(parse_fixed_modules(&mut cursor)?);
            }
            "SOFTMODULE" => {
                cursor.advance();
                soft_modules.extend(parse_soft_specs(&mut cursor)?);
            }
            "CONNECTION" => {
                cursor.advance();
                connections.extend(parse_connections(&mut cursor)?);
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

    let outline = match outline {
        Some((width, height)) if width > 0 && height > 0 => ChipOutline { width, height },
        Some((width, height)) => {
            return Err(ParseError::InvalidOutline(format!(
                "chip dimensions must be positive, got {width} x {height}"
            )))
        }
        None => {
            return Err(ParseError::InvalidOutline(
                "missing CHIP section".to_string(),
            ))
        }
    };

    Ok(Problem {
        outline,
        fixed_modules,
        soft_modules,
        connections,
    })
}

fn parse_fixed_modules(cursor: &mut TokenCursor) -> ParseResult<Vec<FixedModule>> {
    let count = cursor.next_count("FIXEDMODULE")?;
    cursor.ensure_groups("FIXEDMODULE", count, 5)?;

    let mut modules = Vec::with_capacity(count);
    for _ in 0..count {
        let name = cursor.next_token("FIXEDMODULE name")?.to_string();
        let x = cursor.next_int("FIXEDMODULE x")?;
        let y = cursor.next_int("FIXEDMODULE y")?;
        let width = cursor.next_dimension("FIXEDMODULE width")?;
        let height = cursor.next_dimension("FIXEDMODULE height")?;
        modules.push(FixedModule {
            name,
            x,
            y,
            width,
            height,
        });
    }
    Ok(modules)
}

fn parse_soft_specs(cursor: &mut TokenCursor) -> ParseResult<Vec<SoftModuleSpec>> {
    let count = cursor.next_count("SOFTMODULE")?;
    cursor.ensure_groups("SOFTMODULE", count, 2)?;

    let mut specs = Vec::with_capacity(count);
    for _ in 0..count {
        let name = cursor.next_token("SOFTMODULE name")?.to_string();
        let area = cursor.next_token("SOFTMODULE area")?.to_string();
        specs.push(SoftModuleSpec { name, area });
    }
    Ok(specs)
}

fn parse_connections(cursor: &mut TokenCursor) -> ParseResult<Vec<Connection>> {
    let count = cursor.next_count("CONNECTION")?;
    cursor.ensure_groups("CONNECTION", count, 3)?;

    let mut connections = Vec::with_capacity(count);
    for _ in 0..count {
        let source = cursor.next_token("CONNECTION module")?.to_string();
        let target = cursor.next_token("CONNECTION module")?.to_string();
        let weight = cursor.next_int("CONNECTION weight")?;
        connections.push(Connection {
            source,
            target,
            weight,
        });
    }
    Ok(connections)
}
