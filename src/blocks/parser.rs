// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use nom::{
    bytes::complete::{tag, take_till1},
    character::complete::{i64 as integer, space0, space1},
    combinator::{all_consuming, opt},
    sequence::{preceded, separated_pair, terminated},
    IResult, Parser,
};

use super::{Block, BlockLayout, BlockLayoutFormat};
use crate::error::{ParseError, ParseResult};
use crate::floorplan::ChipOutline;

/// Number of metric lines between the outline and the blocks in the
/// `WithMetrics` layout
pub const METRIC_LINES: usize = 5;

fn field(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace()).parse(input)
}

fn coordinate(input: &str) -> IResult<&str, i64> {
    preceded(space1, integer).parse(input)
}

fn outline_line(input: &str) -> IResult<&str, (i64, i64)> {
    all_consuming(terminated(
        preceded(
            (space0, tag("OUTLINE"), space1),
            separated_pair(integer, space1, integer),
        ),
        space0,
    ))
    .parse(input)
}

type BlockFields<'a> = (&'a str, (i64, i64, i64, i64), Option<&'a str>);

fn block_line(input: &str) -> IResult<&str, BlockFields<'_>> {
    all_consuming(terminated(
        (
            preceded(space0, field),
            (coordinate, coordinate, coordinate, coordinate),
            opt(preceded(space1, field)),
        ),
        space0,
    ))
    .parse(input)
}

impl BlockLayoutFormat {
    /// Guess the layout from the first block line: six fields means the
    /// rotated layout, anything else the metrics layout.
    pub fn detect(content: &str) -> Self {
        let first_block = content
            .lines()
            .skip(1)
            .find(|line| !line.trim().is_empty())
            .map(|line| line.split_whitespace().count());
        match first_block {
            Some(6) => BlockLayoutFormat::Rotated,
            _ => BlockLayoutFormat::WithMetrics,
        }
    }
}

pub fn parse_block_layout(
    content: &str,
    format: Option<BlockLayoutFormat>,
) -> ParseResult<BlockLayout> {
    let format = format.unwrap_or_else(|| BlockLayoutFormat::detect(content));
    let mut lines = content.lines().enumerate();

    let outline = match lines.next() {
        Some((_, line)) => parse_outline(line)?,
        None => return Err(ParseError::InvalidOutline("empty layout file".to_string())),
    };

    let mut metrics = Vec::new();
    if format == BlockLayoutFormat::WithMetrics {
        for _ in 0..METRIC_LINES {
            match lines.next() {
                Some((_, line)) => metrics.push(line.trim().to_string()),
                None => {
                    return Err(ParseError::UnexpectedEof {
                        expected: "metric line".to_string(),
                        position: metrics.len() + 1,
                    })
                }
            }
        }
    }

    let mut blocks = Vec::new();
    for (index, line) in lines {
        let field_count = line.split_whitespace().count();
        let wanted = match format {
            BlockLayoutFormat::Rotated => 6,
            BlockLayoutFormat::WithMetrics => 5,
        };
        if field_count == 0 || (format == BlockLayoutFormat::Rotated && field_count < wanted) {
            log::debug!("Skipping line {}: '{}'", index + 1, line.trim());
            continue;
        }

        let invalid = || ParseError::InvalidLine {
            line: index + 1,
            content: line.trim().to_string(),
        };
        if field_count != wanted {
            return Err(invalid());
        }

        let (_, (name, (x1, y1, x2, y2), flag)) = block_line(line).map_err(|_| invalid())?;
        blocks.push(Block {
            name: name.to_string(),
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
            rotated: flag.map(|f| f != "0"),
        });
    }

    Ok(BlockLayout {
        format,
        outline,
        metrics,
        blocks,
    })
}

fn parse_outline(line: &str) -> ParseResult<ChipOutline> {
    match outline_line(line) {
        Ok((_, (width, height))) if width > 0 && height > 0 => Ok(ChipOutline { width, height }),
        Ok((_, (width, height))) => Err(ParseError::InvalidOutline(format!(
            "outline dimensions must be positive, got {width} x {height}"
        ))),
        Err(_) => Err(ParseError::InvalidOutline(format!(
            "first line must be 'OUTLINE <width> <height>', got '{}'",
            line.trim()
        ))),
    }
}
