//! Serialization of command sequences to the SVG path-data mini-language,
//! and a parser for the same dialect.
//!
//! Serialization is a structural transliteration: one output command per
//! input command, same letters, same coordinate order, same
//! absolute/relative mode. Curves are never approximated and commands are
//! never reordered, so `parse(serialize(cmds)) == cmds` holds exactly.

use glyphgen_vector::{PathCommand, Point};
use thiserror::Error;

use std::fmt::Write as _;

/// Errors produced while parsing path data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathDataError {
    /// A byte that is neither a command letter nor a coordinate.
    #[error("unexpected character {ch:?} at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A coordinate token that does not parse as a number.
    #[error("invalid number at byte {pos}")]
    InvalidNumber { pos: usize },

    /// Input ended in the middle of a coordinate group.
    #[error("truncated coordinate sequence at byte {pos}")]
    Truncated { pos: usize },
}

/// Serialize a command sequence to path data.
pub fn to_path_data(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for cmd in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        match *cmd {
            PathCommand::MoveTo { to, relative } => {
                out.push(if relative { 'm' } else { 'M' });
                push_coords(&mut out, &[to.x, to.y]);
            }
            PathCommand::LineTo { to, relative } => {
                out.push(if relative { 'l' } else { 'L' });
                push_coords(&mut out, &[to.x, to.y]);
            }
            PathCommand::QuadTo {
                control,
                end,
                relative,
            } => {
                out.push(if relative { 'q' } else { 'Q' });
                push_coords(&mut out, &[control.x, control.y, end.x, end.y]);
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
                relative,
            } => {
                out.push(if relative { 'c' } else { 'C' });
                push_coords(
                    &mut out,
                    &[control1.x, control1.y, control2.x, control2.y, end.x, end.y],
                );
            }
            PathCommand::Close => out.push('Z'),
        }
    }
    out
}

fn push_coords(out: &mut String, coords: &[f32]) {
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // f32 Display prints the shortest representation that round-trips.
        let _ = write!(out, "{}", c);
    }
}

/// Parse path data back into a command sequence.
///
/// Accepts the dialect [`to_path_data`] emits plus the standard liberties:
/// comma or whitespace separators, and implicit command repetition (extra
/// coordinate groups after `M`/`m` continue as `L`/`l`, per the format's
/// rules).
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>, PathDataError> {
    let mut scanner = Scanner::new(data);
    let mut commands = Vec::new();

    scanner.skip_separators();
    while let Some(byte) = scanner.peek() {
        let pos = scanner.pos;
        scanner.advance();
        match byte {
            b'M' | b'm' | b'L' | b'l' | b'Q' | b'q' | b'C' | b'c' => {
                let relative = byte.is_ascii_lowercase();
                let mut first_group = true;
                loop {
                    let command = match byte.to_ascii_uppercase() {
                        b'M' if first_group => PathCommand::MoveTo {
                            to: scanner.point()?,
                            relative,
                        },
                        // Implicit repetition after a move continues as lines.
                        b'M' | b'L' => PathCommand::LineTo {
                            to: scanner.point()?,
                            relative,
                        },
                        b'Q' => PathCommand::QuadTo {
                            control: scanner.point()?,
                            end: scanner.point()?,
                            relative,
                        },
                        _ => PathCommand::CubicTo {
                            control1: scanner.point()?,
                            control2: scanner.point()?,
                            end: scanner.point()?,
                            relative,
                        },
                    };
                    commands.push(command);
                    first_group = false;
                    scanner.skip_separators();
                    if !scanner.at_number_start() {
                        break;
                    }
                }
            }
            b'Z' | b'z' => {
                commands.push(PathCommand::Close);
                scanner.skip_separators();
            }
            other => {
                return Err(PathDataError::UnexpectedChar {
                    ch: other as char,
                    pos,
                });
            }
        }
    }

    Ok(commands)
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            bytes: data.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace() || b == b',') {
            self.advance();
        }
    }

    fn at_number_start(&self) -> bool {
        matches!(self.peek(), Some(b'0'..=b'9' | b'+' | b'-' | b'.'))
    }

    fn point(&mut self) -> Result<Point, PathDataError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Point::new(x, y))
    }

    fn number(&mut self) -> Result<f32, PathDataError> {
        self.skip_separators();
        let start = self.pos;
        if self.peek().is_none() {
            return Err(PathDataError::Truncated { pos: start });
        }

        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.advance();
        }
        let mut saw_digit = false;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.advance();
            saw_digit = true;
        }
        if self.peek() == Some(b'.') {
            self.advance();
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.advance();
                saw_digit = true;
            }
        }
        if !saw_digit {
            return Err(PathDataError::InvalidNumber { pos: start });
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.advance();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.advance();
            }
            let mut saw_exp_digit = false;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.advance();
                saw_exp_digit = true;
            }
            if !saw_exp_digit {
                return Err(PathDataError::InvalidNumber { pos: start });
            }
        }

        let token = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| PathDataError::InvalidNumber { pos: start })?;
        token
            .parse::<f32>()
            .map_err(|_| PathDataError::InvalidNumber { pos: start })
    }
}
