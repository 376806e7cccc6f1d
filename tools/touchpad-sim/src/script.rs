//! Touch script parser
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! down <finger> <x> <y>
//! move <finger> <x> <y>
//! up <finger>
//! poll
//! state
//! geometry <width> <height>
//! reset
//! ```

use std::str::FromStr;
use thiserror::Error;

/// One script command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Down { finger: i32, x: i32, y: i32 },
    Move { finger: i32, x: i32, y: i32 },
    Up { finger: i32 },
    /// Drain the edge queue
    Poll,
    /// Print the aggregate button state
    State,
    Geometry { width: u32, height: u32 },
    Reset,
}

/// Command plus its 1-based source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' takes {expected} argument(s), got {got}")]
    ArgumentCount {
        line: usize,
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
}

/// Parse a whole script
pub fn parse(content: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let text = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let mut words = text.split_whitespace();
        let Some(name) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();
        let command = parse_command(line, name, &args)?;
        lines.push(ScriptLine { line, command });
    }
    Ok(lines)
}

fn parse_command(line: usize, name: &str, args: &[&str]) -> Result<Command, ScriptError> {
    let command = match name.to_ascii_lowercase().as_str() {
        "down" => {
            let [finger, x, y] = numbers::<i32, 3>(line, "down", args)?;
            Command::Down { finger, x, y }
        }
        "move" => {
            let [finger, x, y] = numbers::<i32, 3>(line, "move", args)?;
            Command::Move { finger, x, y }
        }
        "up" => {
            let [finger] = numbers::<i32, 1>(line, "up", args)?;
            Command::Up { finger }
        }
        "poll" => {
            numbers::<u32, 0>(line, "poll", args)?;
            Command::Poll
        }
        "state" => {
            numbers::<u32, 0>(line, "state", args)?;
            Command::State
        }
        "geometry" => {
            let [width, height] = numbers::<u32, 2>(line, "geometry", args)?;
            Command::Geometry { width, height }
        }
        "reset" => {
            numbers::<u32, 0>(line, "reset", args)?;
            Command::Reset
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: name.to_string(),
            })
        }
    };
    Ok(command)
}

/// Parse exactly `N` numeric arguments
fn numbers<T: FromStr + Copy + Default, const N: usize>(
    line: usize,
    command: &'static str,
    args: &[&str],
) -> Result<[T; N], ScriptError> {
    if args.len() != N {
        return Err(ScriptError::ArgumentCount {
            line,
            command,
            expected: N,
            got: args.len(),
        });
    }
    let mut out = [T::default(); N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().map_err(|_| ScriptError::InvalidNumber {
            line,
            value: arg.to_string(),
        })?;
    }
    Ok(out)
}
