//! Parser for textual paths such as `accounts[1].handle`.
//!
//! Grammar:
//!
//! ```text
//! path    := "" | head step*
//! head    := name | index
//! step    := "." name | index
//! index   := "[" digits "]"
//! name    := any characters except `.`, `[` and `]`, at least one
//! ```

use smallvec::SmallVec;

use super::error::PathError;

/// One parsed step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Field(String),
    Index(usize),
}

pub type Steps = SmallVec<[Step; 8]>;

pub fn parse(input: &str) -> Result<Steps, PathError> {
    let mut steps = Steps::new();
    let bytes = input.as_bytes();
    let mut position = 0;

    while position < bytes.len() {
        match bytes[position] {
            b'.' if position == 0 => return Err(syntax(input, 1, "empty field name")),
            b'.' => {
                let (name, next) = read_name(input, position + 1)?;
                steps.push(Step::Field(name));
                position = next;
            }
            b'[' => {
                let (index, next) = read_index(input, position)?;
                steps.push(Step::Index(index));
                position = next;
            }
            b']' => return Err(syntax(input, position, "unmatched `]`")),
            _ if position == 0 => {
                let (name, next) = read_name(input, 0)?;
                steps.push(Step::Field(name));
                position = next;
            }
            _ => return Err(syntax(input, position, "expected `.` or `[`")),
        }
    }

    Ok(steps)
}

fn read_name(input: &str, start: usize) -> Result<(String, usize), PathError> {
    let end = input[start..]
        .find(|character: char| matches!(character, '.' | '[' | ']'))
        .map_or(input.len(), |offset| start + offset);
    if end == start {
        return Err(syntax(input, start, "empty field name"));
    }
    Ok((input[start..end].to_owned(), end))
}

fn read_index(input: &str, open: usize) -> Result<(usize, usize), PathError> {
    let digits_start = open + 1;
    let close = input[digits_start..]
        .find(']')
        .map(|offset| digits_start + offset)
        .ok_or_else(|| syntax(input, open, "unclosed `[`"))?;
    let digits = &input[digits_start..close];
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(syntax(input, digits_start, "index must be a non-negative integer"));
    }
    let index = digits
        .parse()
        .map_err(|_| syntax(input, digits_start, "index is too large"))?;
    Ok((index, close + 1))
}

fn syntax(input: &str, position: usize, reason: &'static str) -> PathError {
    PathError::Syntax {
        input: input.to_owned(),
        position,
        reason,
    }
}
