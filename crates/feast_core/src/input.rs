//! Text input: a header line `N M`, then N capacities and M pour amounts.
//!
//! The usual layout puts the capacities on line 2 and the pours on line 3, but
//! any whitespace between values is accepted. Exactly N + M values must follow
//! the header.

use crate::config::InputLimits;
use crate::error::{Field, InputError};
use crate::model::Problem;

struct Token<'a> {
    line: usize,
    text: &'a str,
}

fn tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.lines().zip(1..).flat_map(|(content, line)| {
        content
            .split_whitespace()
            .map(move |text| Token { line, text })
    })
}

/// Parse a problem using the default [`InputLimits`].
pub fn parse_problem(text: &str) -> Result<Problem, InputError> {
    parse_problem_with_limits(text, &InputLimits::default())
}

pub fn parse_problem_with_limits(text: &str, limits: &InputLimits) -> Result<Problem, InputError> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());
    let (header_idx, header) = lines.next().ok_or(InputError::MissingHeader)?;

    let counts: Vec<&str> = header.split_whitespace().collect();
    if counts.len() != 2 {
        return Err(InputError::MalformedHeader {
            found: counts.len(),
        });
    }
    let num_receivers = parse_count(counts[0])?;
    let num_pours = parse_count(counts[1])?;

    if num_receivers > limits.max_receivers {
        return Err(InputError::TooMany {
            field: Field::Capacity,
            count: num_receivers,
            limit: limits.max_receivers,
        });
    }
    if num_pours > limits.max_pours {
        return Err(InputError::TooMany {
            field: Field::Pour,
            count: num_pours,
            limit: limits.max_pours,
        });
    }

    let header_line = header_idx + 1;
    let mut body = tokens(text).skip_while(|token| token.line <= header_line);

    let capacities = read_values(&mut body, Field::Capacity, num_receivers, limits.max_value)?;
    let pours = read_values(&mut body, Field::Pour, num_pours, limits.max_value)?;

    if let Some(extra) = body.next() {
        return Err(InputError::TrailingToken {
            line: extra.line,
            token: extra.text.to_string(),
        });
    }

    Ok(Problem::new(capacities, pours))
}

fn parse_count(token: &str) -> Result<usize, InputError> {
    token.parse::<usize>().map_err(|_| InputError::InvalidCount {
        token: token.to_string(),
    })
}

fn read_values<'a>(
    body: &mut impl Iterator<Item = Token<'a>>,
    field: Field,
    expected: usize,
    max_value: u64,
) -> Result<Vec<u64>, InputError> {
    let mut values = Vec::with_capacity(expected);
    for index in 0..expected {
        let Some(token) = body.next() else {
            return Err(InputError::CountMismatch {
                field,
                expected,
                found: index,
            });
        };
        values.push(parse_value(&token, field, index, max_value)?);
    }
    Ok(values)
}

/// Parse one value token. `-0` reads as zero; digit runs too long for
/// `u64` are reported against the limit rather than as malformed.
fn parse_value(
    token: &Token<'_>,
    field: Field,
    index: usize,
    max_value: u64,
) -> Result<u64, InputError> {
    let text = token.text;
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidToken {
            line: token.line,
            token: text.to_string(),
        });
    }

    let magnitude = digits.trim_start_matches('0');
    if negative && !magnitude.is_empty() {
        return Err(InputError::Negative {
            field,
            index,
            value: text.to_string(),
        });
    }
    if magnitude.is_empty() {
        return Ok(0);
    }
    match magnitude.parse::<u64>() {
        Ok(value) if value <= max_value => Ok(value),
        _ => Err(InputError::ValueTooLarge {
            field,
            index,
            value: text.to_string(),
            limit: max_value,
        }),
    }
}
