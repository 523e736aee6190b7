use thiserror::Error;

/// Failures raised while distributing pours.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("capacity overflow at receiver {receiver}: {capacity} + {eat} exceeds u64")]
    CapacityOverflow {
        receiver: usize,
        capacity: u64,
        eat: u64,
    },
}

/// Which input sequence a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Capacity,
    Pour,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Capacity => f.write_str("capacity"),
            Field::Pour => f.write_str("pour"),
        }
    }
}

/// Failures raised while reading a problem from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty; expected a header line with N and M")]
    MissingHeader,
    #[error("header must hold exactly two counts, found {found} value(s)")]
    MalformedHeader { found: usize },
    #[error("invalid count '{token}' in header; expected a non-negative integer")]
    InvalidCount { token: String },
    #[error("invalid integer '{token}' on line {line}")]
    InvalidToken { line: usize, token: String },
    #[error("expected {expected} {field} value(s), found {found}")]
    CountMismatch {
        field: Field,
        expected: usize,
        found: usize,
    },
    #[error("unexpected trailing value '{token}' on line {line}")]
    TrailingToken { line: usize, token: String },
    /// `value` is the token as written.
    #[error("{field} {index} is negative ({value})")]
    Negative {
        field: Field,
        index: usize,
        value: String,
    },
    /// `value` is the token as written, so it may exceed `u64`.
    #[error("{field} {index} is {value}, above the limit of {limit}")]
    ValueTooLarge {
        field: Field,
        index: usize,
        value: String,
        limit: u64,
    },
    #[error("{field} count {count} exceeds the limit of {limit}")]
    TooMany {
        field: Field,
        count: usize,
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let error = InputError::Negative {
            field: Field::Pour,
            index: 2,
            value: "-4".to_string(),
        };
        assert_eq!(error.to_string(), "pour 2 is negative (-4)");

        let error = SimError::CapacityOverflow {
            receiver: 1,
            capacity: u64::MAX,
            eat: 1,
        };
        assert!(error.to_string().contains("receiver 1"));
    }
}
