use std::fmt;

use crate::ValueKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// accessor called for a variant the value does not hold
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
    /// array read or write outside `[0, count)`
    IndexOutOfBounds { index: usize, count: usize },
    /// backing storage could not grow to `requested` slots
    ResourceExhausted { requested: usize },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            ValueError::IndexOutOfBounds { index, count } => {
                write!(f, "index {index} out of bounds (count {count})")
            }
            ValueError::ResourceExhausted { requested } => {
                write!(f, "cannot grow value storage to {requested} slots")
            }
        }
    }
}

impl std::error::Error for ValueError {}

pub type ValueResult<T> = Result<T, ValueError>;
