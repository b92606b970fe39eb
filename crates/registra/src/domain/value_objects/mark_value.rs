//! MarkValue - bounded grade scale

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Grade on the A-F scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MarkValue {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl std::fmt::Display for MarkValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkValue::A => write!(f, "A"),
            MarkValue::B => write!(f, "B"),
            MarkValue::C => write!(f, "C"),
            MarkValue::D => write!(f, "D"),
            MarkValue::E => write!(f, "E"),
            MarkValue::F => write!(f, "F"),
        }
    }
}

impl std::str::FromStr for MarkValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(MarkValue::A),
            "B" => Ok(MarkValue::B),
            "C" => Ok(MarkValue::C),
            "D" => Ok(MarkValue::D),
            "E" => Ok(MarkValue::E),
            "F" => Ok(MarkValue::F),
            _ => Err(DomainError::Validation(format!("unknown mark value: {s}"))),
        }
    }
}
