//! Degree - academic degree held by a teacher

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Bachelor,
    Master,
    Phd,
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Degree::Bachelor => write!(f, "bachelor"),
            Degree::Master => write!(f, "master"),
            Degree::Phd => write!(f, "phd"),
        }
    }
}

impl std::str::FromStr for Degree {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bachelor" => Ok(Degree::Bachelor),
            "master" => Ok(Degree::Master),
            "phd" => Ok(Degree::Phd),
            _ => Err(DomainError::Validation(format!("unknown degree: {s}"))),
        }
    }
}
