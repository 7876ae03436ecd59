use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::ModelError;

/// How a toleration compares its value against a taint's value.
///
/// An omitted operator behaves like [`TolerationOperator::Equal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TolerationOperator {
    /// Any value is accepted for the key.
    Exists,
    /// The value must match exactly.
    #[default]
    Equal,
}

impl fmt::Display for TolerationOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TolerationOperator::Exists => f.write_str("Exists"),
            TolerationOperator::Equal => f.write_str("Equal"),
        }
    }
}

impl FromStr for TolerationOperator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "exists" => Ok(TolerationOperator::Exists),
            "equal" | "" => Ok(TolerationOperator::Equal),
            _ => Err(ModelError::InvalidOperator(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for TolerationOperator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
