use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::ModelError;

/// Effect a taint has on policies that do not tolerate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TaintEffect {
    /// New workloads are not scheduled onto the cluster.
    NoSchedule,
    /// The scheduler avoids the cluster when other candidates exist.
    PreferNoSchedule,
    /// Workloads already placed are evicted once their grace period runs out.
    NoExecute,
}

impl TaintEffect {
    /// Returns the canonical name as it appears on cluster objects.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaintEffect::NoSchedule => "NoSchedule",
            TaintEffect::PreferNoSchedule => "PreferNoSchedule",
            TaintEffect::NoExecute => "NoExecute",
        }
    }
}

impl fmt::Display for TaintEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaintEffect {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "noschedule" => Ok(TaintEffect::NoSchedule),
            "prefernoschedule" => Ok(TaintEffect::PreferNoSchedule),
            "noexecute" => Ok(TaintEffect::NoExecute),
            _ => Err(ModelError::InvalidEffect(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for TaintEffect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("NoExecute".parse::<TaintEffect>(), Ok(TaintEffect::NoExecute));
        assert_eq!(" noschedule ".parse::<TaintEffect>(), Ok(TaintEffect::NoSchedule));
        assert_eq!(
            "PREFERNOSCHEDULE".parse::<TaintEffect>(),
            Ok(TaintEffect::PreferNoSchedule)
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "Evict".parse::<TaintEffect>().unwrap_err();
        assert_eq!(err, ModelError::InvalidEffect("Evict".to_string()));
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&TaintEffect::PreferNoSchedule).unwrap();
        assert_eq!(json, r#""PreferNoSchedule""#);

        let back: TaintEffect = serde_json::from_str(r#""NoExecute""#).unwrap();
        assert_eq!(back, TaintEffect::NoExecute);
    }

    #[test]
    fn decoding_agrees_with_from_str() {
        let back: TaintEffect = serde_json::from_str(r#""noexecute""#).unwrap();
        assert_eq!(back, TaintEffect::NoExecute);

        let err = serde_json::from_str::<TaintEffect>(r#""""#).unwrap_err();
        assert!(err.to_string().contains("invalid taint effect"));
    }
}
