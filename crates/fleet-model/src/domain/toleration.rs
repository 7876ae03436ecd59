use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Taint, TaintEffect, TolerationOperator};

/// Policy-side declaration that workloads can stay on a tainted cluster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toleration {
    /// Taint key to tolerate. Empty tolerates every key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default)]
    pub operator: TolerationOperator,
    /// Expected taint value; ignored for [`TolerationOperator::Exists`].
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Effect to tolerate. `None` tolerates all effects; an empty string
    /// decodes to `None`.
    #[serde(default, with = "effect_serde", skip_serializing_if = "Option::is_none")]
    pub effect: Option<TaintEffect>,
    /// How long a `NoExecute` taint is tolerated once it is activated.
    ///
    /// `None` tolerates the taint forever. Encoded in whole seconds, rounded
    /// up so the encoded period never undercuts the real one.
    #[serde(
        rename = "tolerationSeconds",
        default,
        with = "grace_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub grace_period: Option<Duration>,
}

impl Toleration {
    /// Tolerate every value of `key`.
    pub fn exists(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator: TolerationOperator::Exists,
            ..Self::default()
        }
    }

    /// Tolerate `key` only when it carries exactly `value`.
    pub fn equal<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            operator: TolerationOperator::Equal,
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_effect(mut self, effect: TaintEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn with_grace_period(mut self, grace: Duration) -> Self {
        self.grace_period = Some(grace);
        self
    }

    /// Returns `true` when key, value, effect and operator are all equal.
    ///
    /// The grace period is ignored.
    pub fn same_as(&self, other: &Toleration) -> bool {
        self.key == other.key
            && self.value == other.value
            && self.effect == other.effect
            && self.operator == other.operator
    }

    /// Returns `true` if this toleration tolerates `taint`.
    ///
    /// Effects match when the toleration leaves its effect unset or names the
    /// taint's effect. Keys match when the toleration key is empty or equal,
    /// regardless of the operator. Values are only compared for
    /// [`TolerationOperator::Equal`].
    pub fn tolerates(&self, taint: &Taint) -> bool {
        if self.effect.is_some_and(|effect| effect != taint.effect) {
            return false;
        }
        if !self.key.is_empty() && self.key != taint.key {
            return false;
        }
        match self.operator {
            TolerationOperator::Exists => true,
            TolerationOperator::Equal => self.value == taint.value,
        }
    }
}

mod effect_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::TaintEffect;

    pub fn serialize<S>(effect: &Option<TaintEffect>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        effect.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TaintEffect>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => {
                raw.parse::<TaintEffect>()
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}

mod grace_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(grace: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        grace
            .map(|d| {
                let whole = d.as_secs();
                if d.subsec_nanos() > 0 {
                    whole.saturating_add(1)
                } else {
                    whole
                }
            })
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
