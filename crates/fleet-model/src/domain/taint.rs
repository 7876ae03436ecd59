use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{TAINT_CLUSTER_NOT_READY, TAINT_CLUSTER_UNREACHABLE, TaintEffect};

/// Marker attached to a cluster signalling an adverse condition.
///
/// A cluster never carries two taints with the same `(key, effect)` pair;
/// the value is payload and does not take part in that identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taint {
    /// Taint key, e.g. [`TAINT_CLUSTER_UNREACHABLE`].
    pub key: String,
    /// Optional payload; empty when unset.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Effect on policies that do not tolerate the taint.
    pub effect: TaintEffect,
    /// When the taint was put on the cluster.
    ///
    /// Only meaningful for [`TaintEffect::NoExecute`] taints, where it is the
    /// starting point of every toleration grace period.
    #[serde(
        rename = "timeAdded",
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub activated_at: Option<OffsetDateTime>,
}

impl Taint {
    pub fn new<K, V>(key: K, value: V, effect: TaintEffect) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
            effect,
            activated_at: None,
        }
    }

    /// `NoExecute` taint put on clusters the control plane cannot reach.
    pub fn unreachable() -> Self {
        Self::new(TAINT_CLUSTER_UNREACHABLE, "", TaintEffect::NoExecute)
    }

    /// `NoExecute` taint put on clusters that report not ready.
    pub fn not_ready() -> Self {
        Self::new(TAINT_CLUSTER_NOT_READY, "", TaintEffect::NoExecute)
    }

    pub fn with_activated_at(mut self, at: OffsetDateTime) -> Self {
        self.activated_at = Some(at);
        self
    }

    /// Returns `true` when both taints occupy the same slot of a taint set,
    /// i.e. they share key and effect.
    #[inline]
    pub fn same_identity(&self, other: &Taint) -> bool {
        self.key == other.key && self.effect == other.effect
    }

    /// Returns `true` when key, value and effect are all equal.
    ///
    /// The activation timestamp is ignored.
    #[inline]
    pub fn same_as(&self, other: &Taint) -> bool {
        self.same_identity(other) && self.value == other.value
    }

    #[inline]
    pub fn is_no_execute(&self) -> bool {
        self.effect == TaintEffect::NoExecute
    }
}
