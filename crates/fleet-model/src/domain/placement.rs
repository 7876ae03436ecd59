use serde::{Deserialize, Serialize};

use crate::Toleration;

/// Scheduling constraints of a propagation policy.
///
/// Only the part consumed by the taint engine is modelled here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_tolerations: Vec<Toleration>,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tolerations to the placement, keeping their order.
    ///
    /// Duplicates are kept; every entry takes part in matching.
    pub fn add_tolerations<I>(&mut self, tolerations: I)
    where
        I: IntoIterator<Item = Toleration>,
    {
        self.cluster_tolerations.extend(tolerations);
    }

    pub fn tolerations(&self) -> &[Toleration] {
        &self.cluster_tolerations
    }
}
