use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid taint effect: {0} (expected: NoSchedule|PreferNoSchedule|NoExecute)")]
    InvalidEffect(String),
    #[error("invalid toleration operator: {0} (expected: Exists|Equal)")]
    InvalidOperator(String),
}
