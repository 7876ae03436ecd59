//! Data model shared by the cluster taint engine.
//!
//! Types in this crate mirror the shapes stored on cluster and policy objects
//! by the surrounding controller; they carry no decision logic beyond the
//! single-taint toleration rule.

mod domain;
pub use domain::*;

mod error;
pub use error::ModelError;
