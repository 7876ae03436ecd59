//! Taint reconciliation, toleration matching and eviction timing for member
//! clusters.
//!
//! Every function here is a pure computation over in-memory taint and
//! toleration slices. Persisting the cluster object, arming timers and
//! evicting workloads belong to the caller.

pub mod eviction;
pub use eviction::{EvictionDelay, min_toleration_time, min_toleration_time_at};
pub mod matcher;
pub use matcher::{matching_tolerations, tolerates_all};
pub mod message;
pub use message::taints_message;
pub mod predicate;
pub use predicate::{has_no_execute_taints, no_execute_taints, taint_exists, toleration_exists};
pub mod reconcile;
pub use reconcile::{reconcile_taints, reconcile_taints_at};
