/// Taint key applied when the control plane cannot reach a member cluster.
pub const TAINT_CLUSTER_UNREACHABLE: &str = "cluster.fleet.io/unreachable";

/// Taint key applied when a member cluster reports itself as not ready.
pub const TAINT_CLUSTER_NOT_READY: &str = "cluster.fleet.io/not-ready";
