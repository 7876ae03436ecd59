use fleet_model::{Taint, Toleration};
use tracing::{instrument, trace};

/// Check `taints` against `tolerations`.
///
/// Returns whether every taint is tolerated, together with the tolerations
/// that did the tolerating. For each tolerated taint every toleration that
/// tolerates it is appended, in taint-then-toleration order. The same
/// toleration shows up once per taint it covers.
///
/// An empty taint set is trivially tolerated.
#[instrument(level = "trace", skip_all, fields(taints = taints.len(), tolerations = tolerations.len()))]
pub fn matching_tolerations(taints: &[Taint], tolerations: &[Toleration]) -> (bool, Vec<Toleration>) {
    if taints.is_empty() {
        return (true, Vec::new());
    }
    if tolerations.is_empty() {
        return (false, Vec::new());
    }

    let mut fully_tolerated = true;
    let mut matched = Vec::new();

    for taint in taints {
        let before = matched.len();
        matched.extend(tolerations.iter().filter(|tol| tol.tolerates(taint)).cloned());

        if matched.len() == before {
            trace!(key = %taint.key, effect = %taint.effect, "taint not tolerated");
            fully_tolerated = false;
        }
    }

    (fully_tolerated, matched)
}

/// Returns `true` when every taint is tolerated by at least one toleration.
pub fn tolerates_all(taints: &[Taint], tolerations: &[Toleration]) -> bool {
    taints
        .iter()
        .all(|taint| tolerations.iter().any(|tol| tol.tolerates(taint)))
}
