use fleet_model::Taint;
use time::OffsetDateTime;
use tracing::{debug, instrument, trace};

/// Apply a taint delta to a cluster's current taints.
///
/// Removals are matched by key and effect and drop the first matching entry.
/// Additions are appended afterwards in the given order; an addition whose
/// key and effect already sit in the result is skipped, so the returned set
/// never holds two taints with the same identity. Listing the same identity
/// in both `to_add` and `to_remove` therefore replaces the entry.
///
/// The inputs are left untouched.
#[instrument(level = "trace", skip_all, fields(current = current.len()))]
pub fn reconcile_taints(to_add: &[Taint], to_remove: &[Taint], current: &[Taint]) -> Vec<Taint> {
    apply(to_add, to_remove, current, None)
}

/// Same as [`reconcile_taints`], but stamps `now` as the activation time of
/// appended taints that do not carry one yet.
#[instrument(level = "trace", skip_all, fields(current = current.len()))]
pub fn reconcile_taints_at(
    to_add: &[Taint],
    to_remove: &[Taint],
    current: &[Taint],
    now: OffsetDateTime,
) -> Vec<Taint> {
    apply(to_add, to_remove, current, Some(now))
}

fn apply(
    to_add: &[Taint],
    to_remove: &[Taint],
    current: &[Taint],
    now: Option<OffsetDateTime>,
) -> Vec<Taint> {
    let mut taints = current.to_vec();

    let mut removed = 0usize;
    for target in to_remove {
        if let Some(pos) = taints.iter().position(|t| t.same_identity(target)) {
            let gone = taints.remove(pos);
            trace!(key = %gone.key, effect = %gone.effect, "taint removed");
            removed += 1;
        }
    }

    let mut added = 0usize;
    for taint in to_add {
        if taints.iter().any(|t| t.same_identity(taint)) {
            continue;
        }
        let mut taint = taint.clone();
        if let Some(now) = now
            && taint.activated_at.is_none()
        {
            taint.activated_at = Some(now);
        }
        trace!(key = %taint.key, effect = %taint.effect, "taint added");
        taints.push(taint);
        added += 1;
    }

    if added > 0 || removed > 0 {
        debug!(added, removed, total = taints.len(), "cluster taints reconciled");
    }
    taints
}

#[cfg(test)]
mod tests {
    use fleet_model::{TAINT_CLUSTER_NOT_READY, TaintEffect};
    use time::macros::datetime;

    use super::*;

    fn keys(taints: &[Taint]) -> Vec<&str> {
        taints.iter().map(|t| t.key.as_str()).collect()
    }

    #[test]
    fn ready_true_to_false() {
        let got = reconcile_taints(&[Taint::not_ready()], &[Taint::unreachable()], &[]);
        assert_eq!(got, vec![Taint::not_ready()]);
    }

    #[test]
    fn ready_true_to_unknown() {
        let got = reconcile_taints(&[Taint::unreachable()], &[Taint::not_ready()], &[]);
        assert_eq!(got, vec![Taint::unreachable()]);
    }

    #[test]
    fn ready_false_to_unknown() {
        let got = reconcile_taints(
            &[Taint::unreachable()],
            &[Taint::not_ready()],
            &[Taint::not_ready()],
        );
        assert_eq!(got, vec![Taint::unreachable()]);
    }

    #[test]
    fn ready_false_to_true() {
        let got = reconcile_taints(
            &[],
            &[Taint::not_ready(), Taint::unreachable()],
            &[Taint::not_ready()],
        );
        assert!(got.is_empty());
    }

    #[test]
    fn ready_unknown_to_false() {
        let got = reconcile_taints(
            &[Taint::not_ready()],
            &[Taint::unreachable()],
            &[Taint::unreachable()],
        );
        assert_eq!(got, vec![Taint::not_ready()]);
    }

    #[test]
    fn addition_already_present_is_not_duplicated() {
        let got = reconcile_taints(
            &[Taint::unreachable()],
            &[Taint::not_ready()],
            &[Taint::unreachable()],
        );
        assert_eq!(got, vec![Taint::unreachable()]);
    }

    #[test]
    fn empty_delta_is_identity() {
        let current = vec![
            Taint::new("a", "1", TaintEffect::NoSchedule),
            Taint::unreachable(),
        ];
        assert_eq!(reconcile_taints(&[], &[], &current), current);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let current = vec![
            Taint::new("a", "1", TaintEffect::NoSchedule),
            Taint::unreachable(),
        ];
        let add = [
            Taint::not_ready(),
            Taint::new("b", "", TaintEffect::PreferNoSchedule),
        ];
        let remove = [Taint::unreachable()];

        let once = reconcile_taints(&add, &remove, &current);
        let twice = reconcile_taints(&add, &remove, &once);
        assert_eq!(once, twice);
        assert_eq!(keys(&once), vec!["a", TAINT_CLUSTER_NOT_READY, "b"]);
    }

    #[test]
    fn same_identity_in_add_and_remove_replaces_value() {
        let current = vec![
            Taint::new("a", "old", TaintEffect::NoExecute),
            Taint::new("b", "", TaintEffect::NoSchedule),
        ];
        let got = reconcile_taints(
            &[Taint::new("a", "new", TaintEffect::NoExecute)],
            &[Taint::new("a", "", TaintEffect::NoExecute)],
            &current,
        );
        assert_eq!(
            got,
            vec![
                Taint::new("b", "", TaintEffect::NoSchedule),
                Taint::new("a", "new", TaintEffect::NoExecute),
            ]
        );
    }

    #[test]
    fn removal_ignores_value_but_not_effect() {
        let current = vec![Taint::new("a", "v", TaintEffect::NoExecute)];

        let got = reconcile_taints(
            &[],
            &[Taint::new("a", "other", TaintEffect::NoExecute)],
            &current,
        );
        assert!(got.is_empty());

        let got = reconcile_taints(&[], &[Taint::new("a", "v", TaintEffect::NoSchedule)], &current);
        assert_eq!(got, current);
    }

    #[test]
    fn input_is_not_mutated() {
        let current = vec![Taint::unreachable()];
        let _ = reconcile_taints(&[Taint::not_ready()], &[Taint::unreachable()], &current);
        assert_eq!(current, vec![Taint::unreachable()]);
    }

    #[test]
    fn duplicate_additions_collapse() {
        let got = reconcile_taints(&[Taint::not_ready(), Taint::not_ready()], &[], &[]);
        assert_eq!(got.len(), 1);
    }

    #[test]
    fn stamped_variant_sets_missing_activation_time() {
        let now = datetime!(2025-09-23 12:00 UTC);
        let earlier = datetime!(2025-09-23 11:00 UTC);

        let got = reconcile_taints_at(
            &[
                Taint::not_ready(),
                Taint::new("b", "", TaintEffect::NoExecute).with_activated_at(earlier),
            ],
            &[],
            &[Taint::unreachable()],
            now,
        );

        assert_eq!(got.len(), 3);
        // survivors are kept as-is
        assert_eq!(got[0].activated_at, None);
        assert_eq!(got[1].activated_at, Some(now));
        assert_eq!(got[2].activated_at, Some(earlier));
    }

    #[test]
    fn stamped_variant_is_idempotent_at_same_instant() {
        let now = datetime!(2025-09-23 12:00 UTC);
        let add = [Taint::not_ready()];
        let remove = [Taint::unreachable()];

        let once = reconcile_taints_at(&add, &remove, &[Taint::unreachable()], now);
        let twice = reconcile_taints_at(&add, &remove, &once, now);
        assert_eq!(once, twice);
    }
}
