use fleet_model::{Taint, Toleration};

/// Returns `true` if `taints` holds a taint with the same key, value and
/// effect as `target`.
#[inline]
pub fn taint_exists(taints: &[Taint], target: &Taint) -> bool {
    taints.iter().any(|t| t.same_as(target))
}

/// Returns `true` if `tolerations` holds a toleration with the same key,
/// value, effect and operator as `target`.
#[inline]
pub fn toleration_exists(tolerations: &[Toleration], target: &Toleration) -> bool {
    tolerations.iter().any(|t| t.same_as(target))
}

#[inline]
pub fn has_no_execute_taints(taints: &[Taint]) -> bool {
    taints.iter().any(Taint::is_no_execute)
}

/// Returns the `NoExecute` taints in their original order.
///
/// The result is empty when there are none.
pub fn no_execute_taints(taints: &[Taint]) -> Vec<Taint> {
    taints.iter().filter(|t| t.is_no_execute()).cloned().collect()
}
