//! Eviction timing for `NoExecute` taints.
//!
//! A cluster may carry several `NoExecute` taints, each activated at its own
//! instant and each tolerated (or not) for its own grace period. The caller
//! arms a single timer, so the result is the earliest point at which any of
//! them stops being tolerated.

use std::time::Duration;

use fleet_model::{Taint, Toleration};
use time::OffsetDateTime;
use tracing::{debug, instrument, trace};

/// Outcome of [`min_toleration_time_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionDelay {
    /// Nothing to wait for: no `NoExecute` taint, or all of them are
    /// tolerated forever.
    NotApplicable,
    /// A `NoExecute` taint has no activation time, so no deadline can be
    /// derived. Callers treat this as due.
    Unknown,
    /// Time left before eviction. Zero means act now.
    After(Duration),
}

impl EvictionDelay {
    /// Signed rendering of the delay. Both sentinels map to minus one
    /// nanosecond.
    pub fn as_signed(&self) -> time::Duration {
        match self {
            EvictionDelay::NotApplicable | EvictionDelay::Unknown => time::Duration::nanoseconds(-1),
            EvictionDelay::After(d) => time::Duration::try_from(*d).unwrap_or(time::Duration::MAX),
        }
    }

    /// Remaining time, if a deadline exists.
    pub fn remaining(&self) -> Option<Duration> {
        match self {
            EvictionDelay::After(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns `true` when the caller should act without waiting.
    pub fn is_due(&self) -> bool {
        match self {
            EvictionDelay::Unknown => true,
            EvictionDelay::After(d) => d.is_zero(),
            EvictionDelay::NotApplicable => false,
        }
    }
}

/// Grace a single taint gets from a toleration set.
enum Grace {
    Untolerated,
    Forever,
    Within(Duration),
}

fn grace_for(taint: &Taint, tolerations: &[Toleration]) -> Grace {
    tolerations
        .iter()
        .filter(|tol| tol.tolerates(taint))
        .fold(Grace::Untolerated, |grace, tol| match (grace, tol.grace_period) {
            (Grace::Within(cur), Some(g)) => Grace::Within(cur.min(g)),
            (Grace::Within(cur), None) => Grace::Within(cur),
            (_, Some(g)) => Grace::Within(g),
            (_, None) => Grace::Forever,
        })
}

fn time_left(activated_at: OffsetDateTime, grace: Duration, now: OffsetDateTime) -> Option<Duration> {
    let grace = time::Duration::try_from(grace).ok()?;
    let deadline = activated_at.checked_add(grace)?;
    let left = deadline - now;
    if left.is_negative() {
        Some(Duration::ZERO)
    } else {
        Some(left.unsigned_abs())
    }
}

/// Compute how long the caller may wait before evicting, as seen at `now`.
///
/// Only `NoExecute` taints take part. For each of them:
/// - a missing activation time makes the whole result [`EvictionDelay::Unknown`];
/// - no tolerating toleration means zero time left;
/// - tolerations without a grace period exclude the taint, unless another
///   tolerating toleration bounds it, in which case the shortest bound wins;
/// - otherwise the time left is `activated_at + grace - now`, floored at zero.
///
/// The smallest time left is returned, or [`EvictionDelay::NotApplicable`]
/// when no taint produced a deadline.
#[instrument(level = "trace", skip_all, fields(taints = taints.len(), tolerations = tolerations.len()))]
pub fn min_toleration_time_at(
    taints: &[Taint],
    tolerations: &[Toleration],
    now: OffsetDateTime,
) -> EvictionDelay {
    let mut min: Option<Duration> = None;

    for taint in taints.iter().filter(|t| t.is_no_execute()) {
        let Some(activated_at) = taint.activated_at else {
            debug!(key = %taint.key, "NoExecute taint has no activation time; eviction delay unknown");
            return EvictionDelay::Unknown;
        };

        let left = match grace_for(taint, tolerations) {
            Grace::Untolerated => Duration::ZERO,
            Grace::Forever => {
                trace!(key = %taint.key, "taint tolerated forever");
                continue;
            }
            Grace::Within(grace) => match time_left(activated_at, grace, now) {
                Some(left) => left,
                None => {
                    trace!(key = %taint.key, "deadline out of range; treated as no deadline");
                    continue;
                }
            },
        };

        trace!(key = %taint.key, left = ?left, "taint deadline");
        min = Some(min.map_or(left, |m| m.min(left)));
    }

    match min {
        Some(left) => {
            debug!(left = ?left, "eviction delay computed");
            EvictionDelay::After(left)
        }
        None => EvictionDelay::NotApplicable,
    }
}

/// [`min_toleration_time_at`] evaluated against the current UTC wall clock.
pub fn min_toleration_time(taints: &[Taint], tolerations: &[Toleration]) -> EvictionDelay {
    min_toleration_time_at(taints, tolerations, OffsetDateTime::now_utc())
}
