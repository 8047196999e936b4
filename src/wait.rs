//! Bounded status wait: one query, one sleep, one re-query.

use std::time::Duration;

/// Shortest delay a wait window will sleep, regardless of the hint.
pub(crate) const POLL_DELAY_FLOOR: Duration = Duration::from_secs(1);
/// Longest delay a wait window will sleep, regardless of the hint.
pub(crate) const POLL_DELAY_CEILING: Duration = Duration::from_secs(10);

/// One tenth of the service's advertised wait hint, clamped to
/// [1 s, 10 s]. A zero or missing hint still yields the floor.
pub(crate) fn poll_delay(wait_hint_ms: u32) -> Duration {
    Duration::from_millis(u64::from(wait_hint_ms) / 10).clamp(POLL_DELAY_FLOOR, POLL_DELAY_CEILING)
}

/// Block until `service` reaches `target` or one wait window elapses.
///
/// This is deliberately a single-shot wait, not a polling loop: the state
/// is queried, the thread sleeps once for the hint-derived delay, and the
/// state is re-checked exactly once. A transition that needs longer than
/// one window is reported as [`SvcError::StateNotReached`], never retried.
#[cfg(windows)]
pub(crate) fn wait_for_state(
    service: &crate::handles::ServiceHandle,
    target: crate::status::ServiceState,
) -> Result<(), crate::error::SvcError> {
    use crate::error::SvcError;
    use crate::ops::query_live_status;

    let status = query_live_status(service)?;
    if status.state == target {
        return Ok(());
    }

    let delay = poll_delay(status.wait_hint_ms);
    log::debug!(
        "service is {}, sleeping {}ms waiting for {}",
        status.state,
        delay.as_millis(),
        target
    );
    std::thread::sleep(delay);

    let status = query_live_status(service)?;
    if status.state == target {
        Ok(())
    } else {
        Err(SvcError::StateNotReached {
            target,
            observed: status.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hint_gets_the_floor() {
        assert_eq!(poll_delay(0), Duration::from_secs(1));
    }

    #[test]
    fn small_hints_are_raised_to_the_floor() {
        // hint/10 below one second
        assert_eq!(poll_delay(9_999), Duration::from_secs(1));
        assert_eq!(poll_delay(500), Duration::from_secs(1));
    }

    #[test]
    fn midrange_hints_sleep_a_tenth_of_the_hint() {
        assert_eq!(poll_delay(10_000), Duration::from_secs(1));
        assert_eq!(poll_delay(42_000), Duration::from_millis(4_200));
        assert_eq!(poll_delay(100_000), Duration::from_secs(10));
    }

    #[test]
    fn large_hints_are_clamped_to_the_ceiling() {
        assert_eq!(poll_delay(100_001), Duration::from_secs(10));
        assert_eq!(poll_delay(u32::MAX), Duration::from_secs(10));
    }
}
