//! Playback-time to journey-step mapping.
//!
//! The mapper is a pure function of its inputs and keeps no state between
//! calls, so it can run on every time-update and seek notification.

use crate::model::JourneyStep;

/// Index of the most recent step whose time has been reached.
///
/// Scans forward and stops at the first step later than `current_time`, so the
/// result is the largest `i` with `steps[i].time() <= current_time` only when
/// `steps` is sorted by time. For unsorted input the result is that of the
/// prefix scan.
///
/// Returns `None` when no step has occurred yet or `steps` is empty.
#[must_use]
pub fn active_step_index(current_time: f64, steps: &[JourneyStep]) -> Option<usize> {
    let mut active = None;
    for (index, step) in steps.iter().enumerate() {
        if step.time() <= current_time {
            active = Some(index);
        } else {
            break;
        }
    }
    active
}

/// Signed form of an active index, with `-1` meaning "no step yet".
#[must_use]
pub fn signed_index(active: Option<usize>) -> i64 {
    active
        .and_then(|index| i64::try_from(index).ok())
        .unwrap_or(-1)
}

/// Steps revealed so far: everything up to and including `active`.
#[must_use]
pub fn visible_steps(steps: &[JourneyStep], active: Option<usize>) -> &[JourneyStep] {
    match active {
        Some(index) => &steps[..(index + 1).min(steps.len())],
        None => &[],
    }
}
