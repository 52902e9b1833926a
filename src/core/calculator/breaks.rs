//! Break deduction for a workday against the morning and lunch windows.

use crate::models::break_window::{BreakPolicy, BreakWindow};
use crate::models::work_day::{Gap, WorkDay};
use tracing::debug;

/// Minutes deducted per window, never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakDeductions {
    pub morning: i64,
    pub lunch: i64,
}

impl BreakDeductions {
    pub fn total(&self) -> i64 {
        self.morning + self.lunch
    }
}

pub fn calculate_breaks(day: &WorkDay, policy: &BreakPolicy) -> BreakDeductions {
    BreakDeductions {
        morning: deduction_for(day, &policy.morning),
        lunch: deduction_for(day, &policy.lunch),
    }
}

/// Reported deduction for one window, clamped at zero.
pub fn deduction_for(day: &WorkDay, window: &BreakWindow) -> i64 {
    raw_deduction(day, window).max(0)
}

/// Boundary deduction minus the pauses already taken inside the window.
/// Can be negative when the pauses exceed what the boundaries owed.
pub fn raw_deduction(day: &WorkDay, window: &BreakWindow) -> i64 {
    let mut deduction = boundary_deduction(day, window);
    for gap in day.gaps() {
        let taken = gap_overlap(window, &gap);
        if taken > 0 {
            debug!(
                gap_start = %gap.start,
                gap_end = %gap.end,
                taken,
                "pause inside break window {} - {}",
                window.start,
                window.end
            );
        }
        deduction -= taken;
    }
    deduction
}

/// Deduction owed from the first start and last end alone.
pub fn boundary_deduction(day: &WorkDay, window: &BreakWindow) -> i64 {
    let first = day.first_start().minutes();
    let last = day.last_end().minutes();
    let cutoff = window.cutoff();
    let win_start = window.start.minutes();
    let win_end = window.end.minutes();

    // With end-side reduction the day must reach past the cutoff to owe anything.
    let ends_too_early = if window.end_partial {
        last <= cutoff
    } else {
        last <= win_start
    };

    let owed = if first >= cutoff || ends_too_early {
        0
    } else if first > win_start {
        cutoff - first
    } else if window.end_partial && last < win_end {
        window.minutes - (win_end - last)
    } else {
        window.minutes
    };

    debug!(
        first = %day.first_start(),
        last = %day.last_end(),
        owed,
        "boundary deduction for window {} - {}",
        window.start,
        window.end
    );
    owed
}

/// Part of a pause lying inside the window, capped at the full break length.
pub fn gap_overlap(window: &BreakWindow, gap: &Gap) -> i64 {
    if gap.start > window.end || gap.end < window.start {
        return 0;
    }
    let from = gap.start.max(window.start);
    let to = gap.end.min(window.end);
    from.minutes_until(to).clamp(0, window.minutes)
}
