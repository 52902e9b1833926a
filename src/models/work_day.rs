use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::interval::Interval;

/// A pause between two consecutive intervals (`end > start` always).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    pub start: ClockTime,
    pub end: ClockTime,
}

/// Ordered, non-empty, non-overlapping sequence of intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDay {
    intervals: Vec<Interval>,
}

impl WorkDay {
    pub fn new(intervals: Vec<Interval>) -> AppResult<Self> {
        if intervals.is_empty() {
            return Err(AppError::EmptyInput);
        }
        for w in intervals.windows(2) {
            Self::check_follows(&w[0], &w[1])?;
        }
        Ok(Self { intervals })
    }

    /// `next` must not start before `prev` ends. Touching intervals are fine.
    pub fn check_follows(prev: &Interval, next: &Interval) -> AppResult<()> {
        if next.start() < prev.end() {
            return Err(AppError::OverlappingIntervals {
                start: next.start(),
                previous_end: prev.end(),
            });
        }
        Ok(())
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn first_start(&self) -> ClockTime {
        self.intervals[0].start()
    }

    pub fn last_end(&self) -> ClockTime {
        self.intervals[self.intervals.len() - 1].end()
    }

    /// Genuine pauses only: back-to-back intervals produce no gap.
    pub fn gaps(&self) -> impl Iterator<Item = Gap> + '_ {
        self.intervals.windows(2).filter_map(|w| {
            let (prev, next) = (&w[0], &w[1]);
            (next.start() > prev.end()).then(|| Gap {
                start: prev.end(),
                end: next.start(),
            })
        })
    }

    pub fn total_minutes(&self) -> i64 {
        self.intervals.iter().map(Interval::duration_minutes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(a: (u16, u16), b: (u16, u16)) -> Interval {
        Interval::new(ClockTime::at(a.0, a.1), ClockTime::at(b.0, b.1)).unwrap()
    }

    #[test]
    fn empty_day_is_rejected() {
        assert!(matches!(WorkDay::new(vec![]), Err(AppError::EmptyInput)));
    }

    #[test]
    fn overlap_is_rejected() {
        let err = WorkDay::new(vec![iv((8, 0), (12, 0)), iv((11, 30), (16, 0))]).unwrap_err();
        assert!(matches!(
            err,
            AppError::OverlappingIntervals { start, previous_end }
                if start == ClockTime::at(11, 30) && previous_end == ClockTime::at(12, 0)
        ));
    }

    #[test]
    fn gaps_skip_touching_intervals() {
        let day = WorkDay::new(vec![
            iv((8, 0), (10, 0)),
            iv((10, 0), (12, 0)),
            iv((12, 45), (17, 0)),
        ])
        .unwrap();

        let gaps: Vec<Gap> = day.gaps().collect();
        assert_eq!(
            gaps,
            vec![Gap {
                start: ClockTime::at(12, 0),
                end: ClockTime::at(12, 45)
            }]
        );
        assert_eq!(day.first_start(), ClockTime::at(8, 0));
        assert_eq!(day.last_end(), ClockTime::at(17, 0));
        assert_eq!(day.total_minutes(), 120 + 120 + 255);
    }
}
