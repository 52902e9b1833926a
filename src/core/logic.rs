use crate::core::calculator::intervals::IntervalBuilder;
use crate::core::calculator::{aggregate, breaks};
use crate::core::clock::{Clock, SystemClock};
use crate::core::parser::{parse_token, tokenize};
use crate::errors::AppResult;
use crate::models::break_window::BreakPolicy;
use crate::models::calculation::CalculationResult;
use crate::models::work_day::WorkDay;
use tracing::debug;

pub struct Core;

impl Core {
    /// Raw text with the system clock and the statutory breaks.
    pub fn calculate(input: &str) -> AppResult<CalculationResult> {
        Self::calculate_with(input, &SystemClock, &BreakPolicy::default())
    }

    pub fn calculate_with(
        input: &str,
        clock: &dyn Clock,
        policy: &BreakPolicy,
    ) -> AppResult<CalculationResult> {
        Self::calculate_tokens(tokenize(input), clock, policy)
    }

    /// Pre-tokenized input. Each `now` token reads the clock once.
    pub fn calculate_tokens<'a>(
        tokens: impl IntoIterator<Item = &'a str>,
        clock: &dyn Clock,
        policy: &BreakPolicy,
    ) -> AppResult<CalculationResult> {
        let day = Self::build_work_day(tokens, clock)?;
        let deductions = breaks::calculate_breaks(&day, policy);
        debug!(
            intervals = day.intervals().len(),
            morning = deductions.morning,
            lunch = deductions.lunch,
            "break deductions computed"
        );
        Ok(aggregate::aggregate(&day, deductions))
    }

    pub fn build_work_day<'a>(
        tokens: impl IntoIterator<Item = &'a str>,
        clock: &dyn Clock,
    ) -> AppResult<WorkDay> {
        let mut builder = IntervalBuilder::new();
        for token in tokens {
            builder.push(parse_token(token, clock)?)?;
        }
        builder.finish()
    }
}
