use crate::cli::commands::{clock_for, tokens_from_args};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::{ExportFormat, render};
use crate::models::break_window::BreakPolicy;
use crate::ui::messages::error;
use std::io::{self, BufRead, IsTerminal};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        times,
        format,
        now,
        no_color,
    } = cmd
    {
        let clock = clock_for(now)?;
        let policy = cfg.policy();
        let format = format.unwrap_or(cfg.default_format);
        let color = !*no_color && format == ExportFormat::Text && io::stdout().is_terminal();

        if times.is_empty() {
            return calc_lines(io::stdin().lock(), clock.as_ref(), &policy, format, color);
        }

        let result = Core::calculate_tokens(tokens_from_args(times), clock.as_ref(), &policy)?;
        print!("{}", render(&result, format, color)?);
    }
    Ok(())
}

/// One calculation per non-blank input line. Input errors (including bytes
/// that are not UTF-8) are reported and the next line is processed; I/O
/// errors abort.
fn calc_lines<R: BufRead>(
    mut reader: R,
    clock: &dyn Clock,
    policy: &BreakPolicy,
    format: ExportFormat,
    color: bool,
) -> AppResult<()> {
    let mut first = true;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // Invalid bytes become U+FFFD and surface as an invalid time token.
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        if !first {
            println!();
        }
        first = false;

        match Core::calculate_with(&line, clock, policy) {
            Ok(result) => print!("{}", render(&result, format, color)?),
            Err(e) if e.is_input_error() => error(e),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
