use crate::cli::commands::{clock_for, tokens_from_args};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        times,
        format,
        file,
        now,
        force,
    } = cmd
    {
        let clock = clock_for(now)?;
        let result =
            Core::calculate_tokens(tokens_from_args(times), clock.as_ref(), &cfg.policy())?;
        ExportLogic::export(&result, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
