use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timetowin
#[derive(Parser)]
#[command(
    name = "timetowin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute net working time from clock-in/clock-out times, deducting morning and lunch breaks",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate working time from pairs of in/out times
    Calc {
        /// Times as HH:MM or "now", in/out alternating (read from stdin when omitted)
        times: Vec<String>,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "HH:MM", help = "Time used for \"now\" entries")]
        now: Option<String>,

        #[arg(long = "no-color", help = "Disable coloured text output")]
        no_color: bool,
    },

    /// Write the calculation to a file
    Export {
        /// Times as HH:MM or "now", in/out alternating
        #[arg(required = true)]
        times: Vec<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "HH:MM", help = "Time used for \"now\" entries")]
        now: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Manage the configuration file (view, edit or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },
}
