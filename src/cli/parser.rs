use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timepunch
/// CLI client to clock in/out against a remote timesheet server
#[derive(Parser)]
#[command(
    name = "timepunch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in and out, track breaks and watch your working day from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the timesheet server base URL
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Run in test mode (reduced chatter, no editor spawning)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and a default config file
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Report configuration keys missing from the file")]
        check: bool,

        #[arg(
            long = "migrate",
            help = "Insert missing configuration keys with their defaults"
        )]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the current attendance session
    Status {
        #[arg(long = "user", help = "Show another user's status (managers only)")]
        user: Option<String>,

        #[arg(
            long = "watch",
            help = "Keep polling the server and re-render on every refresh"
        )]
        watch: bool,

        #[arg(
            long = "interval",
            help = "Polling interval in seconds (defaults to poll_interval_secs)"
        )]
        interval: Option<u64>,

        #[arg(long = "json", help = "Print the status as JSON instead of a table")]
        json: bool,
    },

    /// Clock in and start the working day
    In,

    /// Clock out and close the working day
    Out,

    /// Start a break
    Break,

    /// End the current break and get back to work
    Resume,

    /// Export today's session summary to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
