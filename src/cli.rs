/// CLI argument parsing and command definitions

use clap::{Parser, Subcommand};

// Build timestamp injected at compile time
pub const VERSION_WITH_BUILD: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built: ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(name = "cloudmon")]
#[command(author, version = VERSION_WITH_BUILD, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show an overview summary
    Status,

    /// List resource utilization
    Resources {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the cost breakdown by service
    Costs {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List cost optimization recommendations
    Optimization {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List active alerts
    Alerts {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the full monitoring report
    Report {
        /// Emit JSON instead of text sections
        #[arg(long)]
        json: bool,
    },
}
