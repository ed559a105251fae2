use clap::{Parser, Subcommand};

/// CLI entry point for conndial
#[derive(Parser, Debug)]
#[command(
    name = "conndial",
    version,
    about = "Multi-dialect database connection string and SQL dialect toolkit"
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Environment (loads config/{env}.toml)
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the database configuration and show resolved pool settings
    Check,

    /// Build and print the driver connection string (contains credentials)
    ConnString,

    /// Show syntax facts for a dialect
    Dialect {
        /// Dialect name (sqlite, mysql, postgres, sqlserver, azuresqldb)
        name: String,
    },

    /// Guess the dialect of a raw connection string
    Detect {
        /// Connection string or URL to classify
        connection_string: String,
    },

    /// Generate a starter configuration file
    InitConfig {
        /// Where to write the file
        #[arg(long, default_value = "conndial.toml")]
        path: String,
    },
}
