use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// accelkit -- inspect and edit keyboard accelerator maps.
#[derive(Parser, Debug)]
#[command(name = "accelkit", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Accelerator map file override.
    #[arg(long, global = true)]
    pub map: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List accelerator paths and their bindings.
    List {
        /// Include filtered paths.
        #[arg(long)]
        all: bool,

        /// Print entries as JSON.
        #[arg(long)]
        json: bool,

        /// Only paths in this category, e.g. `App` for `<App>/File/Quit`.
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the accelerator bound to a path.
    Lookup { path: String },

    /// Bind a path to an accelerator such as `<Primary>q`.
    Set {
        path: String,
        accel: String,

        /// Write the map file even when autosave is off.
        #[arg(long)]
        save: bool,
    },

    /// Hide a path from `list` and remember it in the config.
    Filter { path: String },

    /// Print the machine-readable name of a key and modifiers.
    Name {
        key: String,
        modifiers: Vec<String>,
    },

    /// Print the human-readable label of a key and modifiers.
    Label {
        key: String,
        modifiers: Vec<String>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
