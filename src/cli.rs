//! CLI definitions for Watchpost.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use watchpost_protocols::{AlertKind, NotifyChannel};

/// Watchpost CLI.
#[derive(Parser)]
#[command(name = "watchpost")]
#[command(about = "Alert popups and multi-channel notifications for the Watchpost dashboard")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Broadcast a message to the selected channels
    Send {
        /// Message text
        #[arg(short, long)]
        message: String,

        /// Alert type (info, warning, error, success)
        #[arg(short = 't', long = "type", default_value = "info")]
        kind: AlertKind,

        /// Channel to send through; repeat for several (email, whatsapp, telegram, sms)
        #[arg(long = "channel", value_name = "CHANNEL")]
        channels: Vec<NotifyChannel>,
    },

    /// Broadcast a security incident to every enabled channel
    Incident {
        /// Detection type, e.g. "Fire Detected"
        #[arg(long)]
        kind: String,

        /// Camera that raised the incident
        #[arg(long)]
        camera: String,

        /// Severity label (critical, high, medium, low)
        #[arg(long, default_value = "high")]
        severity: String,

        /// Incident description
        #[arg(long)]
        description: String,

        /// Optional location
        #[arg(long)]
        location: Option<String>,
    },

    /// Send a test notification through every enabled channel
    TestChannels,

    /// Show channel configuration status
    Status {
        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show an alert popup on the console and run it until it is hidden
    Popup {
        /// Alert type (info, warning, error, success)
        #[arg(short = 't', long = "type", default_value = "info")]
        kind: String,

        /// Popup title
        #[arg(long)]
        title: String,

        /// Popup message
        #[arg(short, long, default_value = "")]
        message: String,

        /// Hold the pointer over the popup for this many ticks right after it appears
        #[arg(long, default_value_t = 0)]
        hover_ticks: u32,
    },

    /// Validate the configuration file
    CheckConfig,
}
