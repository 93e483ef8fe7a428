//! Command-line arguments

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "reserva", version, about = "Restaurant reservation booking tool")]
pub struct Cli {
    /// Reservation API base URL
    #[arg(long, global = true, env = "RESERVA_API_URL")]
    pub api_url: Option<String>,

    /// Business timezone (IANA name, e.g. Europe/Madrid)
    #[arg(long, global = true, env = "RESERVA_TIMEZONE")]
    pub timezone: Option<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a date and time against the booking rules
    Validate {
        /// Date (YYYY-MM-DD or MM/DD/YYYY)
        date: String,
        /// Time (HH:MM)
        time: String,
        #[command(flatten)]
        clock: Clock,
    },
    /// List the slots still bookable on a date
    Slots {
        /// Date (YYYY-MM-DD or MM/DD/YYYY)
        date: String,
        #[command(flatten)]
        clock: Clock,
    },
    /// Find reservations by mobile number
    Search {
        /// Full or partial mobile number
        mobile_number: String,
    },
    /// Create a reservation
    Create(ReservationArgs),
    /// Replace the details of an existing reservation
    Edit {
        reservation_id: i64,
        #[command(flatten)]
        details: ReservationArgs,
    },
    /// Show which view a location resolves to
    Route {
        /// Location, e.g. /dashboard?date=2024-06-10
        location: String,
    },
}

#[derive(Debug, Args)]
pub struct Clock {
    /// Pretend the current business time is this ("YYYY-MM-DD HH:MM")
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReservationArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub mobile_number: String,
    /// Party size
    #[arg(long)]
    pub people: String,
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub time: String,
    #[command(flatten)]
    pub clock: Clock,
}
