//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the level given on the command line
//! applies to the workspace crates only.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(level: &str) -> String {
    format!("reserva={level},reserva_client={level},shared={level}")
}

/// Initialize the logger
pub fn init_logger(level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = default_filter("debug");
        assert_eq!(filter, "reserva=debug,reserva_client=debug,shared=debug");
        assert!(EnvFilter::try_new(filter).is_ok());
    }
}
