//! Runtime configuration
//!
//! Environment first (`RESERVA_*`, optionally from a `.env` file), then
//! command-line flags on top.

use anyhow::Context;
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use reserva_client::ClientConfig;
use shared::{BookingPolicy, ReservationTimeValidator};

use crate::cli::{Cli, Clock};

#[derive(Debug, Clone)]
pub struct Config {
    pub policy: BookingPolicy,
    pub client: ClientConfig,
}

impl Config {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut policy = BookingPolicy::from_env().context("Failed to load booking policy")?;
        if let Some(tz) = &cli.timezone {
            let tz: Tz = tz
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid timezone '{}': {}", tz, e))?;
            policy = policy.with_timezone(tz);
        }

        let mut client = ClientConfig::from_env();
        if let Some(url) = cli.api_url.as_deref()
            && !url.trim().is_empty()
        {
            client.base_url = url.trim_end_matches('/').to_string();
        }

        Ok(Self { policy, client })
    }

    pub fn validator(&self) -> ReservationTimeValidator {
        ReservationTimeValidator::new(self.policy.clone())
    }

    /// Current business time, or the `--now` override
    pub fn now(&self, clock: &Clock) -> anyhow::Result<NaiveDateTime> {
        match clock.now.as_deref() {
            Some(raw) => parse_now(raw),
            None => Ok(self.policy.now()),
        }
    }
}

fn parse_now(raw: &str) -> anyhow::Result<NaiveDateTime> {
    let raw = raw.trim();
    ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .with_context(|| format!("Invalid --now '{}', expected YYYY-MM-DD HH:MM", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_now_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(parse_now("2024-06-10 14:05").unwrap(), expected);
        assert_eq!(parse_now("2024-06-10T14:05:00").unwrap(), expected);
        assert!(parse_now("yesterday").is_err());
    }

    #[test]
    fn test_clock_override() {
        let config = Config {
            policy: BookingPolicy::default(),
            client: ClientConfig::default(),
        };
        let clock = Clock {
            now: Some("2024-06-10 14:05".into()),
        };
        assert_eq!(config.now(&clock).unwrap().to_string(), "2024-06-10 14:05:00");
    }
}
