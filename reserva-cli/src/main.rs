//! Reserva command-line tool
//!
//! Validates booking times locally and drives the reservation API.

mod cli;
mod config;
mod logger;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use reserva_client::{ClientError, HttpClient, Reservation, refresh_search, submit};
use shared::form::{
    FormAction, ReservationForm, SEARCH_PLACEHOLDER, SearchAction, SearchState, TextField,
};
use shared::routes::{Resolved, Route};
use shared::util::{self, format_time};

use cli::{Cli, Command, ReservationArgs};
use config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_logger(&cli.log_level, cli.json_logs);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(&cli)?;
    tracing::debug!(
        timezone = %config.policy.timezone(),
        api = %config.client.base_url,
        "Configuration loaded"
    );

    match cli.command {
        Command::Validate { date, time, clock } => {
            let now = config.now(&clock)?;
            let result = config.validator().validate(&date, &time, now);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(if result.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Slots { date, clock } => {
            let now = config.now(&clock)?;
            let validator = config.validator();
            let date = util::parse_date(&date)?;
            if let Err(e) = validator.check_date(date, now.date()) {
                println!("{}", e.user_message());
                return Ok(ExitCode::FAILURE);
            }
            let open: Vec<String> = validator
                .policy()
                .slots()
                .filter(|slot| validator.check_time(*slot, Some(date), now).is_ok())
                .map(format_time)
                .collect();
            if open.is_empty() {
                println!("No slots left on {}", date);
            } else {
                println!("{}", open.join("\n"));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Search { mobile_number } => {
            let api = connect(&config)?;
            let state =
                SearchState::default().reduce(SearchAction::QueryChanged(mobile_number));
            if state.is_empty_search() {
                println!("{}", SEARCH_PLACEHOLDER);
                return Ok(ExitCode::SUCCESS);
            }
            let state = refresh_search(&api, state).await;
            if let Some(error) = state.error() {
                println!("{}", error);
                return Ok(ExitCode::FAILURE);
            }
            if state.is_no_results() {
                println!("No reservations found");
            } else {
                for reservation in state.results() {
                    println!("{}", summary(reservation));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Create(details) => {
            save(&config, ReservationForm::new(), details).await
        }
        Command::Edit {
            reservation_id,
            details,
        } => save(&config, ReservationForm::editing(reservation_id), details).await,
        Command::Route { location } => {
            match Route::resolve(&location) {
                Resolved::View(route) => println!("{:?} ({})", route, route),
                Resolved::Redirect(route) => println!("redirect -> {}", route),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One search result per line
fn summary(reservation: &Reservation) -> String {
    format!(
        "#{} {} ({}) {} {} party of {}",
        reservation.reservation_id,
        reservation.full_name(),
        reservation.mobile_number,
        reservation.reservation_date,
        format_time(reservation.reservation_time),
        reservation.people,
    )
}

fn connect(config: &Config) -> anyhow::Result<HttpClient> {
    config
        .client
        .build_http_client()
        .context("Failed to build HTTP client")
}

/// Fill the form the way a user would, field by field, then submit it
async fn save(
    config: &Config,
    form: ReservationForm,
    details: ReservationArgs,
) -> anyhow::Result<ExitCode> {
    let validator = config.validator();
    let now = config.now(&details.clock)?;
    let text = |field, value: String| FormAction::FieldChanged { field, value };

    let form = [
        text(TextField::FirstName, details.first_name),
        text(TextField::LastName, details.last_name),
        text(TextField::MobileNumber, details.mobile_number),
        text(TextField::People, details.people),
        FormAction::DateChanged(details.date),
        FormAction::TimeChanged(details.time),
    ]
    .into_iter()
    .fold(form, |form, action| form.reduce(action, &validator, now));

    let api = connect(config)?;
    match submit(&api, &form).await {
        Ok((reservation, route)) => {
            tracing::info!(
                reservation_id = reservation.reservation_id,
                next = %route,
                "Reservation saved"
            );
            println!("{}", serde_json::to_string_pretty(&reservation)?);
            println!("next: {}", route);
            Ok(ExitCode::SUCCESS)
        }
        Err(ClientError::Rejected(e)) => {
            println!("{}", e.message);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
