use std::{io, path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{HttpPredictionTransport, ModalFlag, RequestLifecycleController, SubmitOutcome};
use shared::domain::ParameterField;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod terminal;

use config::load_settings;

/// Ask the prediction service whether a device should charge now.
#[derive(Parser, Debug)]
#[command(name = "energy-optimizer")]
struct Args {
    /// Config file (defaults to ./optimizer.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Prediction endpoint URL, overriding config and environment.
    #[arg(long)]
    endpoint: Option<String>,
    /// Battery capacity in Wh.
    #[arg(long, requires_all = ["hourly_consumption", "current_charge"])]
    battery_capacity: Option<String>,
    /// Hourly consumption in W.
    #[arg(long, requires_all = ["battery_capacity", "current_charge"])]
    hourly_consumption: Option<String>,
    /// Current charge in percent.
    #[arg(long, requires_all = ["battery_capacity", "hourly_consumption"])]
    current_charge: Option<String>,
}

impl Args {
    /// All three parameter flags together switch to a single
    /// non-interactive submission.
    fn one_shot_values(&self) -> Option<[(ParameterField, &str); 3]> {
        match (
            self.battery_capacity.as_deref(),
            self.hourly_consumption.as_deref(),
            self.current_charge.as_deref(),
        ) {
            (Some(capacity), Some(consumption), Some(charge)) => Some([
                (ParameterField::BatteryCapacity, capacity),
                (ParameterField::HourlyConsumption, consumption),
                (ParameterField::CurrentCharge, charge),
            ]),
            _ => None,
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run_once(
    controller: &mut RequestLifecycleController,
    values: [(ParameterField, &str); 3],
) -> Result<ExitCode> {
    if let Err(field) = terminal::apply_values(controller, &values) {
        let flag = field.wire_name().replace('_', "-");
        let value = values[field.index()].1;
        eprintln!("--{flag}: '{value}' is not a number");
        return Ok(ExitCode::from(2));
    }

    let mut stdout = io::stdout().lock();
    match terminal::submit_and_render(controller, &mut stdout).await? {
        SubmitOutcome::Predicted(_) => {
            terminal::render(&controller.view(), &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Invalid(err) => {
            eprintln!("{err}");
            Ok(ExitCode::from(2))
        }
        SubmitOutcome::Failed => Ok(ExitCode::FAILURE),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint = endpoint.clone();
    }
    init_tracing(&settings.log_filter);

    let transport =
        HttpPredictionTransport::with_timeout(&settings.endpoint, settings.request_timeout())
            .context("failed to set up prediction client")?;
    info!(endpoint = %transport.endpoint(), "energy optimizer ready");

    let host = Arc::new(ModalFlag::default());
    let mut controller = RequestLifecycleController::new(Arc::new(transport), host);

    if let Some(values) = args.one_shot_values() {
        return run_once(&mut controller, values).await;
    }

    terminal::run_interactive(&mut controller, io::stdin().lock(), io::stdout().lock()).await?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_needs_all_three_parameters() {
        let args = Args::try_parse_from([
            "energy-optimizer",
            "--battery-capacity",
            "310",
            "--hourly-consumption",
            "2.5",
            "--current-charge",
            "14",
        ])
        .expect("all three flags");
        assert_eq!(
            args.one_shot_values(),
            Some([
                (ParameterField::BatteryCapacity, "310"),
                (ParameterField::HourlyConsumption, "2.5"),
                (ParameterField::CurrentCharge, "14"),
            ])
        );

        let args = Args::try_parse_from(["energy-optimizer"]).expect("no flags");
        assert_eq!(args.one_shot_values(), None);
    }

    #[test]
    fn partial_parameter_flags_are_rejected() {
        for partial in [
            vec!["energy-optimizer", "--battery-capacity", "310"],
            vec![
                "energy-optimizer",
                "--hourly-consumption",
                "2.5",
                "--current-charge",
                "14",
            ],
        ] {
            assert!(Args::try_parse_from(partial).is_err());
        }
    }
}
