//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `railway_core` linkage by running the reference boarding flow.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Set `RAILWAY_LOG_DIR` (absolute path) to also write core log events.

use railway_core::{CoreConfig, RailwayService, ServiceError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("railway_cli config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.init_logging() {
        eprintln!("railway_cli logging error: {err}");
        return ExitCode::FAILURE;
    }

    println!("railway_core version={}", railway_core::core_version());
    match run_reference_trip() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!(
                "event=cli_run module=cli status=error error_code={}",
                err.code()
            );
            eprintln!("railway_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_reference_trip() -> Result<(), ServiceError> {
    let mut service = RailwayService::new();
    let train_id = service.register_train("Sanandaj", 34_286.0)?;
    let trip_id = service.open_trip("Sanandaj", "Rasht", train_id)?;
    println!(
        "trip Sanandaj->Rasht remaining_capacity={}",
        service.remaining_capacity(trip_id)?
    );

    let ali = service.register_passenger("Ali Saeedi", 616.0)?;
    let abolfazl = service.register_passenger("Abolfazl Zandi", 349.0)?;
    for passenger_id in [ali, abolfazl] {
        service.join_trip(passenger_id, trip_id)?;
        println!(
            "joined passenger={} remaining_capacity={}",
            service.passenger(passenger_id)?,
            service.remaining_capacity(trip_id)?
        );
    }

    service.leave_trip(abolfazl)?;
    println!(
        "left passenger={} remaining_capacity={}",
        service.passenger(abolfazl)?,
        service.remaining_capacity(trip_id)?
    );

    let completion = service.complete_trip(trip_id)?;
    println!(
        "completed trip detached={} train_station={}",
        completion.detached_passengers.len(),
        service.train(train_id)?.last_station()
    );
    Ok(())
}
