use crate::infra::{parse_timestamp, prediction_service};
use chrono::{DateTime, Utc};
use clap::Args;
use liftoff::config::AppConfig;
use liftoff::error::AppError;
use liftoff::predictions::{ActivePredictions, ScoringZone};
use std::fmt::{self, Write};

#[derive(Args, Debug, Default)]
pub(crate) struct PredictionReportArgs {
    /// Evaluate as of this RFC 3339 instant (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Emit the same JSON payload the HTTP endpoint serves
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_prediction_report(args: PredictionReportArgs) -> Result<(), AppError> {
    let PredictionReportArgs { now, json } = args;

    let config = AppConfig::load()?;
    let service = prediction_service(config.scoring, now);
    let predictions = service.active_predictions()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&predictions)?);
    } else {
        let report = render_prediction_report(&predictions, config.scoring.zone)
            .map_err(std::io::Error::other)?;
        print!("{report}");
    }

    Ok(())
}

fn render_prediction_report(
    predictions: &ActivePredictions,
    zone: ScoringZone,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let local = |instant: DateTime<Utc>| zone.format(instant, "%b %-d, %Y %-I:%M %p");

    writeln!(out, "Launch predictions")?;
    writeln!(out, "Last updated: {}", local(predictions.last_updated))?;

    if predictions.road_closures.is_empty() {
        writeln!(out, "\nActive road closures: none")?;
        return Ok(out);
    }

    for closure in &predictions.road_closures {
        writeln!(
            out,
            "\n{} ({}, {}) [{}]",
            closure.location.name,
            closure.location.region,
            closure.location.country,
            closure.status.label()
        )?;
        writeln!(
            out,
            "Window: {} -> {}",
            local(closure.start_date),
            local(closure.end_date)
        )?;
        writeln!(out, "Source: {}", closure.source)?;

        let Some(prediction) = &closure.prediction else {
            writeln!(out, "Prediction: pending")?;
            continue;
        };

        writeln!(
            out,
            "Prediction: {}% {} ({} confidence)",
            prediction.confidence,
            prediction.predicted_event,
            prediction.tier().label()
        )?;
        if let Some(vehicle) = &prediction.predicted_vehicle {
            writeln!(out, "Vehicle: {} {}", vehicle.name, vehicle.variant)?;
        }
        for reason in &prediction.reasoning {
            writeln!(out, "- {reason}")?;
        }
        writeln!(out, "Algorithm: v{}", prediction.algorithm_version)?;
    }

    Ok(out)
}
