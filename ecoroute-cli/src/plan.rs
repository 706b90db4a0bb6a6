//! Plan command implementation for the EcoRoute CLI.

use std::collections::HashMap;
use std::io::{self, BufReader, Write};
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ecoroute_core::{
    DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_MAX_POINTS, LookupPolicy, PlanRequest, PlanningConfig,
    RoutePlan, TourSolver, plan,
};
use ecoroute_solver_greedy::NearestNeighbourSolver;
use log::LevelFilter;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_AVERAGE_SPEED, ARG_FORMAT, ARG_LOG_LEVEL, ARG_LOOKUP, ARG_MAX_POINTS, ARG_PLAN_REQUEST,
    CliError, ENV_PLAN_REQUEST, logging,
};

/// Output rendering for a route plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON `RoutePlan`.
    #[default]
    Json,
    /// Stop list, leg narratives and totals for people.
    Text,
}

/// Handling of tour ids missing from the point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LookupArg {
    /// Skip hops through unknown ids.
    Lenient,
    /// Fail on the first unknown id.
    Strict,
}

impl From<LookupArg> for LookupPolicy {
    fn from(arg: LookupArg) -> Self {
        match arg {
            LookupArg::Lenient => Self::Lenient,
            LookupArg::Strict => Self::Strict,
        }
    }
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the bins of a JSON plan request into a collection \
                 tour using the greedy nearest-neighbour heuristic, then \
                 derive per-leg distance, travel time and directions. A \
                 request with a depot yields a round trip; without one the \
                 tour is an open path starting at the first bin.",
    about = "Plan a collection round"
)]
#[ortho_config(prefix = "ECOROUTE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Average travel speed used for time estimates (default 40).
    #[arg(long = ARG_AVERAGE_SPEED, value_name = "kmh")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
    /// Treat tour ids missing from the point set as errors or skip them.
    #[arg(long = ARG_LOOKUP, value_enum)]
    #[serde(default)]
    pub(crate) lookup: Option<LookupArg>,
    /// Largest accepted request, depot included (default 500).
    #[arg(long = ARG_MAX_POINTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_points: Option<usize>,
    /// Output rendering.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Log verbosity: off, error, warn, info, debug or trace (default warn).
    #[arg(long = ARG_LOG_LEVEL, value_name = "level")]
    #[serde(default)]
    pub(crate) log_level: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Speed, lookup policy and point ceiling.
    pub(crate) planning: PlanningConfig,
    /// Output rendering.
    pub(crate) format: OutputFormat,
    /// Logger filter.
    pub(crate) log_level: LevelFilter,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_PLAN_REQUEST,
                path: path.clone(),
            }),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_PLAN_REQUEST,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_PLAN_REQUEST,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;

        let planning = PlanningConfig {
            average_speed_kmh: args.average_speed_kmh.unwrap_or(DEFAULT_AVERAGE_SPEED_KMH),
            lookup: args.lookup.map(LookupPolicy::from).unwrap_or_default(),
            max_points: args.max_points.unwrap_or(DEFAULT_MAX_POINTS),
        };
        planning
            .validate()
            .map_err(|source| CliError::InvalidOption {
                field: ARG_AVERAGE_SPEED,
                source,
            })?;

        let log_level = match args.log_level {
            Some(value) => {
                LevelFilter::from_str(&value).map_err(|_| CliError::InvalidLogLevel { value })?
            }
            None => LevelFilter::Warn,
        };

        Ok(Self {
            request_path,
            planning,
            format: args.format.unwrap_or_default(),
            log_level,
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    logging::init(config.log_level)?;
    let mut stdout = io::stdout().lock();
    run_plan_with(&config, &NearestNeighbourSolver::new(), &mut stdout)
}

pub(super) fn run_plan_with(
    config: &PlanConfig,
    solver: &dyn TourSolver,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let request = load_plan_request(&config.request_path)?;
    let route = plan(solver, &request, &config.planning).map_err(|source| CliError::Plan {
        path: config.request_path.clone(),
        source,
    })?;
    log::info!(
        "planned {} stops over {} km",
        route.tour.len(),
        route.display_total_distance()
    );
    match config.format {
        OutputFormat::Json => write_json(writer, &route),
        OutputFormat::Text => {
            write_text(writer, &request, &route).map_err(CliError::WritePlanOutput)
        }
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json(writer: &mut dyn Write, route: &RoutePlan) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(route).map_err(CliError::SerialisePlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}

fn write_text(writer: &mut dyn Write, request: &PlanRequest, route: &RoutePlan) -> io::Result<()> {
    let mode = request.mode();
    let depot_id = mode.depot().map(|depot| depot.id);
    let labels: HashMap<u64, String> = mode
        .depot()
        .into_iter()
        .chain(&request.points)
        .map(|point| (point.id, point.display_label()))
        .collect();

    let stops: Vec<String> = route
        .tour
        .ids()
        .iter()
        .map(|id| {
            let label = labels.get(id).cloned().unwrap_or_else(|| format!("#{id}"));
            if Some(*id) == depot_id {
                format!("{label} (depot)")
            } else {
                label
            }
        })
        .collect();
    writeln!(writer, "Route: {}", stops.join(" -> "))?;

    for (number, leg) in route.legs.iter().enumerate() {
        let fill = match (leg.to.fill_level, leg.to.fill_status()) {
            (Some(level), Some(status)) => format!(" [fill {level}%, {status}]"),
            _ => String::new(),
        };
        writeln!(
            writer,
            "Leg {}: {} -> {} ({} km, {} min){fill}",
            number + 1,
            leg.from.display_label(),
            leg.to.display_label(),
            leg.display_distance(),
            leg.display_minutes()
        )?;
        writeln!(writer, "  {}", leg.display_coordinates())?;
        for step in &leg.directions {
            writeln!(writer, "  - {step}")?;
        }
    }

    writeln!(
        writer,
        "Total distance: {} km",
        route.display_total_distance()
    )?;
    writeln!(
        writer,
        "Estimated time: {} min ({})",
        route.display_total_minutes(),
        route.display_total_duration()
    )?;
    writeln!(
        writer,
        "Estimated fuel: {} L",
        route.display_fuel_estimate()
    )?;
    writeln!(
        writer,
        "Estimated CO2: {} kg",
        route.display_co2_estimate()
    )
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
