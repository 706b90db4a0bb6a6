//! Focused unit tests covering plan CLI configuration validation.

use super::helpers::{workspace, write_utf8};
use super::*;
use crate::plan::{LookupArg, OutputFormat, PlanArgs, PlanConfig, config_from_layers_for_test};
use camino::Utf8PathBuf;
use ecoroute_core::{LookupPolicy, RouteError};
use log::LevelFilter;
use rstest::rstest;

fn args_with_request() -> PlanArgs {
    PlanArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        ..PlanArgs::default()
    }
}

#[rstest]
fn converting_plan_without_request_errors() {
    let err = PlanConfig::try_from(PlanArgs::default()).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(env, ENV_PLAN_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn plan_config_applies_defaults() {
    let config = PlanConfig::try_from(args_with_request()).expect("defaults should resolve");
    assert_eq!(config.request_path, Utf8PathBuf::from("request.json"));
    assert!((config.planning.average_speed_kmh - 40.0).abs() < f64::EPSILON);
    assert_eq!(config.planning.lookup, LookupPolicy::Lenient);
    assert_eq!(config.planning.max_points, 500);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, LevelFilter::Warn);
}

#[rstest]
fn plan_config_honours_explicit_options() {
    let args = PlanArgs {
        average_speed_kmh: Some(25.0),
        lookup: Some(LookupArg::Strict),
        max_points: Some(12),
        format: Some(OutputFormat::Text),
        log_level: Some("debug".to_owned()),
        ..args_with_request()
    };
    let config = PlanConfig::try_from(args).expect("explicit options should resolve");
    assert!((config.planning.average_speed_kmh - 25.0).abs() < f64::EPSILON);
    assert_eq!(config.planning.lookup, LookupPolicy::Strict);
    assert_eq!(config.planning.max_points, 12);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.log_level, LevelFilter::Debug);
}

#[rstest]
#[case(0.0)]
#[case(-12.5)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn plan_config_rejects_unusable_speeds(#[case] speed: f64) {
    let args = PlanArgs {
        average_speed_kmh: Some(speed),
        ..args_with_request()
    };
    let err = PlanConfig::try_from(args).expect_err("speed should be rejected");
    match err {
        CliError::InvalidOption { field, source } => {
            assert_eq!(field, ARG_AVERAGE_SPEED);
            assert!(matches!(source, RouteError::InvalidAverageSpeed { .. }));
        }
        other => panic!("expected InvalidOption, found {other:?}"),
    }
}

#[rstest]
fn plan_config_rejects_unknown_log_levels() {
    let args = PlanArgs {
        log_level: Some("chatty".to_owned()),
        ..args_with_request()
    };
    let err = PlanConfig::try_from(args).expect_err("log level should be rejected");
    match err {
        CliError::InvalidLogLevel { value } => assert_eq!(value, "chatty"),
        other => panic!("expected InvalidLogLevel, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_files() {
    let (_tmp, root) = workspace();
    let missing = root.join("missing.json");
    let config = super::helpers::config_for(missing.clone(), OutputFormat::Json);
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(path, missing);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let (_tmp, root) = workspace();
    let config = super::helpers::config_for(root.clone(), OutputFormat::Json);
    let err = config
        .validate_sources()
        .expect_err("expected directory rejection");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(path, root);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_accepts_regular_files() {
    let (_tmp, root) = workspace();
    let request = root.join("request.json");
    write_utf8(&request, b"{}\n");
    let config = super::helpers::config_for(request, OutputFormat::Json);
    config
        .validate_sources()
        .expect("regular file should validate");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let (_tmp, root) = workspace();
    let env_request = root.join("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "request_path": root.join("from-file.json").as_str(),
            "average_speed_kmh": 30.0,
            "lookup": "strict",
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "average_speed_kmh": 35.0,
    }));
    composer.push_cli(json!({
        "average_speed_kmh": 50.0,
        "format": "text",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert!((config.planning.average_speed_kmh - 50.0).abs() < f64::EPSILON);
    assert_eq!(config.planning.lookup, LookupPolicy::Strict);
    assert_eq!(config.format, OutputFormat::Text);
}
