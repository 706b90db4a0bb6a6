//! Helpers shared by the CLI unit tests.

use camino::{Utf8Path, Utf8PathBuf};
use ecoroute_core::{LookupPolicy, PlanningConfig};
use log::LevelFilter;
use tempfile::TempDir;

use crate::plan::{OutputFormat, PlanConfig};

/// Write `contents` to a UTF-8 path, panicking on IO failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test fixture");
}

/// Create a temporary workspace and return it with its UTF-8 root.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Resolved configuration pointing at `request_path` with default knobs.
pub(super) fn config_for(request_path: Utf8PathBuf, format: OutputFormat) -> PlanConfig {
    PlanConfig {
        request_path,
        planning: PlanningConfig::default(),
        format,
        log_level: LevelFilter::Warn,
    }
}

/// Strict variant of [`config_for`].
pub(super) fn strict_config_for(request_path: Utf8PathBuf) -> PlanConfig {
    let mut config = config_for(request_path, OutputFormat::Json);
    config.planning.lookup = LookupPolicy::Strict;
    config
}

/// Plan request JSON for the Tambaram depot and two Chennai bins.
pub(super) const CHENNAI_REQUEST: &str = r#"{
    "depot": { "id": 0, "lat": 12.9249, "lng": 80.1000, "label": "Tambaram" },
    "points": [
        { "id": 1, "lat": 13.035, "lng": 80.2672, "label": "Mylapore" },
        { "id": 2, "lat": 12.9697, "lng": 80.1789, "label": "Velachery" }
    ]
}"#;
