use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::model::Measurement;

/// Upper bound accepted for the attribute histogram bin count.
pub const MAX_PLOTLY_BINS: u32 = 500;
/// Range of the body-mass histogram slider.
pub const SEABORN_BIN_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// Startup settings. Every field is optional in the JSON file.
///
/// ```json
/// { "dataset_path": "penguins.parquet", "selected_species": ["Adelie"] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// File to load instead of the embedded dataset.
    pub dataset_path: Option<PathBuf>,
    pub selected_attribute: Measurement,
    pub plotly_bin_count: u32,
    pub seaborn_bin_count: u32,
    pub selected_species: Vec<String>,
    pub repo_url: String,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            selected_attribute: Measurement::BillLength,
            plotly_bin_count: 30,
            seaborn_bin_count: 25,
            selected_species: vec!["Gentoo".to_string()],
            repo_url: "https://github.com/matthewellishanson/cintel-02-data".to_string(),
            window_size: [1400.0, 900.0],
        }
    }
}

impl DashboardConfig {
    /// Environment variable naming the JSON config file.
    pub const ENV_VAR: &'static str = "PENGUIN_DASH_CONFIG";

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text).context("parsing config JSON")?;
        Ok(config.sanitized())
    }

    /// Load from [`Self::ENV_VAR`] if set, defaults otherwise.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn sanitized(mut self) -> Self {
        self.plotly_bin_count = self.plotly_bin_count.clamp(1, MAX_PLOTLY_BINS);
        self.seaborn_bin_count = self
            .seaborn_bin_count
            .clamp(*SEABORN_BIN_RANGE.start(), *SEABORN_BIN_RANGE.end());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.json");
        std::fs::write(
            &path,
            r#"{ "selected_attribute": "body_mass_g", "selected_species": ["Adelie", "Chinstrap"] }"#,
        )
        .unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.selected_attribute, Measurement::BodyMass);
        assert_eq!(config.selected_species, ["Adelie", "Chinstrap"]);
        assert_eq!(config.plotly_bin_count, 30);
        assert_eq!(config.dataset_path, None);
    }

    #[test]
    fn bin_counts_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.json");
        std::fs::write(&path, r#"{ "plotly_bin_count": 0, "seaborn_bin_count": 80 }"#).unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.plotly_bin_count, 1);
        assert_eq!(config.seaborn_bin_count, 50);
    }

    #[test]
    fn unknown_attribute_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dash.json");
        std::fs::write(&path, r#"{ "selected_attribute": "species" }"#).unwrap();
        assert!(DashboardConfig::load(&path).is_err());
    }
}
