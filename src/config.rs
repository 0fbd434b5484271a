use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::metric::MetricKind;
use crate::space::Standard;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "DELTAE_CONFIG";

/// Config file used when `DELTAE_CONFIG` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "deltae.yaml";

/// Application configuration loaded from deltae.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Metric used when the command line does not name one
    pub metric: MetricKind,

    /// Video standard for YUV/YCbCr
    pub standard: Standard,

    /// Normalized distance above which a pixel counts as different
    pub threshold: f32,

    /// Compare image buffers on the rayon thread pool
    pub parallel: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            metric: MetricKind::Ciede2000,
            standard: Standard::Bt709,
            threshold: 0.02, // ΔE 2 under the CIE metrics
            parallel: true,
        }
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

impl AppConfig {
    /// Parse a YAML document. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config.validated())
    }

    /// Load from `DELTAE_CONFIG`, or `deltae.yaml` in the working directory.
    pub fn load() -> (Self, ConfigSource) {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from_path(Path::new(&path)),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    tracing::debug!("No config file, using defaults");
                    (Self::default(), ConfigSource::Defaults)
                }
            }
        }
    }

    /// Load configuration from a YAML file, falling back to defaults
    pub fn load_from_path(path: &Path) -> (Self, ConfigSource) {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        metric = %config.metric,
                        threshold = config.threshold,
                        "Loaded configuration"
                    );
                    (config, ConfigSource::File(path.to_path_buf()))
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    (Self::default(), ConfigSource::Defaults)
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                (Self::default(), ConfigSource::Defaults)
            }
        }
    }

    fn validated(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.threshold) {
            let fallback = Self::default().threshold;
            tracing::warn!(
                threshold = self.threshold,
                fallback,
                "Threshold outside 0..=1, using default"
            );
            self.threshold = fallback;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
metric: cmc21
standard: bt2020
threshold: 0.05
parallel: false
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.metric, MetricKind::Cmc21);
        assert_eq!(config.standard, Standard::Bt2020);
        assert_eq!(config.threshold, 0.05);
        assert!(!config.parallel);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_yaml("metric: din99\n").unwrap();
        assert_eq!(config.metric, MetricKind::Din99);
        assert_eq!(config.standard, Standard::Bt709);
        assert_eq!(config.threshold, 0.02);
        assert!(config.parallel);
    }

    #[test]
    fn test_out_of_range_threshold_replaced() {
        let config = AppConfig::from_yaml("threshold: 3.5\n").unwrap();
        assert_eq!(config.threshold, AppConfig::default().threshold);
    }

    #[test]
    fn test_unknown_metric_rejected() {
        assert!(AppConfig::from_yaml("metric: cie2077\n").is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(AppConfig::from_yaml("treshold: 0.1\n").is_err());
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Defaults.to_string(), "built-in defaults");
        assert_eq!(
            ConfigSource::File(PathBuf::from("deltae.yaml")).to_string(),
            "deltae.yaml"
        );
    }
}
