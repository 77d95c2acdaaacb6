use crate::core::models::bonds::BondGeometry;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReconstructionConfig {
    /// Bond lengths of the repeating backbone triplet.
    pub geometry: BondGeometry,
    /// Reject degenerate (0, 0) sine/cosine pairs before decoding.
    pub validate_encodings: bool,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            geometry: BondGeometry::default(),
            validate_encodings: true,
        }
    }
}

impl ReconstructionConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

#[derive(Default)]
pub struct ReconstructionConfigBuilder {
    geometry: Option<BondGeometry>,
    validate_encodings: Option<bool>,
}

impl ReconstructionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(mut self, geometry: BondGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn validate_encodings(mut self, validate: bool) -> Self {
        self.validate_encodings = Some(validate);
        self
    }

    pub fn build(self) -> ReconstructionConfig {
        let defaults = ReconstructionConfig::default();
        ReconstructionConfig {
            geometry: self.geometry.unwrap_or(defaults.geometry),
            validate_encodings: self
                .validate_encodings
                .unwrap_or(defaults.validate_encodings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_uses_standard_geometry_and_validation() {
        let config = ReconstructionConfig::default();
        assert_eq!(config.geometry, BondGeometry::default());
        assert!(config.validate_encodings);
    }

    #[test]
    fn builder_fills_unset_fields_with_defaults() {
        let config = ReconstructionConfigBuilder::new().build();
        assert_eq!(config, ReconstructionConfig::default());
    }

    #[test]
    fn builder_overrides_are_applied() {
        let geometry = BondGeometry {
            n_ca: 1.47,
            ca_c: 1.53,
            c_n: 1.33,
        };
        let config = ReconstructionConfigBuilder::new()
            .geometry(geometry)
            .validate_encodings(false)
            .build();

        assert_eq!(config.geometry, geometry);
        assert!(!config.validate_encodings);
    }

    #[test]
    fn loads_full_config_from_valid_file() {
        let content = r#"
validate_encodings = false

[geometry]
n_ca = 1.46
ca_c = 1.52
c_n = 1.33
"#;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();

        let config = ReconstructionConfig::load(file.path()).unwrap();

        assert!(!config.validate_encodings);
        assert_eq!(config.geometry.n_ca, 1.46);
        assert_eq!(config.geometry.ca_c, 1.52);
        assert_eq!(config.geometry.c_n, 1.33);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let content = r#"
[geometry]
n_ca = 1.5
"#;
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();

        let config = ReconstructionConfig::load(file.path()).unwrap();

        assert!(config.validate_encodings);
        assert_eq!(config.geometry.n_ca, 1.5);
        assert_eq!(config.geometry.ca_c, 1.525);
    }

    #[test]
    fn returns_io_error_for_nonexistent_file() {
        let result = ReconstructionConfig::load(Path::new("nonexistent_config.toml"));
        assert!(matches!(result, Err(ConfigLoadError::Io { .. })));
    }

    #[test]
    fn returns_toml_error_for_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "this is not valid toml").unwrap();

        let result = ReconstructionConfig::load(file.path());
        assert!(matches!(result, Err(ConfigLoadError::Toml { .. })));
    }
}
