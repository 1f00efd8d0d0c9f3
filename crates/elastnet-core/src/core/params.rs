use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Parameters for the Essential-Dynamics ENM variant.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EdenmParams {
    /// Global scale applied to every spring constant during evaluation.
    pub k_scale: f64,
}

impl Default for EdenmParams {
    fn default() -> Self {
        Self { k_scale: 0.4 }
    }
}

/// Parameters for the Anisotropic Network Model variant.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AnmParams {
    /// Interaction radius in Å; pairs at or beyond it carry no spring.
    pub cutoff: f64,
    /// Uniform spring constant for every pair inside the cutoff.
    pub gamma: f64,
}

impl Default for AnmParams {
    fn default() -> Self {
        Self {
            cutoff: 15.0,
            gamma: 1.0,
        }
    }
}

/// Parameter set for both model variants, loadable from a TOML file with
/// `[edenm]` and `[anm]` sections. Omitted sections and fields fall back to
/// the published defaults.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct NetworkParams {
    pub edenm: EdenmParams,
    pub anm: AnmParams,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
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

impl NetworkParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_published_model() {
        let params = NetworkParams::default();
        assert_eq!(params.edenm.k_scale, 0.4);
        assert_eq!(params.anm.cutoff, 15.0);
        assert_eq!(params.anm.gamma, 1.0);
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("params.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            "[edenm]\nk_scale = 0.8\n\n[anm]\ncutoff = 12.0\ngamma = 2.5\n"
        )
        .unwrap();

        let params = NetworkParams::load(&file_path).unwrap();
        assert_eq!(params.edenm.k_scale, 0.8);
        assert_eq!(params.anm.cutoff, 12.0);
        assert_eq!(params.anm.gamma, 2.5);
    }

    #[test]
    fn load_falls_back_to_defaults_for_omitted_sections() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("params.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "[anm]\ncutoff = 10.0\n").unwrap();

        let params = NetworkParams::load(&file_path).unwrap();
        assert_eq!(params.edenm, EdenmParams::default());
        assert_eq!(params.anm.cutoff, 10.0);
        assert_eq!(params.anm.gamma, 1.0);
    }

    #[test]
    fn load_returns_io_error_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = NetworkParams::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ParamLoadError::Io { .. })));
    }

    #[test]
    fn load_returns_toml_error_for_malformed_content() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("params.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "[edenm]\nk_scale = \"not a number\"\n").unwrap();

        let result = NetworkParams::load(&file_path);
        assert!(matches!(result, Err(ParamLoadError::Toml { .. })));
    }
}
