//! Chain files
//!
//! A chain file is JSON describing the SoX binary, global options and the
//! effect chain:
//!
//! ```json
//! {
//!   "program": "/usr/bin/sox",
//!   "global_options": ["--no-show-progress"],
//!   "effects": [
//!     {"effect": "vol", "gain": 2.5, "type": "dB"},
//!     {"effect": "contrast"}
//!   ]
//! }
//! ```

use crate::command::SoxCommand;
use crate::effects::EffectChain;
use crate::error::{Result, SoxError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Deserialized chain file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// SoX binary; `sox` on `PATH` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_options: Vec<String>,
    #[serde(default)]
    pub effects: EffectChain,
}

impl ChainConfig {
    /// Parse a chain file from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SoxError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Load a chain file from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SoxError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| SoxError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json_str(&content)
    }

    /// Write the chain file as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| SoxError::FileWriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    /// Build a command for the given files using this chain
    pub fn command(&self, inputs: &[PathBuf], output: Option<&Path>) -> SoxCommand {
        let mut command = match output {
            Some(path) => SoxCommand::new(path),
            None => SoxCommand::null_output(),
        };
        if let Some(program) = &self.program {
            command = command.program(program);
        }
        for option in &self.global_options {
            command = command.global_option(option.as_str());
        }
        for input in inputs {
            command = command.input(input);
        }
        command.effects(self.effects.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{Contrast, GainType, Volume};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "program": "/opt/sox/bin/sox",
        "effects": [
            {"effect": "vol", "gain": 2.5, "type": "dB"},
            {"effect": "contrast"}
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let config = ChainConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(config.program, Some(PathBuf::from("/opt/sox/bin/sox")));
        assert_eq!(
            config.effects,
            EffectChain::new()
                .with(Volume::new(2.5).with_type(GainType::Db))
                .with(Contrast::default())
        );
    }

    #[test]
    fn test_unknown_field_is_invalid_config() {
        let err = ChainConfig::from_json_str(r#"{"effect": []}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chain.json");
        let config = ChainConfig::from_json_str(SAMPLE).unwrap();

        config.save(&path).unwrap();
        let loaded = ChainConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = ChainConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_command_uses_program_and_options() {
        let config = ChainConfig {
            program: Some(PathBuf::from("/opt/sox")),
            global_options: vec!["-q".to_string()],
            effects: EffectChain::new().with(Volume::new(1.0)),
        };
        let command = config.command(&[PathBuf::from("in.wav")], Some(Path::new("out.wav")));
        assert_eq!(command.program_path(), Path::new("/opt/sox"));
        let args: Vec<String> = command
            .args()
            .unwrap()
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, vec!["-q", "in.wav", "out.wav", "vol", "1"]);
    }
}
