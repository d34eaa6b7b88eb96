use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::policy::ClassificationPolicy;
use crate::storage::DEFAULT_DIR_NAME;

/// Global configuration, optionally loaded from `~/.config/harx/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarxConfig {
    /// Name of the output subdirectory created next to the program.
    pub output_dir_name: String,
    /// Which entries to extract.
    pub policy: ClassificationPolicy,
}

impl Default for HarxConfig {
    fn default() -> Self {
        Self {
            output_dir_name: DEFAULT_DIR_NAME.to_string(),
            policy: ClassificationPolicy::default(),
        }
    }
}

/// Existing config file under the XDG config home, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harx")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Loads the XDG config file if present, otherwise built-in defaults. Never writes.
pub fn load_or_default() -> Result<HarxConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file found; using defaults");
            Ok(HarxConfig::default())
        }
    }
}

/// Loads configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<HarxConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: HarxConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    tracing::info!("loaded config from {}", path.display());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = HarxConfig::default();
        assert_eq!(cfg.output_dir_name, "Unpacked");
        assert!(cfg.policy.resource_types.contains("xhr"));
        assert!(cfg.policy.mime_types.contains("image/png"));
        assert!(!cfg.policy.include_by_extension);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = HarxConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: HarxConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_policy() {
        let toml = r#"
            [policy]
            resource_types = ["fetch", "xhr"]
            include_by_extension = true
        "#;
        let cfg: HarxConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_dir_name, "Unpacked");
        assert!(cfg.policy.resource_types.contains("fetch"));
        assert!(!cfg.policy.resource_types.contains("image"));
        // Unset keys keep their defaults.
        assert_eq!(cfg.policy.mime_types, ClassificationPolicy::default().mime_types);
        assert!(cfg.policy.include_by_extension);
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"output_dir_name = \"Assets\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.output_dir_name, "Assets");
    }

    #[test]
    fn load_from_bad_toml_errors() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"output_dir_name = [").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
