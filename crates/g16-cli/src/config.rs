use anyhow::{Context, Result};
use g16_types::files::KeyFile;
use g16_verifier::{demo_verifier, PairingMode, Verifier};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Key file to verify against; the built-in demo key when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
    #[serde(default)]
    pub pairing: PairingMode,
}

/// `$G16_HOME`, or `~/.g16`.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("G16_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".g16"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub fn load_config_from(path: &Path) -> Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    read_json(path)
}

pub fn save_config_to(path: &Path, config: &CliConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_config() -> Result<CliConfig> {
    load_config_from(&config_path()?)
}

pub fn save_config(config: &CliConfig) -> Result<()> {
    save_config_to(&config_path()?, config)
}

/// Where the verifier's key comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeySource {
    BuiltIn,
    File(PathBuf),
}

impl KeySource {
    pub fn resolve(flag: Option<&Path>, config: &CliConfig) -> Self {
        match (flag, &config.key_path) {
            (Some(path), _) => KeySource::File(path.to_path_buf()),
            (None, Some(path)) => KeySource::File(PathBuf::from(path)),
            (None, None) => KeySource::BuiltIn,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            KeySource::BuiltIn => "built-in demo key".into(),
            KeySource::File(path) => path.display().to_string(),
        }
    }
}

/// Build the process-wide verifier once, at startup of a command.
pub fn load_verifier(source: &KeySource, config: &CliConfig) -> Result<Verifier> {
    let verifier = match source {
        KeySource::BuiltIn => demo_verifier().context("built-in key failed validation")?,
        KeySource::File(path) => {
            let file: KeyFile = read_json(path)?;
            Verifier::from_key_file(&file).with_context(|| format!("invalid key file {}", path.display()))?
        }
    };
    debug!(source = %source.describe(), pairing = %config.pairing, "verifier ready");
    Ok(verifier.with_mode(config.pairing))
}
