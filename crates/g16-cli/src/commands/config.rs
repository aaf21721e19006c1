use anyhow::Result;
use g16_verifier::PairingMode;

use crate::config::{config_path, load_config, save_config};
use crate::output;

const ALLOWED_KEYS: &[&str] = &["key_path", "pairing"];

pub fn set(key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    let mut config = load_config()?;
    match key {
        "key_path" => {
            if !std::path::Path::new(value).exists() {
                output::warn(&format!("{value} does not exist yet"));
            }
            config.key_path = Some(value.to_string());
        }
        "pairing" => {
            config.pairing = value
                .parse::<PairingMode>()
                .map_err(|e| output::fail_with_hint(&e.to_string(), "use `combined` or `separated`"))?;
        }
        _ => unreachable!(),
    }
    save_config(&config)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }));
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

pub fn unset_key() -> Result<()> {
    let mut config = load_config()?;
    config.key_path = None;
    save_config(&config)?;
    if output::is_json() {
        output::json_output(serde_json::json!({ "key": "key_path", "value": null }));
    } else {
        output::success("key_path cleared, using the built-in demo key");
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let path = config_path()?;
    let config = load_config()?;
    let key_path = config.key_path.clone().unwrap_or_else(|| "(built-in demo key)".into());

    if output::is_json() {
        output::json_output(serde_json::json!({
            "config_path": path.display().to_string(),
            "key_path": config.key_path,
            "pairing": config.pairing.to_string(),
        }));
    } else {
        output::label("config", &path.display().to_string());
        output::label("key_path", &key_path);
        output::label("pairing", &config.pairing.to_string());
    }
    Ok(())
}
