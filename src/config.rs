use crate::error::{Result, ToptierError};
use crate::types::config::ToptierConfig;
use crate::types::scoring::ScoringConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "toptier.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".toptier/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/toptier/config.toml";

/// Resolves the scoring configuration for `root`, falling back to built-in
/// defaults when no file exists.
pub fn load_scoring_config(root: &Path, explicit: Option<&Path>) -> Result<ScoringConfig> {
    let loaded = match explicit {
        Some(path) => Some(load_explicit(path)?),
        None => load_config(root)?,
    };
    match loaded {
        Some(cfg) => {
            let resolved = cfg.resolve()?;
            tracing::info!(scheme = %resolved.scheme, "loaded scoring config");
            Ok(resolved)
        }
        None => {
            tracing::debug!("no toptier.toml found, using default scoring config");
            Ok(ScoringConfig::default())
        }
    }
}

pub fn load_config(root: &Path) -> Result<Option<ToptierConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ToptierConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    let local_path = root.join(DEFAULT_LOCAL_FILE);
    let any_present = [Some(repo_path.as_path()), Some(local_path.as_path()), global_path]
        .into_iter()
        .flatten()
        .any(Path::exists);
    if !any_present {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &local_path)?;

    let cfg: ToptierConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ToptierError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

fn load_explicit(path: &Path) -> Result<ToptierConfig> {
    if !path.exists() {
        return Err(ToptierError::ConfigParse(format!(
            "config file not found: {}",
            path.display()
        )));
    }
    read_toml_value(path)?.try_into().map_err(|e: toml::de::Error| {
        ToptierError::ConfigParse(format!("{}: {}", path.display(), e))
    })
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ToptierError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
