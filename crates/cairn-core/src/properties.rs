use std::collections::BTreeMap;
use std::path::Path;

/// Name of the per-project environment file read next to `Cairn.toml`.
pub const ENV_FILE: &str = ".cairn.env";

/// Loads a `.cairn.env` file (shell-style `KEY=value` format).
///
/// Values are available via `${env:VAR}` interpolation in `Cairn.toml`,
/// e.g. to keep an internal repository URL or NDK version out of the
/// checked-in manifest.
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = std::fs::read_to_string(path).map_err(cairn_util::errors::CairnError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(map)
}

/// Interpolate `${env:VAR}` references in a string.
///
/// Looks up values first from `env_overrides` (populated from
/// `.cairn.env`), then falls back to process environment variables.
/// Unset variables become empty strings.
pub fn interpolate(input: &str, env_overrides: &BTreeMap<String, String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${env:") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let key = &rest[start + 6..start + len];
        let value = env_overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .unwrap_or_default();
        result.push_str(&rest[..start]);
        result.push_str(&value);
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}
