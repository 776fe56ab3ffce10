use std::path::PathBuf;

use crate::loader::error::ConfigLoadError;

pub fn env_path(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn env_f32(
    key: &'static str,
    raw: Option<&str>,
) -> Result<Option<f32>, ConfigLoadError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.trim()
        .parse::<f32>()
        .map(Some)
        .map_err(|err| ConfigLoadError::InvalidEnv {
            key,
            value: raw.to_string(),
            reason: err.to_string(),
        })
}
