// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use crate::domain::constants::{DATA_DIR_ENV, PARAMS_DIR_NAME};
use crate::domain::error::AppError;
use std::path::{Path, PathBuf};

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}

/// `config/params.yml` and `params.yml` both name the same file inside a data dir.
fn normalize_params_relative(path: &Path) -> PathBuf {
    path.strip_prefix(PARAMS_DIR_NAME)
        .map(PathBuf::from)
        .unwrap_or_else(|_| path.to_path_buf())
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn env_data_dir() -> Option<String> {
    non_empty(std::env::var(DATA_DIR_ENV).ok().as_deref())
}

fn executable_params_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let parent = exe.parent()?;
    Some(absolute(parent.join("..").join(PARAMS_DIR_NAME)))
}

/// Resolve a params path that may be absolute or relative.
///
/// Relative paths are looked up, in order:
/// 1) under the explicit data dir or `DATA_DIR`
/// 2) under the executable-relative `../config` (if the file exists there)
/// 3) relative to the current directory
pub fn resolve_params_path(raw_path: &str, explicit_data_dir: Option<&str>) -> PathBuf {
    let as_path = PathBuf::from(raw_path.trim());
    if as_path.is_absolute() {
        return as_path;
    }
    let normalized_rel = normalize_params_relative(&as_path);
    if let Some(dir) = non_empty(explicit_data_dir).or_else(env_data_dir) {
        return absolute(PathBuf::from(dir)).join(normalized_rel);
    }
    if let Some(exe_dir) = executable_params_dir() {
        let candidate = exe_dir.join(&normalized_rel);
        if candidate.exists() {
            return candidate;
        }
    }
    absolute(as_path)
}

pub fn resolve_required_params_path(
    raw_path: &str,
    explicit_data_dir: Option<&str>,
) -> Result<PathBuf, AppError> {
    let resolved = resolve_params_path(raw_path, explicit_data_dir);
    if resolved.is_file() {
        return Ok(resolved);
    }
    Err(AppError::Config(format!(
        "params file expected at {}; pass --params or set {DATA_DIR_ENV}",
        resolved.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_returned_untouched() {
        let abs = absolute(PathBuf::from("somewhere/params.yml"));
        let resolved = resolve_params_path(abs.to_str().unwrap(), Some("/ignored"));
        assert_eq!(resolved, abs);
    }

    #[test]
    fn explicit_data_dir_strips_config_prefix() {
        let resolved = resolve_params_path("config/params.yml", Some("/srv/xp"));
        assert_eq!(resolved, PathBuf::from("/srv/xp/params.yml"));
    }

    #[test]
    fn missing_required_file_names_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_required_params_path("params.yml", dir.path().to_str()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("params.yml"));
        assert!(msg.contains(DATA_DIR_ENV));
    }

    #[test]
    fn existing_file_in_data_dir_resolves() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("params.yml"), "levels: []\n").unwrap();
        let resolved = resolve_required_params_path("params.yml", dir.path().to_str()).unwrap();
        assert_eq!(resolved, dir.path().join("params.yml"));
    }
}
