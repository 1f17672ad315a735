//! # File I/O Module
//!
//! Loads and saves [`PhysicalConstants`] configuration files.
//!
//! - **Atomic saves**: write to `.tmp`, sync, rename, so a crash never leaves
//!   a half-written config behind
//! - **Validation on load**: a file that parses but holds nonsense values
//!   (NaN, Poisson's ratio ≥ 0.5, ...) is rejected before any calculation
//!
//! ## File Format
//!
//! Plain JSON. Keys missing from the file keep their default values.
//!
//! ## Example
//!
//! ```rust,no_run
//! use anchor_core::constants::PhysicalConstants;
//! use anchor_core::file_io::{load_constants, save_constants};
//! use std::path::Path;
//!
//! let path = Path::new("well-42.json");
//! save_constants(&PhysicalConstants::default(), path)?;
//! let constants = load_constants(path)?;
//! # Ok::<(), anchor_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use log::info;

use crate::constants::PhysicalConstants;
use crate::errors::{CalcError, CalcResult};

/// Save constants to a file with an atomic write.
///
/// # Returns
///
/// * `Ok(())` - File written and renamed into place
/// * `Err(CalcError::FileError)` - I/O error
pub fn save_constants(constants: &PhysicalConstants, path: &Path) -> CalcResult<()> {
    constants.validate()?;

    let json = serde_json::to_string_pretty(constants).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load and validate constants from a file.
///
/// # Returns
///
/// * `Ok(PhysicalConstants)` - Parsed and validated
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::InvalidConstants)` - A value failed validation
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_constants(path: &Path) -> CalcResult<PhysicalConstants> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let constants: PhysicalConstants =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    constants.validate()?;

    info!("loaded physical constants from {}", path.display());
    Ok(constants)
}

/// Load constants from `path` when given, defaults otherwise.
pub fn load_constants_or_default(path: Option<&Path>) -> CalcResult<PhysicalConstants> {
    match path {
        Some(p) => load_constants(p),
        None => Ok(PhysicalConstants::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("constants.json");

        let constants = PhysicalConstants {
            dynamic_level_m: 1750.0,
            surface_temp_c: 35.0,
            ..Default::default()
        };
        save_constants(&constants, &path).unwrap();

        let loaded = load_constants(&path).unwrap();
        assert_eq!(loaded, constants);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "static_level_ft": 650.0 }"#).unwrap();

        let loaded = load_constants(&path).unwrap();
        assert_eq!(loaded.static_level_ft, 650.0);
        assert_eq!(loaded.dynamic_level_m, 1900.0);
    }

    #[test]
    fn test_load_invalid_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "poisson_ratio": 0.7 }"#).unwrap();

        let err = load_constants(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONSTANTS");
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "not json").unwrap();

        let err = load_constants(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_constants(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_default_when_no_path() {
        assert_eq!(load_constants_or_default(None).unwrap(), PhysicalConstants::default());
    }
}
