//! User-facing errors.
//!
//! At runtime the command name can be unknown, a file that ships with the
//! install can be missing, or a template class name can be invalid. All of
//! them exit with status 1.

use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;
use serde_json::json;
use thiserror::Error;

use crate::bundle::BUNDLE_DIR_ENV;
use crate::content::PROGRAM_NAME;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{name} not found")]
    MissingBundledFile { name: &'static str, path: PathBuf },

    #[error("failed to read {name}: {source}")]
    BundledFileRead {
        name: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("'{name}' is not a valid Java class name: {reason}")]
    InvalidClassName { name: String, reason: String },
}

impl SkillError {
    pub fn kind(&self) -> &'static str {
        match self {
            SkillError::UnknownCommand(_) => "unknown_command",
            SkillError::MissingBundledFile { .. } => "missing_bundled_file",
            SkillError::BundledFileRead { .. } => "bundled_file_read",
            SkillError::InvalidClassName { .. } => "invalid_class_name",
        }
    }

    /// Path of the bundled file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SkillError::UnknownCommand(_) | SkillError::InvalidClassName { .. } => None,
            SkillError::MissingBundledFile { path, .. }
            | SkillError::BundledFileRead { path, .. } => Some(path.as_path()),
        }
    }

    pub fn suggestion(&self) -> String {
        match self {
            SkillError::UnknownCommand(_) => {
                format!("Run \"{} help\" for usage information", PROGRAM_NAME)
            }
            SkillError::MissingBundledFile { .. } | SkillError::BundledFileRead { .. } => format!(
                "Reinstall {} or point {} (or --bundle-dir) at a directory containing skills/ and examples/",
                PROGRAM_NAME, BUNDLE_DIR_ENV
            ),
            SkillError::InvalidClassName { .. } => format!(
                "Pass a simple class name, e.g. {} template model HeroComponent",
                PROGRAM_NAME
            ),
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": self.to_string(),
            "kind": self.kind(),
            "path": self.path().map(|p| p.display().to_string()),
            "suggestion": self.suggestion()
        })
    }
}
