//! Location of the files that ship next to the binary.
//!
//! An install looks like:
//!
//! ```text
//! <prefix>/bin/aem-junit-skill
//! <prefix>/skills/aem-junit/SKILL.md
//! <prefix>/examples/<name>/...
//! ```
//!
//! `<prefix>/share/aem-junit-skill/` is accepted as well, for package managers
//! that keep data out of the prefix root.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::error::SkillError;

pub const BUNDLE_DIR_ENV: &str = "AEM_JUNIT_HOME";
pub const SKILL_FILE_NAME: &str = "SKILL.md";
const SKILL_DIR: &str = "skills/aem-junit";
const EXAMPLES_DIR: &str = "examples";
const SHARE_DIR: &str = "share/aem-junit-skill";

/// Which resolution step produced the bundle root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleSource {
    /// `--bundle-dir` or `AEM_JUNIT_HOME`.
    Override,
    /// `<prefix>` next to `bin/`.
    InstallPrefix,
    /// `<prefix>/share/aem-junit-skill`.
    SharedData,
    /// Nothing matched; `<prefix>` is used and lookups report missing files.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    root: PathBuf,
}

impl BundleLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the bundle root for the running executable.
    pub fn resolve(override_dir: Option<&Path>) -> (Self, BundleSource) {
        let exe = std::env::current_exe()
            .ok()
            .map(|path| fs::canonicalize(&path).unwrap_or(path));
        Self::resolve_from(override_dir, exe.as_deref())
    }

    /// Resolution with the executable path supplied by the caller.
    pub fn resolve_from(override_dir: Option<&Path>, exe: Option<&Path>) -> (Self, BundleSource) {
        if let Some(dir) = override_dir {
            return (Self::new(dir), BundleSource::Override);
        }

        let prefix = exe
            .and_then(Path::parent)
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let install = Self::new(&prefix);
        if install.looks_populated() {
            return (install, BundleSource::InstallPrefix);
        }

        let shared = Self::new(prefix.join(SHARE_DIR));
        if shared.looks_populated() {
            return (shared, BundleSource::SharedData);
        }

        (install, BundleSource::Fallback)
    }

    fn looks_populated(&self) -> bool {
        self.root.join("skills").is_dir() || self.examples_path().is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn skill_path(&self) -> PathBuf {
        self.root.join(SKILL_DIR).join(SKILL_FILE_NAME)
    }

    pub fn examples_path(&self) -> PathBuf {
        self.root.join(EXAMPLES_DIR)
    }

    /// Reads the testing guide verbatim.
    pub fn read_guide(&self) -> Result<String, SkillError> {
        let path = self.skill_path();
        debug!(path = %path.display(), "Reading guide");
        if !path.is_file() {
            return Err(SkillError::MissingBundledFile {
                name: SKILL_FILE_NAME,
                path,
            });
        }
        fs::read_to_string(&path).map_err(|source| SkillError::BundledFileRead {
            name: SKILL_FILE_NAME,
            path,
            source,
        })
    }

    /// Names of the example projects, sorted. `None` when there is no examples directory.
    ///
    /// Only directories are listed; stray files in `examples/` are skipped.
    pub fn list_examples(&self) -> Result<Option<Vec<String>>, SkillError> {
        let path = self.examples_path();
        debug!(path = %path.display(), "Listing examples");
        if !path.exists() {
            return Ok(None);
        }

        let read_error = |source| SkillError::BundledFileRead {
            name: EXAMPLES_DIR,
            path: path.clone(),
            source,
        };
        let mut names = Vec::new();
        for entry in fs::read_dir(&path).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(Some(names))
    }
}
