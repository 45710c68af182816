//! Request and path types threaded through a scaffold run

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use vta_core::types::ScaffoldConfig;
use vta_core::utils::default_temp_dir;

use crate::error::Result;

/// What the user asked to create
///
/// `source_name` and `target_path` change together, at most once, when the
/// user picks a new name during conflict resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    source_name: String,
    target_path: Utf8PathBuf,
    force_overwrite: bool,
    base_dir: Utf8PathBuf,
}

impl ScaffoldRequest {
    /// Build a request for `source_name` resolved against `base_dir`
    pub fn new(source_name: impl Into<String>, base_dir: &Utf8Path, force_overwrite: bool) -> Self {
        let source_name = source_name.into();
        let target_path = resolve_target(base_dir, &source_name);
        Self {
            source_name,
            target_path,
            force_overwrite,
            base_dir: base_dir.to_path_buf(),
        }
    }

    /// Project name written into the manifest
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Absolute directory the project is created in
    pub fn target_path(&self) -> &Utf8Path {
        &self.target_path
    }

    /// Whether an existing target is replaced without asking
    pub fn force_overwrite(&self) -> bool {
        self.force_overwrite
    }

    /// Directory new names are resolved against
    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    /// Where `name` would land if the project were renamed to it
    pub fn target_for(&self, name: &str) -> Utf8PathBuf {
        resolve_target(&self.base_dir, name)
    }

    /// Switch to a new project name, recomputing the target path
    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.source_name = name.into();
        self.target_path = resolve_target(&self.base_dir, &self.source_name);
    }
}

fn resolve_target(base_dir: &Utf8Path, name: &str) -> Utf8PathBuf {
    let joined = base_dir.join(name);
    normalize(&joined)
}

/// Lexically collapse `.` and `..` components
fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    use camino::Utf8Component;

    let mut out = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_str()),
        }
    }
    out
}

/// The three locations a scaffold run moves data between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoMap {
    /// Remote template repository
    pub template_ref: String,
    /// Scratch directory the template is downloaded into
    pub temp_path: Utf8PathBuf,
    /// Final project directory
    pub target_path: Utf8PathBuf,
}

impl RepoMap {
    /// Build the map for a (conflict-resolved) request
    pub fn new(config: &ScaffoldConfig, request: &ScaffoldRequest) -> Result<Self> {
        let temp_path = match &config.template.temp_dir {
            Some(dir) => dir.clone(),
            None => default_temp_dir()?,
        };

        Ok(Self {
            template_ref: config.template.repository.clone(),
            temp_path,
            target_path: request.target_path().to_path_buf(),
        })
    }
}

/// Git user identity from the local git configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitIdentity {
    /// `user.name`
    pub name: Option<String>,
    /// `user.email`
    pub email: Option<String>,
}

impl GitIdentity {
    /// Manifest author string, `Name <email>`, or empty unless both are known
    pub fn author(&self) -> String {
        match (self.name.as_deref(), self.email.as_deref()) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                format!("{} <{}>", name, email)
            }
            _ => String::new(),
        }
    }
}
