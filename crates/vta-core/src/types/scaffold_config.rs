//! Scaffold configuration types
//!
//! These types control where templates come from, how dependencies are
//! installed, and how the new repository is initialized.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Complete scaffold configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScaffoldConfig {
    /// Template repository settings
    #[serde(default)]
    pub template: TemplateConfig,

    /// Dependency installation settings
    #[serde(default)]
    pub install: InstallConfig,

    /// Git initialization settings
    #[serde(default)]
    pub git: GitInitConfig,
}

/// Where and how the template repository is fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateConfig {
    /// Remote template repository URL
    #[serde(default = "default_template_repository")]
    pub repository: String,

    /// Branch or tag to check out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Clone depth (0 means full history)
    #[serde(default = "default_clone_depth")]
    pub depth: u32,

    /// Scratch directory the template is downloaded into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<Utf8PathBuf>,

    /// Timeout for the fetch in seconds (no timeout when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            repository: default_template_repository(),
            branch: None,
            depth: default_clone_depth(),
            temp_dir: None,
            timeout_secs: None,
        }
    }
}

/// Dependency installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InstallConfig {
    /// Command that installs dependencies
    #[serde(default = "default_install_command")]
    pub command: String,

    /// Package registry passed to the install command as `--registry=<url>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,

    /// Command suggested to the user once the project is ready
    #[serde(default = "default_start_command")]
    pub start_command: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            command: default_install_command(),
            registry: None,
            start_command: default_start_command(),
        }
    }
}

impl InstallConfig {
    /// Install command line including the registry flag, if any
    pub fn command_line(&self) -> String {
        match &self.registry {
            Some(registry) if !registry.is_empty() => {
                format!("{} --registry={}", self.command, registry)
            }
            _ => self.command.clone(),
        }
    }
}

/// Git initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitInitConfig {
    /// Initial branch passed to `git init --initial-branch`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// Message for the commit created after dependencies are installed
    #[serde(default = "default_initial_commit_message")]
    pub initial_commit_message: String,
}

impl Default for GitInitConfig {
    fn default() -> Self {
        Self {
            default_branch: None,
            initial_commit_message: default_initial_commit_message(),
        }
    }
}

fn default_template_repository() -> String {
    "https://github.com/vta-cli/vue-ts-template.git".to_string()
}
fn default_clone_depth() -> u32 {
    1
}
fn default_install_command() -> String {
    "npm install".to_string()
}
fn default_start_command() -> String {
    "npm run serve".to_string()
}
fn default_initial_commit_message() -> String {
    "init: initialize project skeleton".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_command_line_with_registry() {
        let install = InstallConfig {
            registry: Some("https://registry.npmmirror.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            install.command_line(),
            "npm install --registry=https://registry.npmmirror.com"
        );
    }

    #[test]
    fn test_install_command_line_ignores_empty_registry() {
        let install = InstallConfig {
            registry: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(install.command_line(), "npm install");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ScaffoldConfig = serde_yaml_ng::from_str(
            r#"
template:
  branch: "next"
"#,
        )
        .unwrap();
        assert_eq!(config.template.branch.as_deref(), Some("next"));
        assert_eq!(config.template.depth, 1);
        assert_eq!(config.install.command, "npm install");
        assert_eq!(
            config.git.initial_commit_message,
            "init: initialize project skeleton"
        );
    }
}
