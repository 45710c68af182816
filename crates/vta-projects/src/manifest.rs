//! Manifest (`package.json`) rewriting
//!
//! Template-only keys are dropped and project metadata is filled in. Keys the
//! patch does not control keep their position and value.

use crate::error::{Error, Result};
use crate::types::GitIdentity;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Manifest file name inside the project
pub const MANIFEST_FILE: &str = "package.json";

/// Keys removed from the template manifest
pub const REMOVED_KEYS: &[&str] = &["keywords", "license", "files"];

/// Version every new project starts at
pub const INITIAL_VERSION: &str = "1.0.0";

/// Fields written into the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPatch {
    pub name: String,
    pub author: String,
}

impl ManifestPatch {
    /// Patch for project `name` authored by `identity`
    pub fn new(name: impl Into<String>, identity: &GitIdentity) -> Self {
        Self {
            name: name.into(),
            author: identity.author(),
        }
    }

    /// Apply the patch to a parsed manifest object
    pub fn apply(&self, manifest: &mut Map<String, Value>) {
        for key in REMOVED_KEYS {
            manifest.shift_remove(*key);
        }

        manifest.insert("name".to_string(), Value::String(self.name.clone()));
        manifest.insert("author".to_string(), Value::String(self.author.clone()));
        manifest.insert("provide".to_string(), Value::Bool(true));
        manifest.insert(
            "version".to_string(),
            Value::String(INITIAL_VERSION.to_string()),
        );
    }
}

/// Read a manifest file, which must hold a JSON object
pub async fn read_manifest(path: &Utf8Path) -> Result<Map<String, Value>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::manifest_missing(path.as_str()))
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::manifest_invalid(
            path.as_str(),
            format!("expected a JSON object, found {}", json_kind(&other)),
        )),
        Err(e) => Err(Error::manifest_invalid(path.as_str(), e.to_string())),
    }
}

/// Write a manifest with tab indentation and a trailing newline
///
/// Numbers are written back exactly as they were read.
pub async fn write_manifest(path: &Utf8Path, manifest: &Map<String, Value>) -> Result<()> {
    tokio::fs::write(path, to_tabbed_json(manifest)?).await?;
    Ok(())
}

/// Rewrite the manifest in `project_dir`, returning its path
pub async fn rewrite_manifest(project_dir: &Utf8Path, patch: &ManifestPatch) -> Result<Utf8PathBuf> {
    let path = project_dir.join(MANIFEST_FILE);
    info!("Updating {}", path);

    let mut manifest = read_manifest(&path).await?;
    patch.apply(&mut manifest);
    write_manifest(&path, &manifest).await?;

    debug!("Manifest name={} author={:?}", patch.name, patch.author);
    Ok(path)
}

fn to_tabbed_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn ann() -> GitIdentity {
        GitIdentity {
            name: Some("Ann".to_string()),
            email: Some("ann@x.com".to_string()),
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_apply_removes_and_overwrites_keys() {
        let mut manifest = object(json!({
            "keywords": ["vue", "template"],
            "license": "MIT",
            "files": ["dist"],
            "version": "0.0.1",
        }));

        ManifestPatch::new("demo", &ann()).apply(&mut manifest);

        assert!(!manifest.contains_key("keywords"));
        assert!(!manifest.contains_key("license"));
        assert!(!manifest.contains_key("files"));
        assert_eq!(manifest["name"], json!("demo"));
        assert_eq!(manifest["author"], json!("Ann <ann@x.com>"));
        assert_eq!(manifest["provide"], json!(true));
        assert_eq!(manifest["version"], json!("1.0.0"));
    }

    #[test]
    fn test_apply_keeps_unrelated_keys_in_order() {
        let mut manifest = object(json!({
            "name": "vue-ts-template",
            "scripts": {"serve": "vue-cli-service serve"},
            "license": "MIT",
            "dependencies": {"vue": "^3.0.0"},
            "version": "0.0.1",
        }));

        ManifestPatch::new("demo", &GitIdentity::default()).apply(&mut manifest);

        let keys: Vec<&str> = manifest.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["name", "scripts", "dependencies", "version", "author", "provide"]
        );
        assert_eq!(manifest["author"], json!(""));
        assert_eq!(manifest["dependencies"], json!({"vue": "^3.0.0"}));
    }

    #[tokio::test]
    async fn test_rewrite_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::fs::write(
            dir.join(MANIFEST_FILE),
            r#"{"private": false, "license": "MIT", "browserslist": ["> 1%"]}"#,
        )
        .unwrap();

        let patch = ManifestPatch::new("demo", &ann());
        rewrite_manifest(dir, &patch).await.unwrap();
        let first = std::fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();
        rewrite_manifest(dir, &patch).await.unwrap();
        let second = std::fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_written_manifest_uses_tabs() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::fs::write(dir.join(MANIFEST_FILE), r#"{"scripts": {"serve": "x"}}"#).unwrap();

        rewrite_manifest(dir, &ManifestPatch::new("demo", &ann()))
            .await
            .unwrap();
        let content = std::fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();

        assert!(content.starts_with("{\n\t\"scripts\": {\n\t\t\"serve\": \"x\"\n\t},"));
        assert!(content.ends_with("}\n"));
    }

    #[tokio::test]
    async fn test_missing_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();

        let result = rewrite_manifest(dir, &ManifestPatch::new("demo", &ann())).await;
        assert!(matches!(result, Err(Error::ManifestMissing { .. })));
    }

    #[tokio::test]
    async fn test_malformed_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::fs::write(dir.join(MANIFEST_FILE), "{ not json").unwrap();

        let result = rewrite_manifest(dir, &ManifestPatch::new("demo", &ann())).await;
        assert!(matches!(result, Err(Error::ManifestInvalid { .. })));
    }

    #[tokio::test]
    async fn test_non_object_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::fs::write(dir.join(MANIFEST_FILE), "[1, 2, 3]").unwrap();

        match read_manifest(&dir.join(MANIFEST_FILE)).await {
            Err(Error::ManifestInvalid { message, .. }) => assert!(message.contains("array")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rewrite_keeps_number_literals() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::fs::write(
            dir.join(MANIFEST_FILE),
            r#"{"a": 1e3, "b": 1.50, "c": 12345678901234567890123}"#,
        )
        .unwrap();

        rewrite_manifest(dir, &ManifestPatch::new("demo", &ann()))
            .await
            .unwrap();
        let content = std::fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();

        assert!(content.contains("\"a\": 1e3,"));
        assert!(content.contains("\"b\": 1.50,"));
        assert!(content.contains("\"c\": 12345678901234567890123,"));
    }
}
