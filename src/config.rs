//! Mapper configuration, loadable from YAML

use crate::error::ProvResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_resource_base() -> String {
    "mei:".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["mei".to_string(), "tei".to_string()]
}

/// Join a resource base and a kind. Bases ending in `/`, `:` or `#` are
/// used as-is, anything else gets a `/` separator.
pub(crate) fn resource_iri(base: &str, kind: &str) -> String {
    if base.is_empty() || base.ends_with(['/', ':', '#']) {
        format!("{}{}", base, kind)
    } else {
        format!("{}/{}", base, kind)
    }
}

/// Settings shared by the mapper and the batch runner
///
/// ```yaml
/// resource_base: "https://example.org/mei/"
/// extensions: [mei]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Prefix for generated resource IRIs (`<base>work/...`, `<base>agent/...`)
    #[serde(default = "default_resource_base")]
    pub resource_base: String,
    /// File extensions picked up by batch runs, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            resource_base: default_resource_base(),
            extensions: default_extensions(),
        }
    }
}

impl MapperConfig {
    pub fn from_yaml_str(yaml: &str) -> ProvResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: &Path) -> ProvResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Base IRI for one resource kind, e.g. `mei:agent`
    pub fn resource(&self, kind: &str) -> String {
        resource_iri(&self.resource_base, kind)
    }

    /// True if `path` has one of the configured extensions
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MapperConfig::default();
        assert_eq!(config.resource_base, "mei:");
        assert_eq!(config.resource("work"), "mei:work");
        assert!(config.accepts(Path::new("a/b.mei")));
        assert!(config.accepts(Path::new("b.tei")));
        assert!(!config.accepts(Path::new("b.xml")));
        assert!(!config.accepts(Path::new("mei")));
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config = MapperConfig::from_yaml_str("resource_base: \"https://example.org/\"\n").unwrap();
        assert_eq!(config.resource("agent"), "https://example.org/agent");
        assert_eq!(config.extensions, vec!["mei", "tei"]);
    }

    #[test]
    fn test_resource_base_without_separator() {
        let config = MapperConfig::from_yaml_str("resource_base: \"https://example.org\"\n").unwrap();
        assert_eq!(config.resource("work"), "https://example.org/work");

        let hash = MapperConfig::from_yaml_str("resource_base: \"urn:x#\"\n").unwrap();
        assert_eq!(hash.resource("work"), "urn:x#work");
    }

    #[test]
    fn test_empty_mapping_is_default() {
        let config = MapperConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, MapperConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = MapperConfig::from_yaml_str("extensions: 5").unwrap_err();
        assert!(matches!(err, crate::ProvError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meiprov.yaml");
        std::fs::write(&path, "extensions: [mei]\n").unwrap();

        let config = MapperConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.extensions, vec!["mei"]);
        assert!(!config.accepts(Path::new("x.tei")));
    }
}
