//! Configuration for content-chef.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (CHEF_CONTENT_ROOT, CHEF_SOURCE_DOMAIN, CHEF_SOURCE_ID)
//! 2. Config file (.chef/config.yaml)
//! 3. Defaults (./content, the designmate channel)
//!
//! Config file discovery:
//! - Searches current directory and parents for .chef/config.yaml
//! - Falls back to ~/.chef/config.yaml
//! - `paths.content_root` is relative to the directory containing `.chef/`

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::ChannelInfo;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const DEFAULT_SOURCE_DOMAIN: &str = "www.designmate.com";
pub const DEFAULT_SOURCE_ID: &str = "designmate";
pub const DEFAULT_CHANNEL_TITLE: &str = "designmate";
pub const DEFAULT_CHANNEL_LANGUAGE: &str = "en";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelConfig {
    pub source_domain: Option<String>,
    pub source_id: Option<String>,
    pub title: Option<String>,
    pub language: Option<String>,
    pub description: Option<String>,
    /// Local path or URL of the channel thumbnail
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Directory `content://` paths resolve against
    pub content_root: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory `content://` paths resolve against
    pub content_root: PathBuf,
    /// Channel metadata
    pub channel: ChannelInfo,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".chef").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".chef").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Resolve configuration from an optional config file and an env lookup
fn resolve_config(
    config_file: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let (channel, content_root) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Project root is the parent of .chef/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        let content_root = config
            .paths
            .content_root
            .as_deref()
            .map(|root| resolve_path(base_dir, root))
            .unwrap_or_else(|| base_dir.join("content"));

        (config.channel, content_root)
    } else {
        (ChannelConfig::default(), cwd.join("content"))
    };

    let content_root = env("CHEF_CONTENT_ROOT")
        .map(PathBuf::from)
        .unwrap_or(content_root);

    let channel = ChannelInfo {
        source_domain: env("CHEF_SOURCE_DOMAIN")
            .or(channel.source_domain)
            .unwrap_or_else(|| DEFAULT_SOURCE_DOMAIN.to_string()),
        source_id: env("CHEF_SOURCE_ID")
            .or(channel.source_id)
            .unwrap_or_else(|| DEFAULT_SOURCE_ID.to_string()),
        title: channel
            .title
            .unwrap_or_else(|| DEFAULT_CHANNEL_TITLE.to_string()),
        language: channel
            .language
            .unwrap_or_else(|| DEFAULT_CHANNEL_LANGUAGE.to_string()),
        description: channel.description,
        thumbnail: channel.thumbnail,
    };

    Ok(ResolvedConfig {
        content_root,
        channel,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve_config(find_config_file(), |key| std::env::var(key).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Get the content root directory.
pub fn content_root() -> Result<PathBuf> {
    Ok(config()?.content_root.clone())
}

/// Get the configured channel metadata.
pub fn channel_info() -> Result<ChannelInfo> {
    Ok(config()?.channel.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(temp: &TempDir, body: &str) -> PathBuf {
        let chef_dir = temp.path().join(".chef");
        std::fs::create_dir_all(&chef_dir).unwrap();

        let config_path = chef_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(None, no_env).unwrap();

        assert_eq!(config.channel.source_domain, DEFAULT_SOURCE_DOMAIN);
        assert_eq!(config.channel.source_id, DEFAULT_SOURCE_ID);
        assert_eq!(config.channel.language, "en");
        assert!(config.content_root.ends_with("content"));
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            &temp,
            r#"
version: "1.0"
channel:
  source_domain: example.org
  source_id: physics
  title: Physics Demo
paths:
  content_root: media
"#,
        );

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.channel.source_id, Some("physics".to_string()));
        assert_eq!(config.paths.content_root, Some("media".to_string()));

        let resolved = resolve_config(Some(config_path.clone()), no_env).unwrap();
        assert_eq!(resolved.channel.title, "Physics Demo");
        assert_eq!(resolved.channel.language, DEFAULT_CHANNEL_LANGUAGE);
        assert_eq!(resolved.content_root, temp.path().join("media"));
        assert_eq!(resolved.config_file, Some(config_path));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            &temp,
            r#"
version: "1.0"
channel:
  source_id: physics
"#,
        );

        let env: HashMap<&str, &str> = [
            ("CHEF_SOURCE_ID", "chemistry"),
            ("CHEF_CONTENT_ROOT", "/data/media"),
        ]
        .into_iter()
        .collect();
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());
        let resolved = resolve_config(Some(config_path), lookup).unwrap();

        assert_eq!(resolved.channel.source_id, "chemistry");
        assert_eq!(resolved.content_root, PathBuf::from("/data/media"));
    }

    #[test]
    fn test_invalid_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, "channel: [not, a, map]");

        assert!(resolve_config(Some(config_path), no_env).is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
