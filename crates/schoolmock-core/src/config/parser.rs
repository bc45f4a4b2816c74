//! Config file parsing (YAML/JSON/JSONC).

use crate::config::error::ConfigError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get config file type from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        "jsonc" => ConfigFileType::Jsonc,
        _ => ConfigFileType::Unknown,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    Str,
    StrEscape,
    LineComment,
    BlockComment,
}

/// Strip `//` and `/* */` comments from JSONC content.
///
/// Comment markers inside string literals are kept. Newlines ending a line
/// comment are preserved so parse errors keep their line numbers.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut state = Scan::Code;

    while let Some(c) = chars.next() {
        state = match state {
            Scan::Code => match (c, chars.peek()) {
                ('/', Some('/')) => {
                    chars.next();
                    Scan::LineComment
                }
                ('/', Some('*')) => {
                    chars.next();
                    Scan::BlockComment
                }
                ('"', _) => {
                    result.push(c);
                    Scan::Str
                }
                _ => {
                    result.push(c);
                    Scan::Code
                }
            },
            Scan::Str => {
                result.push(c);
                match c {
                    '\\' => Scan::StrEscape,
                    '"' => Scan::Code,
                    _ => Scan::Str,
                }
            }
            Scan::StrEscape => {
                result.push(c);
                Scan::Str
            }
            Scan::LineComment => {
                if c == '\n' || c == '\r' {
                    result.push(c);
                    Scan::Code
                } else {
                    Scan::LineComment
                }
            }
            Scan::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    Scan::Code
                } else {
                    Scan::BlockComment
                }
            }
        };
    }

    result
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(ConfigError::from)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    parse_json(&strip_json_comments(content))
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content).map_err(ConfigError::from)
}

/// Parse config content based on file type
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &str) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => parse_yaml(content),
        ConfigFileType::Json => parse_json(content),
        ConfigFileType::Jsonc => parse_jsonc(content),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(path.to_string())),
    }
}

/// Read and parse a single config file
pub fn load_file<T: DeserializeOwned>(path: &str) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_config(&content, path)
}

/// Load every file matching a glob pattern, each holding a list of `T`.
///
/// Files are read in path order and their lists concatenated.
pub fn load_all<T: DeserializeOwned>(pattern: &str) -> Result<Vec<T>, ConfigError> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry.map_err(|e| ConfigError::Io {
            path: e.path().display().to_string(),
            source: e.into_error(),
        })?;
        paths.push(path);
    }
    paths.sort();

    let mut items = Vec::new();
    for path in paths {
        let path = path.display().to_string();
        let mut parsed: Vec<T> = load_file(&path)?;
        debug!(path = %path, count = parsed.len(), "loaded config file");
        items.append(&mut parsed);
    }
    Ok(items)
}
