mod schema;

pub use schema::{ColorMode, Config, OutputFormat};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/pharmtech-fit/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("pharmtech-fit"))
}

/// Get the default config file path (~/.config/pharmtech-fit/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))
}

pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_saphyr::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
color: never
format: json
log_level: "pharmtech_fit=debug"
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level.as_deref(), Some("pharmtech_fit=debug"));
    }

    #[test]
    fn test_partial_config_parse() {
        let config = parse_config("format: text\n").unwrap();
        assert_eq!(config.color, ColorMode::Auto);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_empty_config_parse() {
        assert_eq!(parse_config("").unwrap(), Config::default());
        assert_eq!(parse_config("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse_config("colour: always\n").is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            color: ColorMode::Always,
            format: OutputFormat::Json,
            log_level: Some("info".to_string()),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = load_config(Some(PathBuf::from("/nonexistent/config.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color: always").unwrap();
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.color, ColorMode::Always);
    }
}
