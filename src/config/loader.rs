//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::EntrypointConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Parse a configuration document without validating it.
///
/// Callers apply CLI overrides first and validate the merged result.
pub fn parse_config(content: &str) -> Result<EntrypointConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

/// Load a configuration file, or the defaults when no path is given.
///
/// The result is not validated yet.
pub fn read_config(path: Option<&Path>) -> Result<EntrypointConfig, ConfigError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            parse_config(&content)
        }
        None => Ok(EntrypointConfig::default()),
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<EntrypointConfig, ConfigError> {
    let config = read_config(Some(path))?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.migrate.program, "python");
        assert_eq!(config.migrate.args, vec!["manage.py", "migrate", "--noinput"]);
        assert!(!config.collect_static.enabled);
        assert!(!config.database_wait.enabled);
        assert!(!config.env_file.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
            [migrate]
            program = "./manage.py"

            [collect_static]
            enabled = true

            [database_wait]
            enabled = true
            port = 5433
            "#,
        )
        .unwrap();

        assert_eq!(config.migrate.program, "./manage.py");
        // Unspecified fields keep their defaults.
        assert_eq!(config.migrate.args, vec!["manage.py", "migrate", "--noinput"]);
        assert!(config.collect_static.enabled);
        assert_eq!(config.collect_static.program, "python");
        assert_eq!(config.database_wait.port, 5433);
        assert_eq!(config.database_wait.host, "localhost");
    }

    #[test]
    fn test_malformed_document() {
        let err = parse_config("[migrate\nprogram = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("entrypoint-loader-does-not-exist.toml");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = std::env::temp_dir().join(format!(
            "entrypoint-loader-invalid-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[migrate]\nprogram = \"\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {other}"),
        }
    }
}
