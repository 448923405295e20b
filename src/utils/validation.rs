use crate::utils::error::{PlannerError, Result};
use crate::utils::logger::LogFormat;
use tracing::level_filters::LevelFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_log_format(field_name: &str, value: &str) -> Result<LogFormat> {
    LogFormat::parse(value).ok_or_else(|| PlannerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Unsupported log format. Valid formats: compact, json".to_string(),
    })
}

/// Accepts `off`, `error`, `warn`, `info`, `debug`, `trace` (any case).
pub fn validate_log_level(field_name: &str, value: &str) -> Result<LevelFilter> {
    value
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| PlannerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Unsupported log level. Valid levels: off, error, warn, info, debug, trace"
                .to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog.file", "courses.txt").is_ok());
        assert!(validate_path("catalog.file", "").is_err());
        assert!(validate_path("catalog.file", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("logging.level", "info").is_ok());
        assert!(validate_non_empty_string("logging.level", "   ").is_err());
    }

    #[test]
    fn test_validate_log_format() {
        assert_eq!(
            validate_log_format("logging.format", "json").unwrap(),
            LogFormat::Json
        );
        assert!(validate_log_format("logging.format", "yaml").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert_eq!(
            validate_log_level("logging.level", "DEBUG").unwrap(),
            LevelFilter::DEBUG
        );
        assert_eq!(
            validate_log_level("logging.level", "off").unwrap(),
            LevelFilter::OFF
        );
        assert!(validate_log_level("logging.level", "loudest").is_err());
        assert!(validate_log_level("logging.level", "").is_err());
    }
}
