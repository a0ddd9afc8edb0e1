//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{Config, LatencyRange};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_popup(config, &mut result);
        Self::validate_latency(config, &mut result);
        Self::validate_channels(config, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    fn validate_popup(config: &Config, result: &mut ValidationResult) {
        let popup = &config.popup;

        if popup.tick_interval_ms == 0 {
            result.add_error(ValidationError::new(
                "popup.tick_interval_ms",
                "tick_interval_ms must be greater than 0",
            ));
        }

        if popup.duration_ticks == 0 {
            result.add_warning(ValidationWarning::new(
                "popup.duration_ticks",
                "duration_ticks is 0, popups will only close when dismissed manually",
            ));
        }

        if popup.closing_delay_ms > 5000 {
            result.add_warning(ValidationWarning::new(
                "popup.closing_delay_ms",
                "closing_delay_ms is very long (>5s), closed popups will linger",
            ));
        }

        if !(0.0..=1.0).contains(&popup.volume) {
            result.add_error(ValidationError::new(
                "popup.volume",
                "volume must be between 0.0 and 1.0",
            ));
        }

        if popup.sound_enabled && popup.sound_path.is_empty() {
            result.add_warning(ValidationWarning::new(
                "popup.sound_path",
                "sound is enabled but sound_path is empty",
            ));
        }
    }

    fn validate_latency(config: &Config, result: &mut ValidationResult) {
        let latency = &config.dispatch.latency;
        let ranges: [(&str, &LatencyRange); 4] = [
            ("email", &latency.email),
            ("whatsapp", &latency.whatsapp),
            ("telegram", &latency.telegram),
            ("sms", &latency.sms),
        ];

        for (name, range) in ranges {
            if range.min_ms > range.max_ms {
                result.add_error(ValidationError::new(
                    format!("dispatch.latency.{}", name),
                    format!(
                        "min_ms ({}) must not exceed max_ms ({})",
                        range.min_ms, range.max_ms
                    ),
                ));
            }

            if range.max_ms > 30_000 {
                result.add_warning(ValidationWarning::new(
                    format!("dispatch.latency.{}.max_ms", name),
                    "simulated latency above 30s will stall every dispatch",
                ));
            }
        }
    }

    fn validate_channels(config: &Config, result: &mut ValidationResult) {
        let channels = &config.channels;

        if channels.email.enabled {
            if channels.email.smtp.host.is_empty() {
                result.add_error(ValidationError::new(
                    "channels.email.smtp.host",
                    "SMTP host cannot be empty when email is enabled",
                ));
            }
            if channels.email.smtp.port == 0 {
                result.add_error(ValidationError::new(
                    "channels.email.smtp.port",
                    "SMTP port cannot be 0",
                ));
            }
            for recipient in &channels.email.recipients {
                if !recipient.contains('@') {
                    result.add_error(ValidationError::new(
                        "channels.email.recipients",
                        format!("'{}' is not an email address", recipient),
                    ));
                }
            }
            if channels.email.recipients.is_empty() {
                result.add_warning(ValidationWarning::new(
                    "channels.email.recipients",
                    "email is enabled but has no recipients",
                ));
            }
        }

        if channels.whatsapp.enabled {
            if channels.whatsapp.api_key.is_empty() {
                result.add_warning(ValidationWarning::new(
                    "channels.whatsapp.api_key",
                    "API key is not set, may need to be set via environment variable",
                ));
            }
            if channels.whatsapp.recipients.is_empty() {
                result.add_warning(ValidationWarning::new(
                    "channels.whatsapp.recipients",
                    "whatsapp is enabled but has no recipients",
                ));
            }
        }

        if channels.telegram.enabled {
            if channels.telegram.bot_token.is_empty() {
                result.add_warning(ValidationWarning::new(
                    "channels.telegram.bot_token",
                    "bot token is not set, may need to be set via environment variable",
                ));
            }
            if channels.telegram.chat_ids.is_empty() {
                result.add_warning(ValidationWarning::new(
                    "channels.telegram.chat_ids",
                    "telegram is enabled but has no chat ids",
                ));
            }
        }

        if channels.sms.enabled {
            let valid_providers = ["twilio", "aws-sns"];
            if !valid_providers.contains(&channels.sms.provider.as_str()) {
                result.add_warning(ValidationWarning::new(
                    "channels.sms.provider",
                    format!(
                        "Unknown SMS provider '{}', valid values: {:?}",
                        channels.sms.provider, valid_providers
                    ),
                ));
            }
            if channels.sms.api_key.is_empty() {
                result.add_warning(ValidationWarning::new(
                    "channels.sms.api_key",
                    "API key is not set, may need to be set via environment variable",
                ));
            }
            if channels.sms.recipients.is_empty() {
                result.add_warning(ValidationWarning::new(
                    "channels.sms.recipients",
                    "sms is enabled but has no recipients",
                ));
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }

        if config.logging.file_enabled && config.logging.directory.is_empty() {
            result.add_error(ValidationError::new(
                "logging.directory",
                "log directory cannot be empty when file logging is enabled",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
