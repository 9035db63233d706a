use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::{VARIABLE_MARKER, WILDCARD};

pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Endpoint is not found";
pub const DEFAULT_METHOD_NOT_SUPPORTED_MESSAGE: &str = "Invalid REST method";
pub const DEFAULT_METHOD_NOT_REGISTERED_MESSAGE: &str = "Method is not found";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// Prefix applied to every route registered through the dispatcher builder.
    pub default_prefix: Option<String>,
    pub not_found_message: String,
    pub method_not_supported_message: String,
    pub method_not_registered_message: String,
    /// Emit DEBUG events for every routing decision.
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            default_prefix: None,
            not_found_message: DEFAULT_NOT_FOUND_MESSAGE.to_string(),
            method_not_supported_message: DEFAULT_METHOD_NOT_SUPPORTED_MESSAGE.to_string(),
            method_not_registered_message: DEFAULT_METHOD_NOT_REGISTERED_MESSAGE.to_string(),
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if let Some(prefix) = self.default_prefix.as_deref() {
            validate_prefix(prefix)?;
        }
        for (field, value) in [
            ("not_found_message", &self.not_found_message),
            ("method_not_supported_message", &self.method_not_supported_message),
            ("method_not_registered_message", &self.method_not_registered_message),
        ] {
            if value.trim().is_empty() {
                return Err(RouterOptionsError::EmptyMessage { field });
            }
        }
        Ok(())
    }
}

/// Prefixes are plain literal paths: absolute, without variables or wildcards.
pub fn validate_prefix(prefix: &str) -> Result<(), RouterOptionsError> {
    if !prefix.starts_with('/') {
        return Err(RouterOptionsError::PrefixNotAbsolute {
            prefix: prefix.to_string(),
        });
    }
    let dynamic = prefix
        .split('/')
        .any(|segment| segment == WILDCARD || segment.starts_with(VARIABLE_MARKER));
    if dynamic {
        return Err(RouterOptionsError::PrefixNotLiteral {
            prefix: prefix.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn default_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.options.default_prefix = Some(prefix.into());
        self
    }

    pub fn not_found_message<S: Into<String>>(mut self, message: S) -> Self {
        self.options.not_found_message = message.into();
        self
    }

    pub fn method_not_supported_message<S: Into<String>>(mut self, message: S) -> Self {
        self.options.method_not_supported_message = message.into();
        self
    }

    pub fn method_not_registered_message<S: Into<String>>(mut self, message: S) -> Self {
        self.options.method_not_registered_message = message.into();
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("prefix '{prefix}' must start with '/'")]
    PrefixNotAbsolute { prefix: String },
    #[error("prefix '{prefix}' must not contain variables or wildcards")]
    PrefixNotLiteral { prefix: String },
    #[error("{field} must not be empty")]
    EmptyMessage { field: &'static str },
}
