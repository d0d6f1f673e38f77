//! Configuration for schema inference

use serde::{Deserialize, Serialize};

/// How string values are checked for dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateDetection {
    /// Accept everything a browser-style date parser accepts, including
    /// bare numbers read as years
    #[default]
    Permissive,
    /// Accept only ISO 8601 / RFC 3339 dates and date-times
    Strict,
    /// Never tag strings with a date format
    Off,
}

/// Configuration for schema inference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Date detection mode for string values
    pub date_detection: DateDetection,

    /// Emit `integer` for whole numbers instead of `number`
    pub distinguish_integers: bool,
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the date detection mode
    pub fn date_detection(mut self, mode: DateDetection) -> Self {
        self.config.date_detection = mode;
        self
    }

    /// Enable or disable integer detection
    pub fn distinguish_integers(mut self, distinguish: bool) -> Self {
        self.config.distinguish_integers = distinguish;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}
