//! Engine configuration.
//!
//! Loaded once from TOML and validated up front. A config that passes
//! [`SynapticConfig::validate`] never needs clamping inside a pulse.
//!
//! # Examples
//!
//! ```
//! use synaptic_core::config::SynapticConfig;
//!
//! let config = SynapticConfig::from_toml("[activation]\ngamma = 0.6").unwrap();
//! assert!((config.activation.gamma - 0.6).abs() < f64::EPSILON);
//! assert!(config.learning.enabled);
//! ```

pub mod activation_config;
pub mod contradiction_config;
pub mod defaults;
pub mod heat_config;
pub mod learning_config;
pub mod observability_config;
pub mod selection_config;

pub use activation_config::ActivationConfig;
pub use contradiction_config::ContradictionConfig;
pub use heat_config::HeatConfig;
pub use learning_config::LearningConfig;
pub use observability_config::ObservabilityConfig;
pub use selection_config::SelectionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, SynapticResult};

/// Top-level configuration, one section per component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynapticConfig {
    pub activation: ActivationConfig,
    pub learning: LearningConfig,
    pub heat: HeatConfig,
    pub selection: SelectionConfig,
    pub contradiction: ContradictionConfig,
    pub observability: ObservabilityConfig,
}

impl SynapticConfig {
    /// Parse and validate a TOML document. Missing keys take defaults;
    /// unknown keys and out-of-range values are rejected.
    pub fn from_toml(toml_str: &str) -> SynapticResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every range constraint. Returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.activation;
        unit_interval("activation.gamma", a.gamma)?;
        unit_interval("activation.theta", a.theta)?;
        unit_interval("activation.heat_bias", a.heat_bias)?;
        if a.max_depth == 0 {
            return Err(ConfigError::OutOfRange {
                field: "activation.max_depth",
                value: a.max_depth.to_string(),
                expected: "a positive integer",
            });
        }
        positive("activation.energy_budget", a.energy_budget)?;

        let l = &self.learning;
        unit_interval("learning.eta", l.eta)?;
        unit_interval("learning.eta_decay", l.eta_decay)?;
        unit_interval("learning.co_firing_floor", l.co_firing_floor)?;
        unit_interval("learning.new_memory_energy", l.new_memory_energy)?;

        let h = &self.heat;
        open_unit_interval("heat.decay_rate", h.decay_rate)?;
        unit_interval("heat.floor", h.floor)?;
        unit_interval("heat.boost", h.boost)?;

        let s = &self.selection;
        unit_interval("selection.mmr_lambda", s.mmr_lambda)?;
        unit_interval("selection.relevance_floor", s.relevance_floor)?;
        unit_interval("selection.same_category_redundancy", s.same_category_redundancy)?;
        unit_interval("selection.cross_category_redundancy", s.cross_category_redundancy)?;

        let c = &self.contradiction;
        unit_interval("contradiction.activity_floor", c.activity_floor)?;
        unit_interval("contradiction.topic_overlap_threshold", c.topic_overlap_threshold)?;

        let o = &self.observability;
        if !matches!(
            o.log_level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::OutOfRange {
                field: "observability.log_level",
                value: o.log_level.clone(),
                expected: "one of trace, debug, info, warn, error",
            });
        }
        if o.history_capacity == 0 {
            return Err(ConfigError::OutOfRange {
                field: "observability.history_capacity",
                value: "0".to_string(),
                expected: "a positive integer",
            });
        }
        Ok(())
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: value.to_string(),
            expected: "a number in [0, 1]",
        })
    }
}

fn open_unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: value.to_string(),
            expected: "a number in (0, 1)",
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: value.to_string(),
            expected: "a positive number",
        })
    }
}
