//! Interactive stair design state.
//!
//! Each edit replaces the configuration and re-runs defaults, synthesis and
//! validation against the new snapshot, so the result always reflects the
//! latest configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::models::{ConfigField, Segment, StairConfiguration, StairTopology, SynthesisResult};
use super::synthesizer::synthesize;

/// Topology, configuration and the result derived from them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StairDesign {
    pub topology: StairTopology,
    pub config: StairConfiguration,
    pub result: SynthesisResult,
}

/// Parse a numeric field edit. Unparsable, non-finite or negative input becomes 0.
///
/// Text with trailing units such as `"1.5m"` is unparsable and also becomes 0;
/// no numeric prefix is salvaged.
pub fn parse_measurement(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}

#[derive(Debug, Clone)]
pub struct StairDesigner {
    topology: StairTopology,
    config: StairConfiguration,
    result: SynthesisResult,
}

impl StairDesigner {
    /// Start a fresh design: landing widths take the topology defaults.
    pub fn new(topology: StairTopology, config: StairConfiguration) -> Self {
        Self::from_parts(topology, defaults::apply_defaults(&config, topology))
    }

    /// Resume a design from a configuration the caller already holds.
    pub fn from_parts(topology: StairTopology, config: StairConfiguration) -> Self {
        let result = synthesize(&config, topology);
        Self {
            topology,
            config,
            result,
        }
    }

    pub fn config(&self) -> &StairConfiguration {
        &self.config
    }

    pub fn result(&self) -> &SynthesisResult {
        &self.result
    }

    /// Immutable copy of the current design, safe to keep after further edits.
    pub fn snapshot(&self) -> StairDesign {
        StairDesign {
            topology: self.topology,
            config: self.config.clone(),
            result: self.result.clone(),
        }
    }

    fn replace(&mut self, config: StairConfiguration) {
        self.result = synthesize(&config, self.topology);
        self.config = config;
    }

    /// Switch topology. Clears both manual overrides and resets landing widths.
    pub fn select_topology(&mut self, topology: StairTopology) {
        tracing::debug!(from = %self.topology, to = %topology, "stair topology changed");
        self.topology = topology;
        let config = defaults::select_topology(self.config(), topology);
        self.replace(config);
    }

    /// Apply a raw text edit to a numeric field.
    pub fn edit_field(&mut self, field: ConfigField, raw: &str) {
        self.set_field(field, parse_measurement(raw));
    }

    /// Set a numeric field.
    ///
    /// Height edits drop the middle-flight override; stair width edits reset
    /// landing widths to the topology defaults and drop the middle-flight
    /// override too.
    pub fn set_field(&mut self, field: ConfigField, value: f64) {
        let mut config = self.config.clone();
        match field {
            ConfigField::FloorHeight => config.floor_height = value,
            ConfigField::LandingHeight => config.landing_height = value,
            ConfigField::Landing2Height => config.landing2_height = value,
            ConfigField::StairWidth => config.stair_width = value,
            ConfigField::TreadDepth => config.tread_depth = value,
            ConfigField::LandingWidth => config.landing_width = value,
            ConfigField::LandingLength => config.landing_length = value,
            ConfigField::Landing2Width => config.landing2_width = value,
            ConfigField::Landing2Length => config.landing2_length = value,
            ConfigField::WinderCount => {
                config.winder_count = value.round().clamp(0.0, f64::from(u32::MAX)) as u32;
            }
        }

        if field.is_height() || field == ConfigField::StairWidth {
            config.manual_flight2_steps = None;
        }
        if field == ConfigField::StairWidth {
            config = defaults::apply_defaults(&config, self.topology);
        }

        self.replace(config);
    }

    /// Move the total step count by `delta`, pinning it as a manual override.
    ///
    /// Returns `false` and leaves the design untouched when the new count
    /// would not be positive.
    pub fn adjust_steps(&mut self, delta: i64) -> bool {
        let next = i64::from(self.result.total_steps)
            .checked_add(delta)
            .and_then(|next| u32::try_from(next).ok());
        let next = match next {
            Some(next) if next > 0 => next,
            _ => {
                tracing::debug!(delta, "rejected step adjustment");
                return false;
            }
        };

        let config = StairConfiguration {
            manual_step_count: Some(next),
            ..self.config.clone()
        };
        self.replace(config);
        true
    }

    /// Move the middle flight of a double landing stair by `delta` steps.
    ///
    /// Other topologies have no middle flight and are left untouched.
    pub fn adjust_middle_flight(&mut self, delta: i64) -> bool {
        if self.topology != StairTopology::DoubleLanding {
            return false;
        }
        let current = self
            .result
            .stepped_segments()
            .nth(1)
            .map(Segment::step_count)
            .unwrap_or(0);
        let Some(next) = current
            .checked_add(delta)
            .and_then(|next| u32::try_from(next).ok())
        else {
            tracing::debug!(delta, "rejected middle flight adjustment");
            return false;
        };

        let config = StairConfiguration {
            manual_flight2_steps: Some(next),
            ..self.config.clone()
        };
        self.replace(config);
        true
    }
}

impl Default for StairDesigner {
    fn default() -> Self {
        Self::new(StairTopology::LShape, StairConfiguration::default())
    }
}
