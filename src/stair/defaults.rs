//! Landing defaults derived from the selected topology.

use serde::{Deserialize, Serialize};

use super::models::{StairConfiguration, StairTopology};

/// Default landing widths for a topology.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LandingDefaults {
    pub landing_width: f64,
    pub landing2_width: f64,
}

/// Compute the default landing widths for a topology and stair width.
///
/// Folding plans (U-shape and curved) need two stair widths across the turn.
pub fn defaults_for(topology: StairTopology, stair_width: f64) -> LandingDefaults {
    let width = if topology.folds_back() {
        stair_width * 2.0
    } else {
        stair_width
    };

    LandingDefaults {
        landing_width: width,
        landing2_width: width,
    }
}

/// Overwrite the landing widths of `config` with the topology defaults.
///
/// Manually widened landings are not preserved.
pub fn apply_defaults(config: &StairConfiguration, topology: StairTopology) -> StairConfiguration {
    let defaults = defaults_for(topology, config.stair_width);
    StairConfiguration {
        landing_width: defaults.landing_width,
        landing2_width: defaults.landing2_width,
        ..config.clone()
    }
}

/// Configuration after switching to `topology`: defaults re-applied and both
/// manual step overrides cleared.
pub fn select_topology(config: &StairConfiguration, topology: StairTopology) -> StairConfiguration {
    StairConfiguration {
        manual_step_count: None,
        manual_flight2_steps: None,
        ..apply_defaults(config, topology)
    }
}
