//! Design warnings for a synthesized stair.
//!
//! Infeasible geometry is never an error: every problem found here is
//! reported as a human-readable warning attached to the result.

use super::models::{StairConfiguration, StairTopology, SynthesisResult};

/// Risers steeper than this (meters) are flagged.
pub const MAX_COMFORTABLE_RISER: f64 = 0.185;

/// Inspect a synthesis result and return its warnings in check order.
pub fn validate(
    _config: &StairConfiguration,
    topology: StairTopology,
    result: &SynthesisResult,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if result.riser > MAX_COMFORTABLE_RISER {
        warnings.push(format!(
            "riser is steep ({:.0}mm)",
            result.riser * 1000.0
        ));
    }

    match topology {
        StairTopology::LShape | StairTopology::UShape => {
            // The second flight is clamped at zero, so a deficit shows as a
            // first flight that already exceeds the total.
            let first = result.first_flight_steps().unwrap_or(0);
            if first > i64::from(result.total_steps) {
                warnings.push("total height too low for 2 flights".to_string());
            }
        }
        StairTopology::DoubleLanding => {
            if result.last_flight_steps().unwrap_or(0) < 0 {
                warnings.push("total height too low for 3 flights".to_string());
            }
        }
        StairTopology::Curved => {
            let first = result.first_flight_steps().unwrap_or(0);
            let last = result.last_flight_steps().unwrap_or(0);
            if first < 1 || last < 1 {
                warnings.push("not enough height for straight sections + curve".to_string());
            }
        }
        StairTopology::Straight => {}
    }

    warnings
}
