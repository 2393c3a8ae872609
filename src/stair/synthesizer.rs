//! Flight synthesis: step count, riser and segment layout per topology.

use super::models::{Segment, StairConfiguration, StairTopology, SynthesisResult};
use super::validator;

/// Target riser height in meters used for automatic step counts.
pub const TARGET_RISER: f64 = 0.150;

/// Round half up, matching how step counts are rounded on the estimating form.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Steps needed to climb `height` with the given riser. A zero riser climbs nothing.
fn steps_for(height: f64, riser: f64) -> i64 {
    if riser > 0.0 && riser.is_finite() {
        round_half_up(height / riser)
    } else {
        0
    }
}

/// Horizontal run of a straight flight: the top step lands on the next level.
fn flight_run(steps: i64, tread_depth: f64) -> f64 {
    (steps.saturating_sub(1) as f64 * tread_depth).max(0.0)
}

fn flight(label: &str, steps: i64, tread_depth: f64) -> Segment {
    Segment::Flight {
        label: label.to_string(),
        step_count: steps,
        run: flight_run(steps, tread_depth),
    }
}

fn landing(label: &str, level_height: f64, width: f64, length: f64) -> Segment {
    Segment::Landing {
        label: label.to_string(),
        level_height,
        width,
        length,
    }
}

/// Total step count: the manual override when set, otherwise the floor
/// height over the target riser, never less than one.
pub fn total_steps(config: &StairConfiguration) -> u32 {
    match config.step_override() {
        Some(steps) => steps,
        None => {
            let steps = round_half_up(config.floor_height / TARGET_RISER);
            steps.clamp(1, i64::from(u32::MAX)) as u32
        }
    }
}

/// Segments in walking order plus the horizontal footprint.
struct Layout {
    segments: Vec<Segment>,
    footprint: f64,
}

fn straight(config: &StairConfiguration, total: i64) -> Layout {
    let first = flight("First Flight", total.max(1), config.tread_depth);
    let footprint = first.run();
    Layout {
        segments: vec![first],
        footprint,
    }
}

/// L- and U-shaped stairs: one landing between two flights.
fn single_landing(config: &StairConfiguration, total: i64, riser: f64) -> Layout {
    let f1 = steps_for(config.landing_height, riser).max(1);
    let f2 = total.saturating_sub(f1).max(0);

    let first = flight("First Flight", f1, config.tread_depth);
    let footprint = first.run() + config.landing_length;

    Layout {
        segments: vec![
            first,
            landing(
                "Landing",
                config.landing_height,
                config.landing_width,
                config.landing_length,
            ),
            flight("Second Flight", f2, config.tread_depth),
        ],
        footprint,
    }
}

fn double_landing(config: &StairConfiguration, total: i64, riser: f64) -> Layout {
    let f1 = steps_for(config.landing_height, riser);
    let f2 = match config.manual_flight2_steps {
        Some(steps) => i64::from(steps),
        None => steps_for(config.landing2_height - config.landing_height, riser),
    };
    let f3 = total.saturating_sub(f1).saturating_sub(f2);

    // An overridden middle flight moves the second landing to where its steps end.
    let second_level = match config.manual_flight2_steps {
        Some(_) => config.landing_height + f2 as f64 * riser,
        None => config.landing2_height,
    };

    let first = flight("First Flight", f1, config.tread_depth);
    let footprint = first.run() + config.landing_length;

    Layout {
        segments: vec![
            first,
            landing(
                "1st Landing",
                config.landing_height,
                config.landing_width,
                config.landing_length,
            ),
            flight("Middle Flight", f2, config.tread_depth),
            landing(
                "2nd Landing",
                second_level,
                config.landing2_width,
                config.landing2_length,
            ),
            flight("Top Flight", f3, config.tread_depth),
        ],
        footprint,
    }
}

/// Curved stair: winders replace the landing, remaining steps split between
/// two straight flights with the odd step going to the upper one.
fn curved(config: &StairConfiguration, total: i64, riser: f64) -> Layout {
    let turn = i64::from(config.turn_steps());
    let remaining = total - turn;
    let f1 = remaining.div_euclid(2);
    let f2 = remaining - f1;

    let lower = flight("Lower Straight", f1, config.tread_depth);
    // Footprint approximation: lower flight plus the width of the fold.
    let footprint = lower.run() + config.stair_width * 2.0;

    Layout {
        segments: vec![
            lower,
            Segment::Curve {
                label: "Curved Turn".to_string(),
                step_count: turn,
                run: turn as f64 * config.tread_depth,
                height_gain: turn as f64 * riser,
            },
            flight("Upper Straight", f2, config.tread_depth),
        ],
        footprint,
    }
}

/// Synthesize the stair layout for a configuration and topology.
///
/// Never fails: infeasible geometry shows up as degenerate segments and
/// warnings on the result.
pub fn synthesize(config: &StairConfiguration, topology: StairTopology) -> SynthesisResult {
    let total_steps = total_steps(config);
    let riser = config.floor_height / f64::from(total_steps);
    let total = i64::from(total_steps);

    let Layout {
        segments,
        footprint,
    } = match topology {
        StairTopology::Straight => straight(config, total),
        StairTopology::LShape | StairTopology::UShape => single_landing(config, total, riser),
        StairTopology::DoubleLanding => double_landing(config, total, riser),
        StairTopology::Curved => curved(config, total, riser),
    };

    let mut result = SynthesisResult {
        total_steps,
        riser,
        segments,
        footprint,
        warnings: Vec::new(),
    };
    result.warnings = validator::validate(config, topology, &result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn steps(result: &SynthesisResult) -> Vec<i64> {
        result.stepped_segments().map(Segment::step_count).collect()
    }

    #[test]
    fn test_straight_flight() {
        let config = StairConfiguration::default();

        let result = synthesize(&config, StairTopology::Straight);

        assert_eq!(result.total_steps, 20);
        assert!(approx(result.riser, 0.15));
        assert_eq!(result.segments.len(), 1);
        match &result.segments[0] {
            Segment::Flight { step_count, run, .. } => {
                assert_eq!(*step_count, 20);
                assert!(approx(*run, 4.75));
            }
            other => panic!("expected flight, got {other:?}"),
        }
        assert!(approx(result.footprint, 4.75));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_l_shape_split() {
        let config = StairConfiguration::default();

        let result = synthesize(&config, StairTopology::LShape);

        assert_eq!(result.total_steps, 20);
        assert_eq!(
            result.segments,
            vec![
                Segment::Flight {
                    label: "First Flight".into(),
                    step_count: 10,
                    run: 2.25
                },
                Segment::Landing {
                    label: "Landing".into(),
                    level_height: 1.5,
                    width: 0.9,
                    length: 0.9
                },
                Segment::Flight {
                    label: "Second Flight".into(),
                    step_count: 10,
                    run: 2.25
                },
            ]
        );
        assert!(approx(result.footprint, 2.25 + 0.9));
    }

    #[test]
    fn test_landing_below_first_riser_keeps_one_step() {
        let config = StairConfiguration {
            landing_height: 0.0,
            ..Default::default()
        };

        let result = synthesize(&config, StairTopology::UShape);

        assert_eq!(steps(&result), vec![1, 19]);
    }

    #[test]
    fn test_landing_above_floor_clamps_second_flight() {
        let config = StairConfiguration {
            landing_height: 4.5,
            ..Default::default()
        };

        let result = synthesize(&config, StairTopology::LShape);

        assert_eq!(steps(&result), vec![30, 0]);
        assert!(approx(result.segments[2].run(), 0.0));
        assert_eq!(
            result.warnings,
            vec!["total height too low for 2 flights".to_string()]
        );
    }

    #[test]
    fn test_curved_split() {
        let config = StairConfiguration::default();

        let result = synthesize(&config, StairTopology::Curved);

        assert_eq!(steps(&result), vec![8, 4, 8]);
        match &result.segments[1] {
            Segment::Curve {
                step_count,
                run,
                height_gain,
                ..
            } => {
                assert_eq!(*step_count, 4);
                assert!(approx(*run, 1.0));
                assert!(approx(*height_gain, 0.6));
            }
            other => panic!("expected curve, got {other:?}"),
        }
        assert!(approx(result.footprint, 1.75 + 1.8));
    }

    #[test]
    fn test_curved_odd_remainder_goes_up() {
        let config = StairConfiguration {
            manual_step_count: Some(21),
            ..Default::default()
        };

        let result = synthesize(&config, StairTopology::Curved);

        assert_eq!(steps(&result), vec![8, 4, 9]);
    }

    #[test]
    fn test_curved_zero_winders_uses_default() {
        let config = StairConfiguration {
            winder_count: 0,
            ..Default::default()
        };

        let result = synthesize(&config, StairTopology::Curved);

        assert_eq!(result.segments[1].step_count(), 4);
    }

    #[test]
    fn test_double_landing_auto() {
        let config = StairConfiguration::default();

        let result = synthesize(&config, StairTopology::DoubleLanding);

        assert_eq!(steps(&result), vec![10, 3, 7]);
        match &result.segments[3] {
            Segment::Landing { level_height, .. } => assert_eq!(*level_height, 2.0),
            other => panic!("expected landing, got {other:?}"),
        }
        assert!(approx(result.footprint, 2.25 + 0.9));
    }

    #[test]
    fn test_double_landing_override_moves_second_landing() {
        let config = StairConfiguration {
            manual_flight2_steps: Some(5),
            ..Default::default()
        };

        let result = synthesize(&config, StairTopology::DoubleLanding);

        assert_eq!(steps(&result), vec![10, 5, 5]);
        match &result.segments[3] {
            Segment::Landing { level_height, .. } => {
                assert!(approx(*level_height, 1.5 + 5.0 * result.riser));
            }
            other => panic!("expected landing, got {other:?}"),
        }
    }

    #[test]
    fn test_double_landing_negative_top_flight() {
        let config = StairConfiguration {
            manual_step_count: Some(12),
            manual_flight2_steps: Some(6),
            ..Default::default()
        };

        let result = synthesize(&config, StairTopology::DoubleLanding);

        // riser 0.25: f1 = 6, f2 = 6, f3 = 0
        assert_eq!(steps(&result), vec![6, 6, 0]);

        let config = StairConfiguration {
            manual_step_count: Some(12),
            manual_flight2_steps: Some(9),
            ..Default::default()
        };
        let result = synthesize(&config, StairTopology::DoubleLanding);
        assert_eq!(result.last_flight_steps(), Some(-3));
        assert!(approx(result.segments[4].run(), 0.0));
    }

    #[test]
    fn test_step_counts_sum_to_total() {
        let topologies = [
            StairTopology::Straight,
            StairTopology::LShape,
            StairTopology::UShape,
            StairTopology::Curved,
            StairTopology::DoubleLanding,
        ];
        for height in [2.4, 2.7, 3.0, 3.3, 4.2] {
            let config = StairConfiguration {
                floor_height: height,
                ..Default::default()
            };
            for topology in topologies {
                let result = synthesize(&config, topology);
                let sum: i64 = steps(&result).iter().sum();
                assert_eq!(sum, i64::from(result.total_steps), "{topology} at {height}");
                assert!(
                    approx(result.riser * f64::from(result.total_steps), height),
                    "{topology} at {height}"
                );
            }
        }
    }

    #[test]
    fn test_manual_override_wins() {
        let config = StairConfiguration {
            manual_step_count: Some(10),
            ..Default::default()
        };

        let result = synthesize(&config, StairTopology::Straight);

        assert_eq!(result.total_steps, 10);
        assert!(approx(result.riser, 0.30));
    }

    #[test]
    fn test_zero_override_is_unset() {
        let config = StairConfiguration {
            manual_step_count: Some(0),
            ..Default::default()
        };

        assert_eq!(total_steps(&config), 20);
    }

    #[test]
    fn test_zero_height_is_degenerate_not_fatal() {
        let config = StairConfiguration {
            floor_height: 0.0,
            ..Default::default()
        };

        for topology in [
            StairTopology::Straight,
            StairTopology::LShape,
            StairTopology::Curved,
            StairTopology::DoubleLanding,
        ] {
            let result = synthesize(&config, topology);
            assert_eq!(result.total_steps, 1);
            assert_eq!(result.riser, 0.0);
            assert!(result.footprint.is_finite());
        }
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(steps_for(1.0, 0.0), 0);
    }
}
