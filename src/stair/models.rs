//! Data types for staircase synthesis.

use serde::{Deserialize, Serialize};

/// Default number of winders in the curved turn.
pub const DEFAULT_WINDER_COUNT: u32 = 4;

/// Plan shape of the staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StairTopology {
    Straight,
    LShape,
    UShape,
    Curved,
    DoubleLanding,
}

impl StairTopology {
    /// Topologies whose plan folds back on itself, occupying two stair widths.
    pub fn folds_back(self) -> bool {
        matches!(self, Self::UShape | Self::Curved)
    }
}

impl std::fmt::Display for StairTopology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Straight => "Straight",
            Self::LShape => "L-Shape",
            Self::UShape => "U-Shape",
            Self::Curved => "Curved",
            Self::DoubleLanding => "Double Landing",
        };
        f.write_str(name)
    }
}

/// Architectural inputs for a staircase. All lengths in meters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StairConfiguration {
    /// Floor-to-floor height
    pub floor_height: f64,
    /// Height of the first landing above floor datum
    pub landing_height: f64,
    /// Height of the second landing (double landing only)
    pub landing2_height: f64,
    pub stair_width: f64,
    pub tread_depth: f64,
    pub landing_width: f64,
    pub landing_length: f64,
    pub landing2_width: f64,
    pub landing2_length: f64,
    /// Winders in the curved turn; 0 means the default of 4
    pub winder_count: u32,
    /// Manual total step count; `Some(0)` is treated as unset
    pub manual_step_count: Option<u32>,
    /// Manual step count for the middle flight of a double landing stair
    pub manual_flight2_steps: Option<u32>,
}

impl Default for StairConfiguration {
    fn default() -> Self {
        Self {
            floor_height: 3.0,
            landing_height: 1.5,
            landing2_height: 2.0,
            stair_width: 0.90,
            tread_depth: 0.25,
            landing_width: 0.90,
            landing_length: 0.90,
            landing2_width: 0.90,
            landing2_length: 0.90,
            winder_count: DEFAULT_WINDER_COUNT,
            manual_step_count: None,
            manual_flight2_steps: None,
        }
    }
}

impl StairConfiguration {
    /// Manual total step override, if one is in effect.
    pub fn step_override(&self) -> Option<u32> {
        self.manual_step_count.filter(|&n| n > 0)
    }

    /// Winders used by the curved turn.
    pub fn turn_steps(&self) -> u32 {
        if self.winder_count == 0 {
            DEFAULT_WINDER_COUNT
        } else {
            self.winder_count
        }
    }
}

/// Editable numeric field of a [`StairConfiguration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    FloorHeight,
    LandingHeight,
    Landing2Height,
    StairWidth,
    TreadDepth,
    LandingWidth,
    LandingLength,
    Landing2Width,
    Landing2Length,
    WinderCount,
}

impl ConfigField {
    /// Height edits invalidate a manual middle-flight step count.
    pub fn is_height(self) -> bool {
        matches!(
            self,
            Self::FloorHeight | Self::LandingHeight | Self::Landing2Height
        )
    }
}

/// One element of the synthesized stair layout.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Straight run of steps
    Flight {
        label: String,
        step_count: i64,
        /// Horizontal run in meters
        run: f64,
    },
    /// Flat rest platform
    Landing {
        label: String,
        /// Absolute height above floor datum in meters
        level_height: f64,
        width: f64,
        length: f64,
    },
    /// Winder turn that gains height while running horizontally
    Curve {
        label: String,
        step_count: i64,
        /// Walk-line run in meters
        run: f64,
        height_gain: f64,
    },
}

impl Segment {
    /// Steps carried by this segment (landings carry none).
    pub fn step_count(&self) -> i64 {
        match self {
            Self::Flight { step_count, .. } | Self::Curve { step_count, .. } => *step_count,
            Self::Landing { .. } => 0,
        }
    }

    pub fn run(&self) -> f64 {
        match self {
            Self::Flight { run, .. } | Self::Curve { run, .. } => *run,
            Self::Landing { length, .. } => *length,
        }
    }
}

/// Derived stair layout. Recomputed on every configuration change.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SynthesisResult {
    pub total_steps: u32,
    /// Riser height in meters
    pub riser: f64,
    pub segments: Vec<Segment>,
    /// Approximate horizontal footprint in meters
    pub footprint: f64,
    pub warnings: Vec<String>,
}

impl SynthesisResult {
    /// Segments that carry steps, in walking order.
    pub fn stepped_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|s| !matches!(s, Segment::Landing { .. }))
    }

    pub fn first_flight_steps(&self) -> Option<i64> {
        self.stepped_segments().next().map(Segment::step_count)
    }

    pub fn last_flight_steps(&self) -> Option<i64> {
        self.stepped_segments().last().map(Segment::step_count)
    }
}
