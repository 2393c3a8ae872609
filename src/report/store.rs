//! In-memory list of saved stair designs.

use std::ops::Add;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::stair::designer::StairDesign;
use crate::stair::models::{StairConfiguration, StairTopology, SynthesisResult};

/// Material takeoff for a stair.
///
/// Nothing computes these yet; saved designs carry zeros so report totals
/// have a stable shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct MaterialQuantities {
    /// Concrete volume (m³)
    pub concrete_vol: f64,
    /// Reinforcement steel (kg)
    pub steel_weight: f64,
    /// Formwork area (m²)
    pub shuttering_area: f64,
    /// Finishing area (m²)
    pub finishing_area: f64,
    /// Handrail length (m)
    pub handrail_len: f64,
}

impl Add for MaterialQuantities {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            concrete_vol: self.concrete_vol + other.concrete_vol,
            steel_weight: self.steel_weight + other.steel_weight,
            shuttering_area: self.shuttering_area + other.shuttering_area,
            finishing_area: self.finishing_area + other.finishing_area,
            handrail_len: self.handrail_len + other.handrail_len,
        }
    }
}

/// Immutable snapshot of a committed stair design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedStairDesign {
    pub id: Uuid,
    pub name: String,
    pub topology: StairTopology,
    pub config: StairConfiguration,
    pub result: SynthesisResult,
    pub quantities: MaterialQuantities,
    /// SHA256 of the topology and configuration
    pub fingerprint: String,
    pub saved_at: DateTime<Utc>,
}

/// Report-level totals over all saved designs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTotals {
    pub design_count: usize,
    pub total_steps: u64,
    pub quantities: MaterialQuantities,
}

/// Compute the design fingerprint from topology and configuration.
fn fingerprint(topology: StairTopology, config: &StairConfiguration) -> String {
    let input_json = serde_json::to_string(&(topology, config)).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(input_json.as_bytes());
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// Ordered list of saved designs, shared across handlers.
#[derive(Clone, Default)]
pub struct StairReport {
    designs: Arc<RwLock<Vec<SavedStairDesign>>>,
}

impl StairReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a design, naming it after its position in the report.
    pub async fn save(&self, design: StairDesign) -> SavedStairDesign {
        let mut designs = self.designs.write().await;

        let saved = SavedStairDesign {
            id: Uuid::new_v4(),
            name: format!("Staircase #{}", designs.len() + 1),
            fingerprint: fingerprint(design.topology, &design.config),
            topology: design.topology,
            config: design.config,
            result: design.result,
            quantities: MaterialQuantities::default(),
            saved_at: Utc::now(),
        };
        designs.push(saved.clone());

        tracing::info!(id = %saved.id, name = %saved.name, topology = %saved.topology, "stair design saved");
        saved
    }

    /// Saved designs in save order.
    pub async fn list(&self) -> Vec<SavedStairDesign> {
        self.designs.read().await.clone()
    }

    /// Remove a design by id. Returns `false` when no design has that id.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut designs = self.designs.write().await;
        let before = designs.len();
        designs.retain(|d| d.id != id);
        let removed = designs.len() != before;

        if removed {
            tracing::info!(%id, "stair design removed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.designs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.designs.read().await.is_empty()
    }

    /// Sum steps and material quantities over every saved design.
    pub async fn totals(&self) -> ReportTotals {
        let designs = self.designs.read().await;
        ReportTotals {
            design_count: designs.len(),
            total_steps: designs
                .iter()
                .map(|d| u64::from(d.result.total_steps))
                .sum(),
            quantities: designs
                .iter()
                .map(|d| d.quantities)
                .fold(MaterialQuantities::default(), Add::add),
        }
    }
}
