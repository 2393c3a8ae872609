//! Request payloads for the stair design API.

use serde::Deserialize;

use super::models::{ConfigField, StairConfiguration, StairTopology};

/// Current design state sent by the wizard with every edit.
#[derive(Debug, Deserialize)]
pub struct DesignRequest {
    pub topology: StairTopology,
    #[serde(default)]
    pub config: StairConfiguration,
}

#[derive(Debug, Deserialize)]
pub struct DefaultsQuery {
    pub topology: StairTopology,
    pub stair_width: f64,
}

#[derive(Debug, Deserialize)]
pub struct SelectTopologyRequest {
    #[serde(flatten)]
    pub design: DesignRequest,
    pub new_topology: StairTopology,
}

/// Raw field edit; `value` is the text typed into the form.
#[derive(Debug, Deserialize)]
pub struct EditFieldRequest {
    #[serde(flatten)]
    pub design: DesignRequest,
    pub field: ConfigField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    #[serde(flatten)]
    pub design: DesignRequest,
    pub delta: i64,
}
