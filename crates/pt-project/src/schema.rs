//! Project schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    /// Sub-steps per weather hour (`nt`).
    pub steps_per_hour: usize,
    /// Under-relaxation factor for the phase-change coupling, in (0, 1].
    pub under_relaxation: f64,
    #[serde(default = "default_max_coupler_passes")]
    pub max_coupler_passes: usize,
    #[serde(default)]
    pub continue_on_convergence_failure: bool,
    /// Near-surface temperature-gradient constant (degrees C per m).
    #[serde(default = "default_surface_gradient")]
    pub surface_gradient_c_per_m: f64,
    pub surface: SurfaceDef,
    pub layers: Vec<LayerDef>,
}

fn default_max_coupler_passes() -> usize {
    100
}

fn default_surface_gradient() -> f64 {
    -0.1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceDef {
    pub emissivity: f64,
    pub albedo: AlbedoDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum AlbedoDef {
    Isothermal {
        albedo: f64,
    },
    Thermochromic {
        albedo_cold: f64,
        albedo_warm: f64,
        transition_low_c: f64,
        transition_high_c: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialDef {
    pub density_kg_per_m3: f64,
    pub heat_capacity_j_per_kg_k: f64,
    pub conductivity_w_per_m_k: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayerDef {
    pub name: String,
    pub thickness_m: f64,
    pub elements: usize,
    pub density_kg_per_m3: f64,
    pub heat_capacity_j_per_kg_k: f64,
    pub conductivity_w_per_m_k: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_change: Option<PhaseChangeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseChangeDef {
    /// Volumetric PCM content of the layer, in (0, 1].
    pub fraction: f64,
    pub latent_heat_j_per_kg: f64,
    pub solidus_c: f64,
    pub liquidus_c: f64,
    pub frozen: MaterialDef,
    pub melted: MaterialDef,
}
