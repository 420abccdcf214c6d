//! Layer model: solid matrix plus optional embedded phase-change material.

use pt_core::numeric::ensure_positive;
use pt_core::units::{Length, LatentHeat};

use crate::error::{MaterialError, MaterialResult};
use crate::material::Material;

/// Embedded PCM description for one layer.
#[derive(Debug, Clone)]
pub struct PhaseChange {
    /// Volumetric PCM content of the layer, in (0, 1].
    fraction: f64,
    latent_heat: LatentHeat,
    solidus_c: f64,
    liquidus_c: f64,
    frozen: Material,
    melted: Material,
}

impl PhaseChange {
    pub fn new(
        fraction: f64,
        latent_heat: LatentHeat,
        solidus_c: f64,
        liquidus_c: f64,
        frozen: Material,
        melted: Material,
    ) -> MaterialResult<Self> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(MaterialError::NonPhysical {
                what: "PCM fraction must be in (0, 1]",
            });
        }
        ensure_positive(
            latent_heat.get::<uom::si::available_energy::joule_per_kilogram>(),
            "latent heat",
        )?;
        if !(liquidus_c > solidus_c) {
            return Err(MaterialError::NonPhysical {
                what: "liquidus must exceed solidus",
            });
        }
        Ok(Self {
            fraction,
            latent_heat,
            solidus_c,
            liquidus_c,
            frozen,
            melted,
        })
    }

    pub fn solidus_c(&self) -> f64 {
        self.solidus_c
    }

    pub fn liquidus_c(&self) -> f64 {
        self.liquidus_c
    }

    fn latent_heat_si(&self) -> f64 {
        self.latent_heat
            .get::<uom::si::available_energy::joule_per_kilogram>()
    }

    /// PCM state properties at liquid fraction `fl`: linear frozen/melted blend.
    fn state(&self, fl: f64) -> (f64, f64, f64) {
        let rho = self.frozen.density_si() * (1.0 - fl) + self.melted.density_si() * fl;
        let c = self.frozen.heat_capacity_si() * (1.0 - fl) + self.melted.heat_capacity_si() * fl;
        let k = self.frozen.conductivity_si() * (1.0 - fl) + self.melted.conductivity_si() * fl;
        (rho, c, k)
    }
}

/// Effective per-element properties at a given liquid fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveProps {
    pub rho_kg_per_m3: f64,
    pub c_j_per_kg_k: f64,
    pub k_w_per_m_k: f64,
    /// Thermal diffusivity k / (rho * c) (m^2/s).
    pub alpha_m2_per_s: f64,
    /// Temperature equivalent of full phase change (K per unit liquid fraction).
    pub delta_h_k: f64,
}

/// One material slab segment of the cross-section.
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    thickness: Length,
    element_count: usize,
    matrix: Material,
    phase: Option<PhaseChange>,
}

impl Layer {
    pub fn new(
        name: impl Into<String>,
        thickness: Length,
        element_count: usize,
        matrix: Material,
        phase: Option<PhaseChange>,
    ) -> Self {
        Self {
            name: name.into(),
            thickness,
            element_count,
            matrix,
            phase,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thickness(&self) -> Length {
        self.thickness
    }

    pub fn thickness_si(&self) -> f64 {
        self.thickness.get::<uom::si::length::meter>()
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn matrix(&self) -> &Material {
        &self.matrix
    }

    pub fn has_phase_change(&self) -> bool {
        self.phase.is_some()
    }

    pub fn phase(&self) -> Option<&PhaseChange> {
        self.phase.as_ref()
    }

    /// Equilibrium liquid fraction at temperature `t_c`.
    ///
    /// Pinned to 0 below the freeze/thaw band, 1 above it, linear within.
    /// A layer without PCM reports 1 everywhere.
    pub fn equilibrium_fraction(&self, t_c: f64) -> f64 {
        match &self.phase {
            None => 1.0,
            Some(p) => {
                if t_c <= p.solidus_c {
                    0.0
                } else if t_c >= p.liquidus_c {
                    1.0
                } else {
                    (t_c - p.solidus_c) / (p.liquidus_c - p.solidus_c)
                }
            }
        }
    }

    /// Effective conductivity, heat capacity, density, diffusivity and
    /// enthalpy-release term at liquid fraction `fl`.
    pub fn effective(&self, fl: f64) -> EffectiveProps {
        let fl = fl.clamp(0.0, 1.0);
        match &self.phase {
            None => {
                let rho = self.matrix.density_si();
                let c = self.matrix.heat_capacity_si();
                let k = self.matrix.conductivity_si();
                EffectiveProps {
                    rho_kg_per_m3: rho,
                    c_j_per_kg_k: c,
                    k_w_per_m_k: k,
                    alpha_m2_per_s: k / (rho * c),
                    delta_h_k: 0.0,
                }
            }
            Some(p) => {
                let phi = p.fraction;
                let (rho_pcm, c_pcm, k_pcm) = p.state(fl);
                let rho = (1.0 - phi) * self.matrix.density_si() + phi * rho_pcm;
                let c = (1.0 - phi) * self.matrix.heat_capacity_si() + phi * c_pcm;
                let k = (1.0 - phi) * self.matrix.conductivity_si() + phi * k_pcm;
                EffectiveProps {
                    rho_kg_per_m3: rho,
                    c_j_per_kg_k: c,
                    k_w_per_m_k: k,
                    alpha_m2_per_s: k / (rho * c),
                    delta_h_k: phi * rho_pcm * p.latent_heat_si() / (rho * c),
                }
            }
        }
    }
}
