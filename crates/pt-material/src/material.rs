//! Homogeneous material properties.

use pt_core::numeric::ensure_positive;
use pt_core::units::{kg_per_m3, j_per_kg_k, w_per_m_k, Conductivity, Density, SpecificHeat};

use crate::error::MaterialResult;

/// Density, heat capacity and conductivity of one homogeneous material.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    density: Density,
    heat_capacity: SpecificHeat,
    conductivity: Conductivity,
}

impl Material {
    pub fn new(
        density: Density,
        heat_capacity: SpecificHeat,
        conductivity: Conductivity,
    ) -> MaterialResult<Self> {
        ensure_positive(density.get::<uom::si::mass_density::kilogram_per_cubic_meter>(), "density")?;
        ensure_positive(
            heat_capacity.get::<uom::si::specific_heat_capacity::joule_per_kilogram_kelvin>(),
            "heat capacity",
        )?;
        ensure_positive(
            conductivity.get::<uom::si::thermal_conductivity::watt_per_meter_kelvin>(),
            "conductivity",
        )?;
        Ok(Self {
            density,
            heat_capacity,
            conductivity,
        })
    }

    /// Convenience constructor from raw SI values.
    pub fn from_si(
        density_kg_per_m3: f64,
        heat_capacity_j_per_kg_k: f64,
        conductivity_w_per_m_k: f64,
    ) -> MaterialResult<Self> {
        Self::new(
            kg_per_m3(density_kg_per_m3),
            j_per_kg_k(heat_capacity_j_per_kg_k),
            w_per_m_k(conductivity_w_per_m_k),
        )
    }

    pub fn density_si(&self) -> f64 {
        self.density
            .get::<uom::si::mass_density::kilogram_per_cubic_meter>()
    }

    pub fn heat_capacity_si(&self) -> f64 {
        self.heat_capacity
            .get::<uom::si::specific_heat_capacity::joule_per_kilogram_kelvin>()
    }

    pub fn conductivity_si(&self) -> f64 {
        self.conductivity
            .get::<uom::si::thermal_conductivity::watt_per_meter_kelvin>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_round_trip() {
        let m = Material::from_si(2350.0, 900.0, 1.6).unwrap();
        assert_eq!(m.density_si(), 2350.0);
        assert_eq!(m.heat_capacity_si(), 900.0);
        assert_eq!(m.conductivity_si(), 1.6);
    }

    #[test]
    fn material_rejects_non_physical() {
        assert!(Material::from_si(0.0, 900.0, 1.6).is_err());
        assert!(Material::from_si(2350.0, -1.0, 1.6).is_err());
        assert!(Material::from_si(2350.0, 900.0, f64::NAN).is_err());
    }
}
