// pt-core/src/units.rs

use uom::si::f64::{
    AvailableEnergy as UomAvailableEnergy, Length as UomLength, MassDensity as UomMassDensity,
    SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermalConductivity as UomThermalConductivity,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type SpecificHeat = UomSpecificHeatCapacity;
pub type Conductivity = UomThermalConductivity;
pub type LatentHeat = UomAvailableEnergy;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecificHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecificHeat::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> Conductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    Conductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn j_per_kg(v: f64) -> LatentHeat {
    use uom::si::available_energy::joule_per_kilogram;
    LatentHeat::new::<joule_per_kilogram>(v)
}

pub mod constants {
    /// Stefan-Boltzmann constant (W/m^2/K^4)
    pub const SIGMA_W_PER_M2_K4: f64 = 5.670_374_419e-8;

    /// 0 degrees Celsius in Kelvin
    pub const T0_C_IN_K: f64 = 273.15;

    #[inline]
    pub fn kelvin_from_celsius(t_c: f64) -> f64 {
        t_c + T0_C_IN_K
    }
}
