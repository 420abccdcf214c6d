//! Surface descriptor: emissivity and albedo behavior.

/// Albedo behavior of the top surface, selected once per configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlbedoModel {
    /// Constant albedo.
    Isothermal { albedo: f64 },
    /// Thermochromic coating: dark (absorbing) when cold, light when warm,
    /// ramping linearly across the transition window.
    Thermochromic {
        albedo_cold: f64,
        albedo_warm: f64,
        transition_low_c: f64,
        transition_high_c: f64,
    },
}

/// Radiative description of the top surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub emissivity: f64,
    pub albedo: AlbedoModel,
}

impl Surface {
    /// Albedo at the current surface temperature.
    pub fn albedo(&self, t_surface_c: f64) -> f64 {
        match self.albedo {
            AlbedoModel::Isothermal { albedo } => albedo,
            AlbedoModel::Thermochromic {
                albedo_cold,
                albedo_warm,
                transition_low_c,
                transition_high_c,
            } => {
                let span = transition_high_c - transition_low_c;
                let w = ((t_surface_c - transition_low_c) / span).clamp(0.0, 1.0);
                albedo_cold + (albedo_warm - albedo_cold) * w
            }
        }
    }
}
