//! Surface-flux correlations.
//!
//! Stateless algebra evaluated once per sub-step from the current weather
//! record and surface temperature. Sign convention: positive flux heats the
//! surface (W/m^2).

use pt_core::units::constants::{kelvin_from_celsius, SIGMA_W_PER_M2_K4};

use crate::record::WeatherRecord;

/// McAdams forced-convection coefficients, h = A + B * wind (W/m^2/K).
const MCADAMS_A: f64 = 5.6;
const MCADAMS_B: f64 = 4.0;

/// Idso clear-sky emissivity: eps = A + B * e_a * exp(C / Ta).
const IDSO_A: f64 = 0.70;
const IDSO_B: f64 = 5.95e-7;
const IDSO_C: f64 = 1500.0;

/// Absorbed-solar input for the hour: measured global horizontal irradiance,
/// held constant across the hour's sub-steps. Albedo is applied by the caller.
pub fn solar(weather: &WeatherRecord) -> f64 {
    weather.solar_w_per_m2
}

/// Net incident longwave flux at the surface.
///
/// Sky emissivity is the Idso clear-sky value filled linearly toward a black
/// sky with cloud cover.
pub fn longwave(weather: &WeatherRecord, t_surface_c: f64, emissivity: f64) -> f64 {
    let ta = kelvin_from_celsius(weather.air_temp_c);
    let ts = kelvin_from_celsius(t_surface_c);
    let e_a = vapor_pressure_hpa(weather.air_temp_c, weather.rel_humidity_pct);
    let eps_clear = IDSO_A + IDSO_B * e_a * (IDSO_C / ta).exp();
    let eps_sky = eps_clear + (1.0 - eps_clear) * weather.cloud_cover;
    emissivity * SIGMA_W_PER_M2_K4 * (eps_sky * ta.powi(4) - ts.powi(4))
}

/// Convective exchange with the air, h(wind) * (Ta - Ts).
pub fn convection(weather: &WeatherRecord, t_surface_c: f64) -> f64 {
    let h = MCADAMS_A + MCADAMS_B * weather.wind_mps;
    h * (weather.air_temp_c - t_surface_c)
}

/// Ambient vapor pressure (hPa) from the Magnus saturation curve.
fn vapor_pressure_hpa(t_c: f64, rel_humidity_pct: f64) -> f64 {
    let e_sat = 6.112 * (17.67 * t_c / (t_c + 243.5)).exp();
    (rel_humidity_pct / 100.0) * e_sat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Timestamp;

    fn record(air_temp_c: f64, wind_mps: f64, cloud_cover: f64) -> WeatherRecord {
        WeatherRecord {
            timestamp: Timestamp {
                year: 2023,
                month: 1,
                day: 15,
                hour: 12,
            },
            air_temp_c,
            wind_mps,
            rel_humidity_pct: 60.0,
            cloud_cover,
            solar_w_per_m2: 450.0,
        }
    }

    #[test]
    fn solar_holds_measured_irradiance() {
        assert_eq!(solar(&record(10.0, 2.0, 0.0)), 450.0);
    }

    #[test]
    fn convection_sign_follows_air_surface_difference() {
        let w = record(10.0, 2.0, 0.0);
        assert!(convection(&w, 0.0) > 0.0);
        assert!(convection(&w, 20.0) < 0.0);
        assert_eq!(convection(&w, 10.0), 0.0);
    }

    #[test]
    fn convection_grows_with_wind() {
        let calm = record(10.0, 0.0, 0.0);
        let windy = record(10.0, 8.0, 0.0);
        assert!(convection(&windy, 0.0) > convection(&calm, 0.0));
    }

    #[test]
    fn longwave_cools_a_hot_surface_under_clear_sky() {
        let w = record(0.0, 2.0, 0.0);
        assert!(longwave(&w, 30.0, 0.9) < 0.0);
    }

    #[test]
    fn cloud_cover_raises_incident_longwave() {
        let clear = record(0.0, 2.0, 0.0);
        let overcast = record(0.0, 2.0, 1.0);
        assert!(longwave(&overcast, 0.0, 0.9) > longwave(&clear, 0.0, 0.9));
    }
}
