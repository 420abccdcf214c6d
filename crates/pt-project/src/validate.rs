//! Project validation logic.
//!
//! Everything here fails before any solve begins.

use crate::schema::{AlbedoDef, LayerDef, MaterialDef, Project};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Project has no layers")]
    NoLayers,

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn invalid(field: impl Into<String>, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    if project.steps_per_hour == 0 {
        return Err(invalid("steps_per_hour", 0.0, "must be at least 1"));
    }
    if !(project.under_relaxation > 0.0 && project.under_relaxation <= 1.0) {
        return Err(invalid(
            "under_relaxation",
            project.under_relaxation,
            "must be in (0, 1]",
        ));
    }
    if project.max_coupler_passes == 0 {
        return Err(invalid("max_coupler_passes", 0.0, "must be at least 1"));
    }
    if !project.surface_gradient_c_per_m.is_finite() {
        return Err(invalid(
            "surface_gradient_c_per_m",
            project.surface_gradient_c_per_m,
            "must be finite",
        ));
    }

    validate_surface(project)?;

    if project.layers.is_empty() {
        return Err(ValidationError::NoLayers);
    }
    for layer in &project.layers {
        validate_layer(layer)?;
    }
    Ok(())
}

fn validate_surface(project: &Project) -> Result<(), ValidationError> {
    let s = &project.surface;
    if !(s.emissivity > 0.0 && s.emissivity <= 1.0) {
        return Err(invalid("surface.emissivity", s.emissivity, "must be in (0, 1]"));
    }
    match &s.albedo {
        AlbedoDef::Isothermal { albedo } => {
            check_albedo("surface.albedo.albedo", *albedo)?;
        }
        AlbedoDef::Thermochromic {
            albedo_cold,
            albedo_warm,
            transition_low_c,
            transition_high_c,
        } => {
            check_albedo("surface.albedo.albedo_cold", *albedo_cold)?;
            check_albedo("surface.albedo.albedo_warm", *albedo_warm)?;
            if !(transition_high_c > transition_low_c) {
                return Err(invalid(
                    "surface.albedo.transition_high_c",
                    *transition_high_c,
                    "must exceed transition_low_c",
                ));
            }
        }
    }
    Ok(())
}

fn check_albedo(field: &str, value: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, value, "must be in [0, 1]"))
    }
}

fn validate_layer(layer: &LayerDef) -> Result<(), ValidationError> {
    let ctx = |field: &str| format!("layers[{}].{}", layer.name, field);

    if !(layer.thickness_m > 0.0) || !layer.thickness_m.is_finite() {
        return Err(invalid(ctx("thickness_m"), layer.thickness_m, "must be positive"));
    }
    if layer.elements == 0 {
        return Err(invalid(ctx("elements"), 0.0, "must be at least 1"));
    }
    validate_material(
        &ctx(""),
        &MaterialDef {
            density_kg_per_m3: layer.density_kg_per_m3,
            heat_capacity_j_per_kg_k: layer.heat_capacity_j_per_kg_k,
            conductivity_w_per_m_k: layer.conductivity_w_per_m_k,
        },
    )?;

    if let Some(pcm) = &layer.phase_change {
        if !(pcm.fraction > 0.0 && pcm.fraction <= 1.0) {
            return Err(invalid(
                ctx("phase_change.fraction"),
                pcm.fraction,
                "must be in (0, 1]",
            ));
        }
        if !(pcm.latent_heat_j_per_kg > 0.0) {
            return Err(invalid(
                ctx("phase_change.latent_heat_j_per_kg"),
                pcm.latent_heat_j_per_kg,
                "must be positive",
            ));
        }
        if !(pcm.liquidus_c > pcm.solidus_c) {
            return Err(invalid(
                ctx("phase_change.liquidus_c"),
                pcm.liquidus_c,
                "must exceed solidus_c",
            ));
        }
        validate_material(&ctx("phase_change.frozen."), &pcm.frozen)?;
        validate_material(&ctx("phase_change.melted."), &pcm.melted)?;
    }
    Ok(())
}

fn validate_material(prefix: &str, mat: &MaterialDef) -> Result<(), ValidationError> {
    let positive = |field: &str, v: f64| {
        if v > 0.0 && v.is_finite() {
            Ok(())
        } else {
            Err(invalid(format!("{prefix}{field}"), v, "must be positive"))
        }
    };
    positive("density_kg_per_m3", mat.density_kg_per_m3)?;
    positive("heat_capacity_j_per_kg_k", mat.heat_capacity_j_per_kg_k)?;
    positive("conductivity_w_per_m_k", mat.conductivity_w_per_m_k)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::*;

    fn valid_project() -> Project {
        Project {
            version: 1,
            name: "test".to_string(),
            steps_per_hour: 24,
            under_relaxation: 0.7,
            max_coupler_passes: 100,
            continue_on_convergence_failure: false,
            surface_gradient_c_per_m: -0.1,
            surface: SurfaceDef {
                emissivity: 0.9,
                albedo: AlbedoDef::Isothermal { albedo: 0.3 },
            },
            layers: vec![LayerDef {
                name: "slab".to_string(),
                thickness_m: 0.25,
                elements: 10,
                density_kg_per_m3: 2350.0,
                heat_capacity_j_per_kg_k: 900.0,
                conductivity_w_per_m_k: 1.6,
                phase_change: None,
            }],
        }
    }

    #[test]
    fn accepts_valid_project() {
        assert!(validate_project(&valid_project()).is_ok());
    }

    #[test]
    fn rejects_future_version() {
        let mut p = valid_project();
        p.version = 2;
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::UnsupportedVersion { version: 2 })
        ));
    }

    #[test]
    fn rejects_zero_substeps_and_bad_relaxation() {
        let mut p = valid_project();
        p.steps_per_hour = 0;
        assert!(validate_project(&p).is_err());

        let mut p = valid_project();
        p.under_relaxation = 1.2;
        assert!(validate_project(&p).is_err());
    }

    #[test]
    fn rejects_empty_layers() {
        let mut p = valid_project();
        p.layers.clear();
        assert!(matches!(validate_project(&p), Err(ValidationError::NoLayers)));
    }

    #[test]
    fn rejects_bad_layer_geometry() {
        let mut p = valid_project();
        p.layers[0].thickness_m = -0.1;
        assert!(validate_project(&p).is_err());

        let mut p = valid_project();
        p.layers[0].elements = 0;
        assert!(validate_project(&p).is_err());
    }

    #[test]
    fn rejects_inverted_freeze_band() {
        let mut p = valid_project();
        let mat = MaterialDef {
            density_kg_per_m3: 900.0,
            heat_capacity_j_per_kg_k: 1900.0,
            conductivity_w_per_m_k: 0.45,
        };
        p.layers[0].phase_change = Some(PhaseChangeDef {
            fraction: 0.1,
            latent_heat_j_per_kg: 210_000.0,
            solidus_c: 0.0,
            liquidus_c: -2.0,
            frozen: mat.clone(),
            melted: mat,
        });
        match validate_project(&p) {
            Err(ValidationError::InvalidValue { field, .. }) => {
                assert!(field.contains("liquidus_c"));
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn rejects_thermochromic_with_inverted_window() {
        let mut p = valid_project();
        p.surface.albedo = AlbedoDef::Thermochromic {
            albedo_cold: 0.15,
            albedo_warm: 0.45,
            transition_low_c: 15.0,
            transition_high_c: 5.0,
        };
        assert!(validate_project(&p).is_err());
    }
}
