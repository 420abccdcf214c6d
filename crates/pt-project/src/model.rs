//! Compilation of a validated project into runtime model objects.

use pt_core::units::{j_per_kg, m};
use pt_material::{Layer, Material, PhaseChange};
use pt_sim::{SimOptions, SlabModel};
use pt_weather::{AlbedoModel, Surface};

use crate::schema::{AlbedoDef, LayerDef, MaterialDef, Project};
use crate::{ProjectError, ProjectResult};

/// Turn a validated project into the driver's model and options.
pub fn compile(project: &Project) -> ProjectResult<(SlabModel, SimOptions)> {
    let layers = project
        .layers
        .iter()
        .map(compile_layer)
        .collect::<ProjectResult<Vec<_>>>()?;

    let surface = Surface {
        emissivity: project.surface.emissivity,
        albedo: match project.surface.albedo {
            AlbedoDef::Isothermal { albedo } => AlbedoModel::Isothermal { albedo },
            AlbedoDef::Thermochromic {
                albedo_cold,
                albedo_warm,
                transition_low_c,
                transition_high_c,
            } => AlbedoModel::Thermochromic {
                albedo_cold,
                albedo_warm,
                transition_low_c,
                transition_high_c,
            },
        },
    };

    let model = SlabModel::new(layers, surface).map_err(|e| ProjectError::Compile {
        what: e.to_string(),
    })?;

    let opts = SimOptions {
        steps_per_hour: project.steps_per_hour,
        under_relaxation: project.under_relaxation,
        max_coupler_passes: project.max_coupler_passes,
        surface_gradient_c_per_m: project.surface_gradient_c_per_m,
        continue_on_convergence_failure: project.continue_on_convergence_failure,
    };
    Ok((model, opts))
}

fn compile_material(def: &MaterialDef) -> ProjectResult<Material> {
    Material::from_si(
        def.density_kg_per_m3,
        def.heat_capacity_j_per_kg_k,
        def.conductivity_w_per_m_k,
    )
    .map_err(|e| ProjectError::Compile {
        what: e.to_string(),
    })
}

fn compile_layer(def: &LayerDef) -> ProjectResult<Layer> {
    let matrix = compile_material(&MaterialDef {
        density_kg_per_m3: def.density_kg_per_m3,
        heat_capacity_j_per_kg_k: def.heat_capacity_j_per_kg_k,
        conductivity_w_per_m_k: def.conductivity_w_per_m_k,
    })?;

    let phase = match &def.phase_change {
        None => None,
        Some(pcm) => Some(
            PhaseChange::new(
                pcm.fraction,
                j_per_kg(pcm.latent_heat_j_per_kg),
                pcm.solidus_c,
                pcm.liquidus_c,
                compile_material(&pcm.frozen)?,
                compile_material(&pcm.melted)?,
            )
            .map_err(|e| ProjectError::Compile {
                what: e.to_string(),
            })?,
        ),
    };

    Ok(Layer::new(
        def.name.clone(),
        m(def.thickness_m),
        def.elements,
        matrix,
        phase,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SurfaceDef;

    #[test]
    fn compiles_two_layer_project() {
        let project = Project {
            version: 1,
            name: "compile-test".to_string(),
            steps_per_hour: 12,
            under_relaxation: 0.5,
            max_coupler_passes: 50,
            continue_on_convergence_failure: true,
            surface_gradient_c_per_m: -0.1,
            surface: SurfaceDef {
                emissivity: 0.9,
                albedo: AlbedoDef::Isothermal { albedo: 0.3 },
            },
            layers: vec![
                LayerDef {
                    name: "pcm".to_string(),
                    thickness_m: 0.2,
                    elements: 8,
                    density_kg_per_m3: 2350.0,
                    heat_capacity_j_per_kg_k: 900.0,
                    conductivity_w_per_m_k: 1.6,
                    phase_change: Some(crate::schema::PhaseChangeDef {
                        fraction: 0.12,
                        latent_heat_j_per_kg: 210_000.0,
                        solidus_c: -2.0,
                        liquidus_c: 0.0,
                        frozen: MaterialDef {
                            density_kg_per_m3: 900.0,
                            heat_capacity_j_per_kg_k: 1900.0,
                            conductivity_w_per_m_k: 0.45,
                        },
                        melted: MaterialDef {
                            density_kg_per_m3: 850.0,
                            heat_capacity_j_per_kg_k: 2200.0,
                            conductivity_w_per_m_k: 0.21,
                        },
                    }),
                },
                LayerDef {
                    name: "subgrade".to_string(),
                    thickness_m: 1.5,
                    elements: 15,
                    density_kg_per_m3: 1800.0,
                    heat_capacity_j_per_kg_k: 1100.0,
                    conductivity_w_per_m_k: 1.2,
                    phase_change: None,
                },
            ],
        };

        let (model, opts) = compile(&project).unwrap();
        assert_eq!(model.mesh.len(), 23);
        assert_eq!(model.layers.len(), 2);
        assert!(model.layers[0].has_phase_change());
        assert!(!model.layers[1].has_phase_change());
        assert_eq!(opts.steps_per_hour, 12);
        assert!(opts.continue_on_convergence_failure);
    }
}
