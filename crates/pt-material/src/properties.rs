//! Per-element property assignment over a mesh.

use pt_mesh::Mesh;

use crate::error::{MaterialError, MaterialResult};
use crate::layer::Layer;

/// Diffusivity and enthalpy-release fields aligned with the mesh elements.
#[derive(Debug, Clone)]
pub struct ElementProperties {
    /// Thermal diffusivity per element (m^2/s).
    pub alpha: Vec<f64>,
    /// Temperature equivalent of full phase change per element (K).
    pub delta_h: Vec<f64>,
}

fn check_alignment(mesh: &Mesh, layers: &[Layer], field: &[f64], name: &'static str) -> MaterialResult<()> {
    if layers.len() != mesh.layer_count() {
        return Err(MaterialError::LayerCountMismatch {
            mesh: mesh.layer_count(),
            layers: layers.len(),
        });
    }
    if field.len() != mesh.len() {
        return Err(MaterialError::FieldLengthMismatch {
            field: name,
            expected: mesh.len(),
            got: field.len(),
        });
    }
    Ok(())
}

/// Recompute per-element diffusivity and enthalpy-release terms from the
/// current liquid-fraction field.
///
/// Pure function of `fl`; call again whenever an accepted liquid-fraction
/// field changes, since stale diffusivity feeds stale matrix coefficients.
pub fn update_element_properties(
    mesh: &Mesh,
    layers: &[Layer],
    fl: &[f64],
) -> MaterialResult<ElementProperties> {
    check_alignment(mesh, layers, fl, "liquid fraction")?;
    let mut alpha = Vec::with_capacity(mesh.len());
    let mut delta_h = Vec::with_capacity(mesh.len());
    for (elem, &f) in mesh.elements().iter().zip(fl.iter()) {
        let props = layers[elem.layer.index() as usize].effective(f);
        alpha.push(props.alpha_m2_per_s);
        delta_h.push(props.delta_h_k);
    }
    Ok(ElementProperties { alpha, delta_h })
}

/// Equilibrium liquid fraction at each element for a temperature field.
pub fn equilibrium_fractions(
    mesh: &Mesh,
    layers: &[Layer],
    t_c: &[f64],
) -> MaterialResult<Vec<f64>> {
    check_alignment(mesh, layers, t_c, "temperature")?;
    Ok(mesh
        .elements()
        .iter()
        .zip(t_c.iter())
        .map(|(elem, &t)| layers[elem.layer.index() as usize].equilibrium_fraction(t))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::layer::PhaseChange;
    use pt_core::units::{j_per_kg, m};
    use pt_mesh::MeshBuilder;

    fn two_layer_setup() -> (Mesh, Vec<Layer>) {
        let mut builder = MeshBuilder::new();
        builder.add_layer(m(0.2), 2);
        builder.add_layer(m(0.4), 2);
        let mesh = builder.build().unwrap();

        let matrix = Material::from_si(2350.0, 900.0, 1.6).unwrap();
        let frozen = Material::from_si(900.0, 1900.0, 0.45).unwrap();
        let melted = Material::from_si(850.0, 2200.0, 0.21).unwrap();
        let phase =
            PhaseChange::new(0.12, j_per_kg(210_000.0), -2.0, 0.0, frozen, melted).unwrap();
        let top = Layer::new("pcm", m(0.2), 2, matrix, Some(phase));

        let base_matrix = Material::from_si(1800.0, 1100.0, 1.2).unwrap();
        let base = Layer::new("subgrade", m(0.4), 2, base_matrix, None);
        (mesh, vec![top, base])
    }

    #[test]
    fn properties_follow_element_layers() {
        let (mesh, layers) = two_layer_setup();
        let fl = vec![0.0, 1.0, 1.0, 1.0];
        let props = update_element_properties(&mesh, &layers, &fl).unwrap();
        assert_eq!(props.alpha.len(), 4);
        // PCM elements carry a latent term, subgrade elements do not.
        assert!(props.delta_h[0] > 0.0);
        assert!(props.delta_h[1] > 0.0);
        assert_eq!(props.delta_h[2], 0.0);
        assert_eq!(props.delta_h[3], 0.0);
        // Frozen vs melted PCM changes diffusivity.
        assert!(props.alpha[0] != props.alpha[1]);
    }

    #[test]
    fn equilibrium_field_mixes_layers() {
        let (mesh, layers) = two_layer_setup();
        let t = vec![-5.0, -1.0, -5.0, 10.0];
        let fl = equilibrium_fractions(&mesh, &layers, &t).unwrap();
        assert_eq!(fl[0], 0.0);
        assert!((fl[1] - 0.5).abs() < 1e-12);
        // No-PCM layer pins to 1 regardless of temperature.
        assert_eq!(fl[2], 1.0);
        assert_eq!(fl[3], 1.0);
    }

    #[test]
    fn alignment_errors() {
        let (mesh, layers) = two_layer_setup();
        let short = vec![0.0; 3];
        assert!(matches!(
            update_element_properties(&mesh, &layers, &short),
            Err(MaterialError::FieldLengthMismatch { .. })
        ));
        assert!(matches!(
            update_element_properties(&mesh, &layers[..1], &[0.0; 4]),
            Err(MaterialError::LayerCountMismatch { .. })
        ));
    }
}
