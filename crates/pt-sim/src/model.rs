//! Runtime model: mesh plus the material and surface descriptions.

use pt_material::Layer;
use pt_mesh::{Mesh, MeshBuilder};
use pt_weather::Surface;

use crate::error::SimResult;

/// Everything the driver needs that does not change during a run.
#[derive(Debug, Clone)]
pub struct SlabModel {
    pub mesh: Mesh,
    pub layers: Vec<Layer>,
    pub surface: Surface,
}

impl SlabModel {
    /// Build the mesh from the ordered layer stack and freeze the model.
    pub fn new(layers: Vec<Layer>, surface: Surface) -> SimResult<Self> {
        let mut builder = MeshBuilder::new();
        for layer in &layers {
            builder.add_layer(layer.thickness(), layer.element_count());
        }
        let mesh = builder.build()?;
        Ok(Self {
            mesh,
            layers,
            surface,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_material::Material;
    use pt_core::units::m;
    use pt_weather::AlbedoModel;

    #[test]
    fn model_builds_mesh_from_layers() {
        let matrix = Material::from_si(2350.0, 900.0, 1.6).unwrap();
        let layers = vec![
            Layer::new("top", m(0.2), 4, matrix, None),
            Layer::new("base", m(0.8), 8, matrix, None),
        ];
        let surface = Surface {
            emissivity: 0.9,
            albedo: AlbedoModel::Isothermal { albedo: 0.3 },
        };
        let model = SlabModel::new(layers, surface).unwrap();
        assert_eq!(model.mesh.len(), 12);
        assert_eq!(model.mesh.layer_count(), 2);
    }

    #[test]
    fn model_rejects_bad_layer_geometry() {
        let matrix = Material::from_si(2350.0, 900.0, 1.6).unwrap();
        let layers = vec![Layer::new("top", m(0.2), 0, matrix, None)];
        let surface = Surface {
            emissivity: 0.9,
            albedo: AlbedoModel::Isothermal { albedo: 0.3 },
        };
        assert!(SlabModel::new(layers, surface).is_err());
    }
}
