//! Incremental mesh builder.

use pt_core::units::Length;
use pt_core::LayerId;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Element, Mesh};

/// Builder for constructing a mesh layer by layer.
///
/// Use `add_layer` to append layer segments from the surface downward,
/// then call `build()` to validate and freeze them into an immutable `Mesh`.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    segments: Vec<Segment>,
}

#[derive(Debug)]
struct Segment {
    thickness_m: f64,
    elements: usize,
}

impl MeshBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer segment below the previously added ones and return its ID.
    pub fn add_layer(&mut self, thickness: Length, elements: usize) -> LayerId {
        let id = LayerId::from_index(self.segments.len() as u32);
        self.segments.push(Segment {
            thickness_m: thickness.get::<uom::si::length::meter>(),
            elements,
        });
        id
    }

    /// Build and validate the mesh, returning an immutable `Mesh`.
    ///
    /// Each segment is partitioned into `elements` equal widths; element
    /// positions are the midpoints of those widths, measured from the surface.
    pub fn build(self) -> MeshResult<Mesh> {
        if self.segments.is_empty() {
            return Err(MeshError::NoLayers);
        }
        for (i, seg) in self.segments.iter().enumerate() {
            if seg.elements == 0 {
                return Err(MeshError::ZeroElements { layer: i });
            }
            if !(seg.thickness_m > 0.0) || !seg.thickness_m.is_finite() {
                return Err(MeshError::NonPositiveThickness {
                    layer: i,
                    thickness_m: seg.thickness_m,
                });
            }
        }

        let total: usize = self.segments.iter().map(|s| s.elements).sum();
        let mut elements = Vec::with_capacity(total);
        let mut layer_offsets = Vec::with_capacity(self.segments.len() + 1);
        layer_offsets.push(0);

        let mut depth = 0.0;
        for (i, seg) in self.segments.iter().enumerate() {
            let layer = LayerId::from_index(i as u32);
            let dx = seg.thickness_m / seg.elements as f64;
            for k in 0..seg.elements {
                elements.push(Element {
                    layer,
                    x_m: depth + (k as f64 + 0.5) * dx,
                    dx_m: dx,
                });
            }
            depth += seg.thickness_m;
            layer_offsets.push(elements.len());
        }

        Ok(Mesh {
            elements,
            layer_offsets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_core::units::m;

    #[test]
    fn builder_single_layer() {
        let mut builder = MeshBuilder::new();
        let l0 = builder.add_layer(m(1.0), 4);
        let mesh = builder.build().unwrap();

        assert_eq!(mesh.len(), 4);
        assert_eq!(mesh.layer_count(), 1);
        let e = mesh.elements();
        for el in e {
            assert!((el.dx_m - 0.25).abs() < 1e-12);
        }
        assert!((e[0].x_m - 0.125).abs() < 1e-12);
        assert!((e[3].x_m - 0.875).abs() < 1e-12);
        assert_eq!(mesh.layer_range(l0), 0..4);
    }

    #[test]
    fn builder_stacked_layers() {
        let mut builder = MeshBuilder::new();
        let top = builder.add_layer(m(0.2), 2);
        let base = builder.add_layer(m(0.6), 3);
        let mesh = builder.build().unwrap();

        assert_eq!(mesh.len(), 5);
        assert_eq!(mesh.layer_elements(top).len(), 2);
        assert_eq!(mesh.layer_elements(base).len(), 3);

        // Second layer starts where the first ends.
        let e = mesh.elements();
        assert!((e[1].x_m - 0.15).abs() < 1e-12);
        assert!((e[2].x_m - 0.3).abs() < 1e-12);
        assert!((e[2].dx_m - 0.2).abs() < 1e-12);

        // Positions are strictly increasing toward depth.
        for w in e.windows(2) {
            assert!(w[1].x_m > w[0].x_m);
        }
    }

    #[test]
    fn builder_rejects_zero_elements() {
        let mut builder = MeshBuilder::new();
        builder.add_layer(m(0.5), 0);
        match builder.build() {
            Err(MeshError::ZeroElements { layer }) => assert_eq!(layer, 0),
            other => panic!("expected ZeroElements, got {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_non_positive_thickness() {
        let mut builder = MeshBuilder::new();
        builder.add_layer(m(0.3), 3);
        builder.add_layer(m(-0.1), 2);
        match builder.build() {
            Err(MeshError::NonPositiveThickness { layer, .. }) => assert_eq!(layer, 1),
            other => panic!("expected NonPositiveThickness, got {other:?}"),
        }
    }

    #[test]
    fn builder_rejects_empty() {
        assert!(matches!(
            MeshBuilder::new().build(),
            Err(MeshError::NoLayers)
        ));
    }
}
