//! Immutable mesh structure.

use pt_core::LayerId;
use std::ops::Range;

/// One spatial node of the grid. Belongs to exactly one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Owning layer.
    pub layer: LayerId,
    /// Midpoint depth below the surface (m).
    pub x_m: f64,
    /// Element width (m).
    pub dx_m: f64,
}

/// Frozen 1-D grid, ordered surface to depth.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub(crate) elements: Vec<Element>,
    /// CSR-style offsets: layer i owns elements[offsets[i]..offsets[i+1]].
    pub(crate) layer_offsets: Vec<usize>,
}

impl Mesh {
    /// Total element count.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn layer_count(&self) -> usize {
        self.layer_offsets.len() - 1
    }

    /// Index range of the elements owned by `layer`.
    pub fn layer_range(&self, layer: LayerId) -> Range<usize> {
        let i = layer.index() as usize;
        self.layer_offsets[i]..self.layer_offsets[i + 1]
    }

    /// The elements owned by `layer`, ordered surface to depth.
    pub fn layer_elements(&self, layer: LayerId) -> &[Element] {
        &self.elements[self.layer_range(layer)]
    }

    /// Midpoint depths of all elements (m), surface to depth.
    pub fn positions_m(&self) -> Vec<f64> {
        self.elements.iter().map(|e| e.x_m).collect()
    }
}
