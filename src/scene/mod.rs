//! Scene geometry.
//!
//! This module provides:
//! - [`PyramidMesh`] - square pyramid as a filled triangle list plus an edge line list
//! - [`Vertex`] - GPU vertex layout shared by both
//! - [`Palette`] - fill and wire colors

pub mod mesh;

pub use mesh::{PyramidMesh, Vertex};

/// Colors for the pyramid faces and its wireframe overlay, as linear RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub fill: [f32; 3],
    pub wire: [f32; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fill: [1.0, 0.0, 0.0],
            wire: [0.0, 0.0, 0.0],
        }
    }
}
