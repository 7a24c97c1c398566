//! The logical cloth grid: dimensions, index mapping, and the
//! procedural rest pose, UVs, and triangulation derived from them.
//!
//! A `ClothGrid` is immutable for the lifetime of a topology. Everything
//! the solver and renderer need about the grid's shape — rest positions,
//! texture coordinates, triangle indices, anchor indices — is produced
//! here, deterministically, from (width, height, spacing).

use glam::{Vec2, Vec3};

use drapa_types::{DrapaError, DrapaResult};

/// Logical width × height particle grid with uniform spacing.
///
/// `index(x, y) = y * width + x`, row-major. Row 0 is the top row of the
/// cloth (positive Y in the rest pose); the grid is centered on the
/// origin in the XY plane with all rest Z = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothGrid {
    width: usize,
    height: usize,
    spacing: f32,
}

impl ClothGrid {
    /// Creates a grid, rejecting out-of-range parameters.
    ///
    /// Width and height must be at least 1 and spacing strictly positive;
    /// anything else is a construction precondition violation and fails
    /// fast rather than producing a silently broken grid.
    pub fn new(width: usize, height: usize, spacing: f32) -> DrapaResult<Self> {
        if width < 1 || height < 1 {
            return Err(DrapaError::InvalidGrid(format!(
                "dimensions must be >= 1, got {width}x{height}"
            )));
        }
        if !(spacing > 0.0) || !spacing.is_finite() {
            return Err(DrapaError::InvalidGrid(format!(
                "spacing must be a positive finite number, got {spacing}"
            )));
        }
        Ok(Self {
            width,
            height,
            spacing,
        })
    }

    /// Number of particles along X.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of particles along Y.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rest distance between adjacent particles.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Total particle count (`width * height`).
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.width * self.height
    }

    /// Row-major index of the particle at grid coordinate `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Index of the top-left corner particle — pinned by default.
    #[inline]
    pub fn left_anchor(&self) -> usize {
        self.index(0, 0)
    }

    /// Index of the top-right corner particle — pinned by default.
    #[inline]
    pub fn right_anchor(&self) -> usize {
        self.index(self.width - 1, 0)
    }

    /// The default pinned set: the two top-row corners.
    ///
    /// For a single-column grid both anchors collapse to index 0.
    pub fn default_pins(&self) -> [usize; 2] {
        [self.left_anchor(), self.right_anchor()]
    }

    /// Rest-pose positions: a planar grid centered on the origin.
    ///
    /// Grid row 0 maps to the topmost (largest Y) row so the default
    /// pins hang the cloth from its top corners.
    pub fn rest_positions(&self) -> Vec<Vec3> {
        let half_w = (self.width - 1) as f32 / 2.0;
        let half_h = (self.height - 1) as f32 / 2.0;

        let mut positions = Vec::with_capacity(self.particle_count());
        for y in 0..self.height {
            for x in 0..self.width {
                positions.push(Vec3::new(
                    (x as f32 - half_w) * self.spacing,
                    (half_h - y as f32) * self.spacing,
                    0.0,
                ));
            }
        }
        positions
    }

    /// Per-particle texture coordinates spanning [0,1] × [0,1].
    ///
    /// A degenerate axis (single row or column) maps to coordinate 0.
    pub fn uvs(&self) -> Vec<Vec2> {
        let u_div = (self.width - 1).max(1) as f32;
        let v_div = (self.height - 1).max(1) as f32;

        let mut uvs = Vec::with_capacity(self.particle_count());
        for y in 0..self.height {
            for x in 0..self.width {
                uvs.push(Vec2::new(x as f32 / u_div, y as f32 / v_div));
            }
        }
        uvs
    }

    /// The fixed triangulation: two CCW triangles per grid cell, flat,
    /// `[t0v0, t0v1, t0v2, t1v0, ...]`.
    ///
    /// Winding is chosen so a flat rest-pose grid has all vertex normals
    /// facing +Z. Single-row and single-column grids triangulate to
    /// nothing.
    pub fn triangles(&self) -> Vec<u32> {
        if self.width < 2 || self.height < 2 {
            return Vec::new();
        }

        let mut indices = Vec::with_capacity((self.width - 1) * (self.height - 1) * 6);
        for y in 0..self.height - 1 {
            for x in 0..self.width - 1 {
                let top_left = self.index(x, y) as u32;
                let top_right = top_left + 1;
                let bot_left = top_left + self.width as u32;
                let bot_right = bot_left + 1;

                indices.push(top_left);
                indices.push(bot_left);
                indices.push(top_right);

                indices.push(top_right);
                indices.push(bot_left);
                indices.push(bot_right);
            }
        }
        indices
    }

    /// Number of triangles the grid triangulates into.
    pub fn triangle_count(&self) -> usize {
        if self.width < 2 || self.height < 2 {
            0
        } else {
            (self.width - 1) * (self.height - 1) * 2
        }
    }
}
