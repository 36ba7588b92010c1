//! Declarative grid rules from which placements are derived.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::Kind;

/// A rows × cols grid of one kind, anchored at an origin, with per-object scale jitter.
///
/// Row `i` advances along Z by `spacing_z`; column `j` advances along X by `spacing_x`.
/// Counts are signed so malformed input can be reported rather than wrapped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct PlacementRule {
    pub kind: Kind,
    pub origin_x: f32,
    pub origin_z: f32,
    pub rows: i32,
    pub cols: i32,
    pub spacing_x: f32,
    pub spacing_z: f32,
    pub scale_min: f32,
    pub scale_max: f32,
}

impl PlacementRule {
    /// A grid at the origin with unit spacing and a fixed scale of 1.
    pub fn grid(kind: Kind, rows: i32, cols: i32) -> Self {
        Self {
            kind,
            origin_x: 0.0,
            origin_z: 0.0,
            rows,
            cols,
            spacing_x: 1.0,
            spacing_z: 1.0,
            scale_min: 1.0,
            scale_max: 1.0,
        }
    }

    /// Sets the position of cell (0, 0).
    pub fn with_origin(mut self, x: f32, z: f32) -> Self {
        self.origin_x = x;
        self.origin_z = z;
        self
    }

    /// Sets the distance between columns (`x`) and rows (`z`).
    pub fn with_spacing(mut self, x: f32, z: f32) -> Self {
        self.spacing_x = x;
        self.spacing_z = z;
        self
    }

    /// Sets the inclusive range the per-object scale is drawn from.
    pub fn with_scale_range(mut self, min: f32, max: f32) -> Self {
        self.scale_min = min;
        self.scale_max = max;
        self
    }

    /// Number of cells for a valid rule; zero when either count is non-positive.
    pub fn cell_count(&self) -> usize {
        if self.rows <= 0 || self.cols <= 0 {
            return 0;
        }
        self.rows as usize * self.cols as usize
    }

    /// Checks the rule invariants, returning [`Error::InvalidRule`] on the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 0 {
            return Err(Error::InvalidRule(format!(
                "rows must be >= 0 (got {})",
                self.rows
            )));
        }
        if self.cols < 0 {
            return Err(Error::InvalidRule(format!(
                "cols must be >= 0 (got {})",
                self.cols
            )));
        }
        let fields = [
            ("origin_x", self.origin_x),
            ("origin_z", self.origin_z),
            ("spacing_x", self.spacing_x),
            ("spacing_z", self.spacing_z),
            ("scale_min", self.scale_min),
            ("scale_max", self.scale_max),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidRule(format!(
                "{name} must be finite (got {value})"
            )));
        }
        if self.scale_min > self.scale_max {
            return Err(Error::InvalidRule(format!(
                "scale_min ({}) must be <= scale_max ({})",
                self.scale_min, self.scale_max
            )));
        }

        Ok(())
    }
}
