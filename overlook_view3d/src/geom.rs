// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Supporting value types: rays and integer ground-plane coordinates.

use glam::Vec3;

/// A world-space ray: an origin and a direction.
///
/// Rays are ephemeral — the camera recomputes them every update — and exist
/// for external collaborators (terrain hit-testing, tile picking). The
/// direction is kept as handed in; camera-produced rays are unit length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Ray direction.
    pub dir: Vec3,
}

impl Ray {
    /// A ray from `origin` along `dir`.
    #[must_use]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// The point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Intersects the ray with the horizontal plane `y = height`.
    ///
    /// Returns `None` when the ray is parallel to the plane or points away
    /// from it.
    #[must_use]
    pub fn hit_y_plane(&self, height: f32) -> Option<Vec3> {
        if self.dir.y == 0.0 {
            return None;
        }
        let t = (height - self.origin.y) / self.dir.y;
        (t >= 0.0).then(|| self.at(t))
    }
}

/// An integer ground-plane coordinate addressing one terrain cell.
///
/// Cells tile the `y = 0` plane on integer boundaries; a cell covers the
/// half-open square `[x, x + 1) × [z, z + 1)` in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellPoint {
    /// Cell index along the world X axis.
    pub x: i32,
    /// Cell index along the world Z axis.
    pub z: i32,
}

impl CellPoint {
    /// The cell at the origin.
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// The cell with the given indices.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The cell containing the given world-space point.
    ///
    /// Coordinates floor toward negative infinity, so `(-0.5, -0.5)` lands
    /// in cell `(-1, -1)`, not `(0, 0)`.
    #[must_use]
    pub fn from_world(point: Vec3) -> Self {
        Self {
            x: point.x.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// The world-space minimum corner of this cell, on the ground plane.
    #[must_use]
    pub fn world_min(&self) -> Vec3 {
        Vec3::new(self.x as f32, 0.0, self.z as f32)
    }

    /// The world-space center of this cell, on the ground plane.
    #[must_use]
    pub fn world_center(&self) -> Vec3 {
        Vec3::new(self.x as f32 + 0.5, 0.0, self.z as f32 + 0.5)
    }
}
