// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f32::consts::PI;

use crate::scalar;

/// Tunable constants for one viewport camera.
///
/// The defaults give a grid-strategy feel: a tilted-down view that can pull
/// back from 10 to 160 visible cells, never flat enough to see the horizon
/// and never fully top-down.
///
/// Tilt and field of view ranges must keep the projection solver away from
/// its degenerate angles: `min_tilt > max_fov / 2` guarantees the far
/// frustum edge stays above the horizon, and `max_tilt < π/2` keeps the
/// camera basis well defined. The defaults satisfy both with margin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraTuning {
    /// Pan speed while a movement key is held, in visible-area lengths
    /// ("screens") per second.
    pub pan_speed: f32,
    /// Visible-area length at maximum zoom-in, in cells.
    pub min_cells: f32,
    /// Visible-area length at maximum zoom-out, in cells.
    pub max_cells: f32,
    /// Number of wheel detents covering the full zoom range.
    pub zoom_steps: u32,
    /// Tilt angle at `angle_k = 0`, radians above the horizon.
    pub min_tilt: f32,
    /// Tilt angle at `angle_k = 1`, radians above the horizon.
    pub max_tilt: f32,
    /// Field of view at `fov_k = 0`, radians.
    pub min_fov: f32,
    /// Field of view at `fov_k = 1`, radians.
    pub max_fov: f32,
    /// Camera distance from the focus point in orthogonal mode, where
    /// distance does not affect the footprint.
    pub ortho_distance: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            pan_speed: 1.0,
            min_cells: 10.0,
            max_cells: 160.0,
            zoom_steps: 20,
            min_tilt: PI * 0.20,
            max_tilt: PI * 0.49,
            min_fov: PI / 30.0,
            max_fov: PI / 3.0,
            ortho_distance: 80.0,
        }
    }
}

impl CameraTuning {
    /// The world-space ground footprint length shown at `zoom_k`.
    ///
    /// The square root biases the mapping so perceived zoom speed feels
    /// linear across the range.
    #[must_use]
    pub fn visible_area_length(&self, zoom_k: f32) -> f32 {
        scalar::lerp(self.max_cells, self.min_cells, scalar::sqrt(zoom_k))
    }

    /// The tilt angle at `angle_k`.
    #[must_use]
    pub fn tilt(&self, angle_k: f32) -> f32 {
        scalar::lerp(self.min_tilt, self.max_tilt, angle_k)
    }

    /// The field of view at `fov_k`.
    #[must_use]
    pub fn fov(&self, fov_k: f32) -> f32 {
        scalar::lerp(self.min_fov, self.max_fov, fov_k)
    }

    /// The size of one wheel zoom step as a `zoom_k` delta.
    #[must_use]
    pub fn zoom_step(&self) -> f32 {
        1.0 / self.zoom_steps as f32
    }
}
