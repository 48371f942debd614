// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Footprint-equivalent distance solver.
//!
//! A tilted camera looking at the ground plane sees a slice of ground
//! between its near and far frustum edges. In orthogonal mode the slice
//! length is fixed by the orthogonal size alone; in perspective mode it
//! grows with distance. To make projection toggles visually seamless, the
//! perspective camera must sit at exactly the distance where its ground
//! slice equals the orthogonal one.
//!
//! ## Derivation
//!
//! With the camera at height `y` above the ground, tilted `tilt` radians
//! above the horizon, the near and far frustum edges leave the camera at
//! `tilt + fov/2` and `tilt - fov/2` below-horizontal. Each edge meets the
//! ground `cot(angle)` X-units away per unit of height, so the slice length
//! per unit height is `cot(far) - cot(near)`. Solving
//!
//! ```text
//! (cot(far) - cot(near)) * y = visible_area_length
//! ```
//!
//! for `y` and converting height to along-view distance via `sin(tilt)`
//! gives the equivalent distance.
//!
//! Both angles must stay strictly inside `(0, π)` with `far > 0`; the
//! camera's clamp policy guarantees this (see
//! [`CameraTuning`](crate::CameraTuning)), so violations are programming
//! errors caught by debug assertions, not runtime conditions.

use crate::scalar::{cos, sin};

#[inline]
fn cot(angle: f32) -> f32 {
    cos(angle) / sin(angle)
}

/// The perspective camera distance whose ground footprint matches
/// `visible_area_length`.
///
/// `tilt` is the camera's angle above the horizon, strictly inside
/// `(0, π/2)`; `fov` is the vertical field of view, with `tilt - fov/2 > 0`.
///
/// ```
/// use core::f32::consts::PI;
/// use overlook_view3d::{footprint_distance, footprint_length};
///
/// let tilt = PI * 0.3;
/// let fov = PI / 6.0;
/// let distance = footprint_distance(tilt, fov, 100.0);
/// assert!(distance.is_finite() && distance > 0.0);
/// assert!((footprint_length(tilt, fov, distance) - 100.0).abs() < 1e-3);
/// ```
#[must_use]
pub fn footprint_distance(tilt: f32, fov: f32, visible_area_length: f32) -> f32 {
    let near = tilt + fov / 2.0;
    let far = tilt - fov / 2.0;
    debug_assert!(
        fov > 0.0 && far > 0.0 && near < core::f32::consts::PI,
        "degenerate frustum: tilt={tilt}, fov={fov}"
    );
    debug_assert!(
        tilt > 0.0 && tilt < core::f32::consts::FRAC_PI_2,
        "tilt out of range: {tilt}"
    );

    let per_height = cot(far) - cot(near);
    let height = visible_area_length / per_height;
    height / sin(tilt)
}

/// The ground footprint length a perspective camera shows from `distance`.
///
/// Inverse of [`footprint_distance`]; primarily useful to verify footprint
/// equivalence.
#[must_use]
pub fn footprint_length(tilt: f32, fov: f32, distance: f32) -> f32 {
    let near = tilt + fov / 2.0;
    let far = tilt - fov / 2.0;
    let height = distance * sin(tilt);
    (cot(far) - cot(near)) * height
}

#[cfg(test)]
mod tests {
    use core::f32::consts::PI;

    use super::*;

    #[test]
    fn solved_distance_reproduces_the_footprint() {
        let tilt = PI * 0.3;
        let fov = PI / 6.0;
        let distance = footprint_distance(tilt, fov, 100.0);
        assert!(distance.is_finite());
        assert!(distance > 0.0);
        let reprojected = footprint_length(tilt, fov, distance);
        assert!(
            (reprojected - 100.0).abs() < 1e-4 * 100.0,
            "reprojected {reprojected}"
        );
    }

    #[test]
    fn narrowing_fov_converges_to_the_orthogonal_footprint() {
        // As fov -> 0 the frustum degenerates to parallel rays, so the
        // footprint-equivalent distance must reproduce the orthogonal
        // footprint with shrinking error.
        let tilt = PI * 0.35;
        let len = 64.0;
        let mut previous_error = f32::INFINITY;
        for divisor in [6.0, 12.0, 24.0, 48.0, 96.0] {
            let fov = PI / divisor;
            let distance = footprint_distance(tilt, fov, len);
            let error = (footprint_length(tilt, fov, distance) - len).abs();
            assert!(error <= previous_error + 1e-5, "error grew at fov={fov}");
            previous_error = error;
        }
        assert!(previous_error < 1e-3);
    }

    #[test]
    fn wide_fov_needs_a_closer_camera() {
        // A wider frustum covers the same ground from nearer in.
        let tilt = PI * 0.3;
        let len = 100.0;
        let near_dist = footprint_distance(tilt, PI / 3.0, len);
        let far_dist = footprint_distance(tilt, PI / 30.0, len);
        assert!(near_dist < far_dist);
    }

    #[test]
    fn steeper_tilt_above_half_fov_still_positive() {
        // Near the top of the tilt range the near frustum edge passes beyond
        // vertical (near > π/2); the cotangent goes negative but the slice
        // length stays positive.
        let tilt = PI * 0.49;
        let fov = PI / 3.0;
        let distance = footprint_distance(tilt, fov, 42.0);
        assert!(distance.is_finite());
        assert!(distance > 0.0);
    }
}
