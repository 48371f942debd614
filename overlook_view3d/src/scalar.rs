// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar float helpers usable in both `std` and `libm` builds.

#[cfg(feature = "std")]
mod imp {
    #[inline]
    pub(crate) fn sin(x: f32) -> f32 {
        x.sin()
    }

    #[inline]
    pub(crate) fn cos(x: f32) -> f32 {
        x.cos()
    }

    #[inline]
    pub(crate) fn tan(x: f32) -> f32 {
        x.tan()
    }

    #[inline]
    pub(crate) fn sqrt(x: f32) -> f32 {
        x.sqrt()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod imp {
    #[inline]
    pub(crate) fn sin(x: f32) -> f32 {
        libm::sinf(x)
    }

    #[inline]
    pub(crate) fn cos(x: f32) -> f32 {
        libm::cosf(x)
    }

    #[inline]
    pub(crate) fn tan(x: f32) -> f32 {
        libm::tanf(x)
    }

    #[inline]
    pub(crate) fn sqrt(x: f32) -> f32 {
        libm::sqrtf(x)
    }
}

pub(crate) use imp::{cos, sin, sqrt, tan};

/// Linear interpolation between `a` and `b` by `t`.
#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
