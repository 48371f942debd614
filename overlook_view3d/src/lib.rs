// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook View 3D: a headless camera model for ground-plane viewports.
//!
//! This crate owns one viewport's view state and turns it into a camera
//! placement every frame. It focuses on:
//! - Normalized view state (zoom, tilt, field of view as factors in `[0, 1]`,
//!   plus rotation and a world-space focus point).
//! - Integrating routed input events: held movement keys, wheel zoom steps,
//!   projection toggles.
//! - A projection solver that keeps the visible ground footprint identical
//!   whether the camera renders orthogonal or perspective.
//! - Pick rays for external hit-testing (view ray and hover ray).
//!
//! It does **not** own a scene graph, render, or poll input devices. Events
//! arrive through the routing chain (see `overlook_router`); the owning
//! window pushes the current viewport size so rays use the right aspect.
//!
//! ## Minimal example
//!
//! ```
//! use overlook_router::{InputEvent, Keycode};
//! use overlook_view3d::CameraController;
//!
//! let mut camera = CameraController::default();
//!
//! // Hold W for a quarter second of frames.
//! camera.handle_event(&InputEvent::key_down(Keycode::W));
//! for _ in 0..15 {
//!     camera.handle_event(&InputEvent::Update { delta_time: 1.0 / 60.0 });
//! }
//! camera.handle_event(&InputEvent::key_up(Keycode::W));
//!
//! // The focus point moved along -Z and the camera looks at it.
//! let placement = camera.placement();
//! assert!(camera.state().focus().z < 0.0);
//! assert_eq!(placement.target, camera.state().focus());
//! ```
//!
//! ## Footprint equivalence
//!
//! Toggling between orthogonal and perspective projection must not change
//! how much ground the viewport shows. In orthogonal mode the footprint
//! follows directly from the orthogonal size; in perspective mode
//! [`footprint_distance`] solves for the camera distance that makes the
//! ground slice between the near and far frustum edges match the same
//! visible-area length. See the module docs of [`projection`] for the
//! derivation.
//!
//! This crate is `no_std` and requires either the `std` or `libm` feature.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("overlook_view3d requires either the `std` or the `libm` feature");

mod bindings;
mod camera;
mod geom;
pub mod projection;
mod scalar;
mod tuning;

pub use bindings::{CameraBindings, HeldKeys};
pub use camera::{CameraController, CameraPlacement, Projection, ViewState};
pub use geom::{CellPoint, Ray};
pub use projection::{footprint_distance, footprint_length};
pub use tuning::CameraTuning;
