// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glam::{Quat, Vec3};
use kurbo::{Point, Size};

use overlook_router::{InputEvent, PointerButton, SubView};

use crate::bindings::{CameraBindings, HeldKeys};
use crate::geom::Ray;
use crate::projection;
use crate::scalar::{cos, sin, tan};
use crate::tuning::CameraTuning;

/// One viewport's view state.
///
/// The three normalized factors are clamped into `[0, 1]` by every mutation;
/// derived quantities (visible-area length, tilt, field of view) are pure
/// functions of the factors and the camera's [`CameraTuning`], never stored.
/// Rotation accumulates without bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewState {
    zoom_k: f32,
    angle_k: f32,
    fov_k: f32,
    rotation: f32,
    orthogonal: bool,
    focus: Vec3,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom_k: 0.5,
            angle_k: 0.5,
            fov_k: 0.5,
            rotation: 0.0,
            orthogonal: false,
            focus: Vec3::ZERO,
        }
    }
}

impl ViewState {
    /// The zoom factor in `[0, 1]`; `1` is fully zoomed in.
    #[must_use]
    pub fn zoom_k(&self) -> f32 {
        self.zoom_k
    }

    /// Sets the zoom factor, clamping into `[0, 1]`.
    pub fn set_zoom_k(&mut self, zoom_k: f32) {
        self.zoom_k = zoom_k.clamp(0.0, 1.0);
    }

    /// The tilt factor in `[0, 1]`; `1` is the most top-down.
    #[must_use]
    pub fn angle_k(&self) -> f32 {
        self.angle_k
    }

    /// Sets the tilt factor, clamping into `[0, 1]`.
    pub fn set_angle_k(&mut self, angle_k: f32) {
        self.angle_k = angle_k.clamp(0.0, 1.0);
    }

    /// The field-of-view factor in `[0, 1]`; `1` is the widest.
    #[must_use]
    pub fn fov_k(&self) -> f32 {
        self.fov_k
    }

    /// Sets the field-of-view factor, clamping into `[0, 1]`.
    pub fn set_fov_k(&mut self, fov_k: f32) {
        self.fov_k = fov_k.clamp(0.0, 1.0);
    }

    /// The rotation around the vertical axis, radians, unclamped.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Sets the rotation around the vertical axis.
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Whether the camera renders an orthogonal projection.
    #[must_use]
    pub fn orthogonal(&self) -> bool {
        self.orthogonal
    }

    /// Selects orthogonal (`true`) or perspective (`false`) projection.
    pub fn set_orthogonal(&mut self, orthogonal: bool) {
        self.orthogonal = orthogonal;
    }

    /// The world-space point the camera looks at.
    #[must_use]
    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Moves the focus point.
    pub fn set_focus(&mut self, focus: Vec3) {
        self.focus = focus;
    }
}

/// The projection half of a camera placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view in radians.
    Perspective {
        /// Vertical field of view, radians.
        fov: f32,
    },
    /// Orthogonal projection with a vertical extent in world units.
    Orthographic {
        /// Vertical extent of the view volume, world units.
        size: f32,
    },
}

/// Where the camera sits this frame and how it projects.
///
/// Recomputed from [`ViewState`] on every update; renderers consume it
/// as-is. The camera always looks at `target`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPlacement {
    /// Camera position, world space.
    pub position: Vec3,
    /// The focus point the camera looks at.
    pub target: Vec3,
    /// Projection parameters.
    pub projection: Projection,
    /// Distance from `position` to `target`.
    pub distance: f32,
}

/// Owns one viewport's view state and integrates routed input into it.
///
/// The controller consumes events it binds (camera keys, wheel steps, the
/// per-frame update) and declines everything else so unrecognized events
/// continue down the window's chain. Pointer moves are observed but not
/// consumed. Each update integrates the held-key set, then recomputes the
/// camera placement; pick rays are derived on demand from the latest
/// placement, never stored.
#[derive(Debug)]
pub struct CameraController {
    state: ViewState,
    tuning: CameraTuning,
    bindings: CameraBindings,
    held: HeldKeys,
    pointer: Option<Point>,
    viewport: Size,
    placement: CameraPlacement,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraTuning::default(), CameraBindings::default())
    }
}

impl CameraController {
    /// A controller with the given tuning and key bindings.
    #[must_use]
    pub fn new(tuning: CameraTuning, bindings: CameraBindings) -> Self {
        let mut camera = Self {
            state: ViewState::default(),
            tuning,
            bindings,
            held: HeldKeys::empty(),
            pointer: None,
            viewport: Size::ZERO,
            placement: CameraPlacement {
                position: Vec3::ZERO,
                target: Vec3::ZERO,
                projection: Projection::Perspective { fov: 0.0 },
                distance: 0.0,
            },
        };
        camera.refresh_placement();
        camera
    }

    /// The current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Mutable access to the view state.
    ///
    /// All factor setters clamp, so external mutation cannot break the
    /// `[0, 1]` invariants. The placement refreshes on the next update.
    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// The tuning constants in effect.
    #[must_use]
    pub fn tuning(&self) -> &CameraTuning {
        &self.tuning
    }

    /// The keys currently held, as the controller has observed them.
    #[must_use]
    pub fn held(&self) -> HeldKeys {
        self.held
    }

    /// The ground footprint length currently shown.
    #[must_use]
    pub fn visible_area_length(&self) -> f32 {
        self.tuning.visible_area_length(self.state.zoom_k)
    }

    /// The current tilt angle, radians above the horizon.
    #[must_use]
    pub fn tilt(&self) -> f32 {
        self.tuning.tilt(self.state.angle_k)
    }

    /// The current vertical field of view, radians.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.tuning.fov(self.state.fov_k)
    }

    /// The camera placement computed by the most recent update.
    #[must_use]
    pub fn placement(&self) -> CameraPlacement {
        self.placement
    }

    /// Sets the viewport size used for aspect and hover-ray math.
    ///
    /// The owning window pushes this before routing each frame's update.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }

    /// Handle one routed event.
    ///
    /// Bound key presses/releases, wheel steps, and the per-frame update are
    /// consumed; pointer moves are observed but passed on; everything else
    /// is declined.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Key { code, pressed } => match self.bindings.held_bit(code) {
                Some(bit) => {
                    self.held.set(bit, pressed);
                    true
                }
                None => false,
            },
            InputEvent::PointerButton {
                button,
                pressed: true,
            } => match button {
                PointerButton::WheelUp => {
                    self.step_zoom(1);
                    true
                }
                PointerButton::WheelDown => {
                    self.step_zoom(-1);
                    true
                }
                _ => false,
            },
            InputEvent::PointerButton { pressed: false, .. } => false,
            InputEvent::PointerMove { position } => {
                self.pointer = Some(position);
                false
            }
            InputEvent::Update { delta_time } => {
                self.update(delta_time);
                true
            }
        }
    }

    /// Adjusts the zoom factor by whole wheel steps.
    pub fn step_zoom(&mut self, steps: i32) {
        let zoom = self.state.zoom_k + steps as f32 * self.tuning.zoom_step();
        self.state.set_zoom_k(zoom);
    }

    /// Integrates the held-key set over `delta_time` seconds and recomputes
    /// the camera placement.
    ///
    /// Normally driven by the routed [`InputEvent::Update`]; callable
    /// directly by hosts that bypass the chain.
    pub fn update(&mut self, delta_time: f32) {
        let held = self.held;
        let half = delta_time / 2.0;

        let mut direction = Vec3::ZERO;
        if held.contains(HeldKeys::PAN_FORWARD) {
            direction += Vec3::NEG_Z;
        }
        if held.contains(HeldKeys::PAN_BACK) {
            direction += Vec3::Z;
        }
        if held.contains(HeldKeys::PAN_LEFT) {
            direction += Vec3::NEG_X;
        }
        if held.contains(HeldKeys::PAN_RIGHT) {
            direction += Vec3::X;
        }
        direction = Quat::from_rotation_y(self.state.rotation) * direction;

        // Zoom before panning, so the pan distance tracks the new footprint.
        if held.contains(HeldKeys::ZOOM_IN) {
            self.state.set_zoom_k(self.state.zoom_k + half);
        }
        if held.contains(HeldKeys::ZOOM_OUT) {
            self.state.set_zoom_k(self.state.zoom_k - half);
        }

        let pan = self.visible_area_length() * self.tuning.pan_speed * delta_time;
        self.state.focus += direction * pan;

        if held.contains(HeldKeys::TILT_UP) {
            self.state.set_angle_k(self.state.angle_k + half);
        }
        if held.contains(HeldKeys::TILT_DOWN) {
            self.state.set_angle_k(self.state.angle_k - half);
        }

        if held.contains(HeldKeys::PERSPECTIVE) {
            self.state.orthogonal = false;
        }
        if held.contains(HeldKeys::ORTHOGONAL) {
            self.state.orthogonal = true;
        }

        if held.contains(HeldKeys::FOV_UP) {
            self.state.set_fov_k(self.state.fov_k + half);
        }
        if held.contains(HeldKeys::FOV_DOWN) {
            self.state.set_fov_k(self.state.fov_k - half);
        }

        if held.contains(HeldKeys::ROTATE_CCW) {
            self.state.rotation += core::f32::consts::PI * delta_time / 4.0;
        }
        if held.contains(HeldKeys::ROTATE_CW) {
            self.state.rotation -= core::f32::consts::PI * delta_time / 4.0;
        }

        self.refresh_placement();
    }

    /// The ray from the camera through the focus point.
    #[must_use]
    pub fn view_ray(&self) -> Ray {
        let forward = (self.placement.target - self.placement.position).normalize();
        Ray::new(self.placement.position, forward)
    }

    /// The ray under the pointer, for terrain hit-testing.
    ///
    /// Falls back to the view ray until a pointer position has been observed
    /// or while the viewport has no extent. Perspective rays fan out through
    /// the frustum; orthogonal rays stay parallel and shift on the camera
    /// plane.
    #[must_use]
    pub fn hover_ray(&self) -> Ray {
        let Some(pointer) = self.pointer else {
            return self.view_ray();
        };
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return self.view_ray();
        }

        let ndc_x = (2.0 * pointer.x / self.viewport.width - 1.0) as f32;
        let ndc_y = (1.0 - 2.0 * pointer.y / self.viewport.height) as f32;
        let aspect = (self.viewport.width / self.viewport.height) as f32;

        let forward = (self.placement.target - self.placement.position).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);

        match self.placement.projection {
            Projection::Perspective { fov } => {
                let tan_half = tan(fov / 2.0);
                let dir = forward + right * (ndc_x * tan_half * aspect) + up * (ndc_y * tan_half);
                Ray::new(self.placement.position, dir.normalize())
            }
            Projection::Orthographic { size } => {
                let half_height = size / 2.0;
                let origin = self.placement.position
                    + right * (ndc_x * half_height * aspect)
                    + up * (ndc_y * half_height);
                Ray::new(origin, forward)
            }
        }
    }

    fn refresh_placement(&mut self) {
        let tilt = self.tilt();
        let length = self.visible_area_length();
        let offset = Vec3::new(
            cos(tilt) * sin(self.state.rotation),
            sin(tilt),
            cos(tilt) * cos(self.state.rotation),
        );

        let (projection, distance) = if self.state.orthogonal {
            let size = length * sin(tilt);
            (Projection::Orthographic { size }, self.tuning.ortho_distance)
        } else {
            let fov = self.fov();
            let distance = projection::footprint_distance(tilt, fov, length);
            (Projection::Perspective { fov }, distance)
        };

        self.placement = CameraPlacement {
            position: self.state.focus + offset * distance,
            target: self.state.focus,
            projection,
            distance,
        };
    }
}

impl SubView for CameraController {
    fn handle_event(&mut self, event: &InputEvent) -> bool {
        Self::handle_event(self, event)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::PI;

    use glam::Vec3;
    use kurbo::{Point, Size};
    use overlook_router::{InputEvent, Keycode, PointerButton};

    use super::*;
    use crate::projection::footprint_length;

    const DT: f32 = 1.0 / 60.0;

    fn update(camera: &mut CameraController) {
        assert!(camera.handle_event(&InputEvent::Update { delta_time: DT }));
    }

    #[test]
    fn factors_clamp_from_every_entry_point() {
        let mut camera = CameraController::default();
        camera.state_mut().set_zoom_k(7.0);
        assert_eq!(camera.state().zoom_k(), 1.0);
        camera.state_mut().set_angle_k(-2.0);
        assert_eq!(camera.state().angle_k(), 0.0);
        camera.state_mut().set_fov_k(1.5);
        assert_eq!(camera.state().fov_k(), 1.0);

        // Held-key integration over a huge frame also clamps.
        camera.handle_event(&InputEvent::key_down(Keycode::E));
        camera.handle_event(&InputEvent::Update { delta_time: 100.0 });
        assert_eq!(camera.state().zoom_k(), 0.0);
    }

    #[test]
    fn wheel_steps_reach_and_hold_the_limit() {
        let mut camera = CameraController::default();
        assert_eq!(camera.state().zoom_k(), 0.5);
        let steps = camera.tuning().zoom_steps;
        for _ in 0..steps {
            assert!(camera.handle_event(&InputEvent::button_down(PointerButton::WheelUp)));
        }
        assert_eq!(camera.state().zoom_k(), 1.0);
        // Further wheel-up events leave the factor pinned.
        camera.handle_event(&InputEvent::button_down(PointerButton::WheelUp));
        assert_eq!(camera.state().zoom_k(), 1.0);
    }

    #[test]
    fn pan_follows_the_rotated_heading() {
        let mut camera = CameraController::default();
        camera.state_mut().set_rotation(PI / 2.0);
        camera.handle_event(&InputEvent::key_down(Keycode::W));
        update(&mut camera);

        // Forward (-Z) rotated a quarter turn counterclockwise points at -X.
        let focus = camera.state().focus();
        assert!(focus.x < 0.0, "focus {focus}");
        assert!(focus.z.abs() < 1e-4);

        let expected = camera.visible_area_length() * camera.tuning().pan_speed * DT;
        assert!((focus.x.abs() - expected).abs() < 1e-3);
    }

    #[test]
    fn release_clears_held_state() {
        let mut camera = CameraController::default();
        camera.handle_event(&InputEvent::key_down(Keycode::W));
        update(&mut camera);
        let moved = camera.state().focus();
        assert_ne!(moved, Vec3::ZERO);

        // Release may arrive on a frame where this window never integrates;
        // the bit must clear regardless.
        camera.handle_event(&InputEvent::key_up(Keycode::W));
        update(&mut camera);
        assert_eq!(camera.state().focus(), moved);
    }

    #[test]
    fn projection_keys_force_the_mode() {
        let mut camera = CameraController::default();
        camera.handle_event(&InputEvent::key_down(Keycode::Digit2));
        update(&mut camera);
        assert!(camera.state().orthogonal());
        camera.handle_event(&InputEvent::key_up(Keycode::Digit2));
        camera.handle_event(&InputEvent::key_down(Keycode::Digit1));
        update(&mut camera);
        assert!(!camera.state().orthogonal());
    }

    #[test]
    fn orthogonal_placement_uses_fixed_distance_and_tilted_size() {
        let mut camera = CameraController::default();
        camera.state_mut().set_orthogonal(true);
        update(&mut camera);

        let placement = camera.placement();
        assert_eq!(placement.distance, camera.tuning().ortho_distance);
        match placement.projection {
            Projection::Orthographic { size } => {
                let expected = camera.visible_area_length() * camera.tilt().sin();
                assert!((size - expected).abs() < 1e-4);
            }
            Projection::Perspective { .. } => panic!("expected orthographic projection"),
        }
    }

    #[test]
    fn perspective_placement_reproduces_the_footprint() {
        let mut camera = CameraController::default();
        update(&mut camera);

        let placement = camera.placement();
        let Projection::Perspective { fov } = placement.projection else {
            panic!("expected perspective projection");
        };
        let footprint = footprint_length(camera.tilt(), fov, placement.distance);
        let expected = camera.visible_area_length();
        assert!((footprint - expected).abs() < 1e-3, "footprint {footprint}");

        // The camera sits `distance` away and looks at the focus point.
        assert_eq!(placement.target, camera.state().focus());
        let measured = (placement.position - placement.target).length();
        assert!((measured - placement.distance).abs() < 1e-3);
    }

    #[test]
    fn frustum_edge_rays_span_the_visible_area() {
        // Independent geometric check: cast rays through the top and bottom
        // viewport edges and measure the ground slice between their hits.
        let mut camera = CameraController::default();
        camera.set_viewport_size(Size::new(800.0, 600.0));
        update(&mut camera);

        camera.handle_event(&InputEvent::pointer_move(Point::new(400.0, 0.0)));
        let far_hit = camera
            .hover_ray()
            .hit_y_plane(0.0)
            .expect("top edge ray hits ground");
        camera.handle_event(&InputEvent::pointer_move(Point::new(400.0, 600.0)));
        let near_hit = camera
            .hover_ray()
            .hit_y_plane(0.0)
            .expect("bottom edge ray hits ground");

        let measured = (far_hit - near_hit).length();
        let expected = camera.visible_area_length();
        assert!(
            (measured - expected).abs() < expected * 1e-2,
            "ground slice {measured}, expected {expected}"
        );
    }

    #[test]
    fn hover_ray_at_viewport_center_matches_view_ray() {
        for orthogonal in [false, true] {
            let mut camera = CameraController::default();
            camera.state_mut().set_orthogonal(orthogonal);
            camera.set_viewport_size(Size::new(800.0, 600.0));
            camera.handle_event(&InputEvent::pointer_move(Point::new(400.0, 300.0)));
            update(&mut camera);

            let view = camera.view_ray();
            let hover = camera.hover_ray();
            assert!((hover.origin - view.origin).length() < 1e-3);
            assert!((hover.dir - view.dir).length() < 1e-5);
        }
    }

    #[test]
    fn hover_ray_lands_on_the_ground_near_the_focus() {
        let mut camera = CameraController::default();
        camera.set_viewport_size(Size::new(800.0, 600.0));
        camera.handle_event(&InputEvent::pointer_move(Point::new(400.0, 300.0)));
        update(&mut camera);

        let hit = camera.hover_ray().hit_y_plane(0.0).expect("ray hits ground");
        assert!((hit - camera.state().focus()).length() < 1e-2);
    }

    #[test]
    fn unbound_events_are_declined() {
        let mut camera = CameraController::default();
        assert!(!camera.handle_event(&InputEvent::key_down(Keycode::Enter)));
        assert!(!camera.handle_event(&InputEvent::button_down(PointerButton::Left)));
        assert!(!camera.handle_event(&InputEvent::pointer_move(Point::new(1.0, 1.0))));
    }
}
