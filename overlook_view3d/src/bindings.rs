// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use overlook_router::Keycode;

bitflags::bitflags! {
    /// The camera actions whose keys are currently held.
    ///
    /// The controller sets and clears bits from routed key events and
    /// integrates the held set once per update. Release events always clear
    /// their bit, even on frames where nothing is integrated, so a key
    /// released while the window was unfocused cannot keep its action
    /// running when focus returns.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct HeldKeys: u16 {
        /// Pan toward -Z (before rotation).
        const PAN_FORWARD = 1 << 0;
        /// Pan toward +Z (before rotation).
        const PAN_BACK = 1 << 1;
        /// Pan toward -X (before rotation).
        const PAN_LEFT = 1 << 2;
        /// Pan toward +X (before rotation).
        const PAN_RIGHT = 1 << 3;
        /// Continuous zoom-in.
        const ZOOM_IN = 1 << 4;
        /// Continuous zoom-out.
        const ZOOM_OUT = 1 << 5;
        /// Raise the tilt angle toward top-down.
        const TILT_UP = 1 << 6;
        /// Lower the tilt angle toward the horizon.
        const TILT_DOWN = 1 << 7;
        /// Widen the field of view.
        const FOV_UP = 1 << 8;
        /// Narrow the field of view.
        const FOV_DOWN = 1 << 9;
        /// Rotate counterclockwise around the focus point.
        const ROTATE_CCW = 1 << 10;
        /// Rotate clockwise around the focus point.
        const ROTATE_CW = 1 << 11;
        /// Force perspective projection.
        const PERSPECTIVE = 1 << 12;
        /// Force orthogonal projection.
        const ORTHOGONAL = 1 << 13;
    }
}

/// The key-to-action table for one camera.
///
/// Bindings are plain data resolved once per event; windows may carry
/// different tables. The defaults follow the usual WASD layout with Q/E
/// zoom, Z/X tilt, O/P field of view, Y/U rotation, and 1/2 selecting
/// perspective/orthogonal projection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CameraBindings {
    /// Pan toward -Z.
    pub pan_forward: Keycode,
    /// Pan toward +Z.
    pub pan_back: Keycode,
    /// Pan toward -X.
    pub pan_left: Keycode,
    /// Pan toward +X.
    pub pan_right: Keycode,
    /// Continuous zoom-in.
    pub zoom_in: Keycode,
    /// Continuous zoom-out.
    pub zoom_out: Keycode,
    /// Raise tilt.
    pub tilt_up: Keycode,
    /// Lower tilt.
    pub tilt_down: Keycode,
    /// Widen the field of view.
    pub fov_up: Keycode,
    /// Narrow the field of view.
    pub fov_down: Keycode,
    /// Rotate counterclockwise.
    pub rotate_ccw: Keycode,
    /// Rotate clockwise.
    pub rotate_cw: Keycode,
    /// Force perspective projection.
    pub perspective: Keycode,
    /// Force orthogonal projection.
    pub orthogonal: Keycode,
}

impl Default for CameraBindings {
    fn default() -> Self {
        Self {
            pan_forward: Keycode::W,
            pan_back: Keycode::S,
            pan_left: Keycode::A,
            pan_right: Keycode::D,
            zoom_in: Keycode::Q,
            zoom_out: Keycode::E,
            tilt_up: Keycode::Z,
            tilt_down: Keycode::X,
            fov_up: Keycode::O,
            fov_down: Keycode::P,
            rotate_ccw: Keycode::Y,
            rotate_cw: Keycode::U,
            perspective: Keycode::Digit1,
            orthogonal: Keycode::Digit2,
        }
    }
}

impl CameraBindings {
    /// The held-key bit bound to `code`, if any.
    #[must_use]
    pub fn held_bit(&self, code: Keycode) -> Option<HeldKeys> {
        if code == self.pan_forward {
            Some(HeldKeys::PAN_FORWARD)
        } else if code == self.pan_back {
            Some(HeldKeys::PAN_BACK)
        } else if code == self.pan_left {
            Some(HeldKeys::PAN_LEFT)
        } else if code == self.pan_right {
            Some(HeldKeys::PAN_RIGHT)
        } else if code == self.zoom_in {
            Some(HeldKeys::ZOOM_IN)
        } else if code == self.zoom_out {
            Some(HeldKeys::ZOOM_OUT)
        } else if code == self.tilt_up {
            Some(HeldKeys::TILT_UP)
        } else if code == self.tilt_down {
            Some(HeldKeys::TILT_DOWN)
        } else if code == self.fov_up {
            Some(HeldKeys::FOV_UP)
        } else if code == self.fov_down {
            Some(HeldKeys::FOV_DOWN)
        } else if code == self.rotate_ccw {
            Some(HeldKeys::ROTATE_CCW)
        } else if code == self.rotate_cw {
            Some(HeldKeys::ROTATE_CW)
        } else if code == self.perspective {
            Some(HeldKeys::PERSPECTIVE)
        } else if code == self.orthogonal {
            Some(HeldKeys::ORTHOGONAL)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_binds_each_action_once() {
        let bindings = CameraBindings::default();
        let mut seen = HeldKeys::empty();
        for code in [
            Keycode::W,
            Keycode::S,
            Keycode::A,
            Keycode::D,
            Keycode::Q,
            Keycode::E,
            Keycode::Z,
            Keycode::X,
            Keycode::O,
            Keycode::P,
            Keycode::Y,
            Keycode::U,
            Keycode::Digit1,
            Keycode::Digit2,
        ] {
            let bit = bindings.held_bit(code).expect("bound key");
            assert!(!seen.intersects(bit), "duplicate binding for {code:?}");
            seen |= bit;
        }
        assert_eq!(seen, HeldKeys::all());
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        let bindings = CameraBindings::default();
        assert_eq!(bindings.held_bit(Keycode::Enter), None);
        assert_eq!(bindings.held_bit(Keycode::Other(400)), None);
    }
}
