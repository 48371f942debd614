// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event model routed through window scope chains.

use kurbo::Point;

/// A key identifier.
///
/// Only the keys the built-in handlers bind get named variants; everything
/// else arrives as [`Keycode::Other`] with the host's raw code and flows
/// through the chain untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keycode {
    /// The `W` key.
    W,
    /// The `A` key.
    A,
    /// The `S` key.
    S,
    /// The `D` key.
    D,
    /// The `Q` key.
    Q,
    /// The `E` key.
    E,
    /// The `Z` key.
    Z,
    /// The `X` key.
    X,
    /// The `O` key.
    O,
    /// The `P` key.
    P,
    /// The `Y` key.
    Y,
    /// The `U` key.
    U,
    /// The `1` key on the main row.
    Digit1,
    /// The `2` key on the main row.
    Digit2,
    /// The backquote/grave key, conventionally the console toggle.
    Grave,
    /// Enter/Return.
    Enter,
    /// Tab.
    Tab,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Backspace.
    Backspace,
    /// Escape.
    Escape,
    /// Any key without a named variant, carrying the host's raw code.
    Other(u32),
}

/// A pointer button identifier.
///
/// Wheel detents are modeled as buttons, matching hosts that report wheel
/// motion as press events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
    /// One wheel detent away from the user (zoom in).
    WheelUp,
    /// One wheel detent toward the user (zoom out).
    WheelDown,
    /// Any other button, carrying the host's raw index.
    Other(u8),
}

/// One event routed through a window's scope chain.
///
/// The host translates raw OS input into `Key`/`PointerButton`/`PointerMove`
/// and delivers them to the window layer; the window layer synthesizes one
/// `Update` per frame and injects it into the same stream. Handlers that do
/// not recognize an event report it unconsumed so it continues down the
/// chain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A key went down or up.
    Key {
        /// Which key.
        code: Keycode,
        /// `true` on press, `false` on release.
        pressed: bool,
    },
    /// A pointer button went down or up.
    PointerButton {
        /// Which button.
        button: PointerButton,
        /// `true` on press, `false` on release.
        pressed: bool,
    },
    /// The pointer moved; `position` is in window-local coordinates.
    PointerMove {
        /// New pointer position in window-local coordinates.
        position: Point,
    },
    /// The per-frame update, synthesized once per tick by the window layer.
    Update {
        /// Seconds elapsed since the previous frame.
        delta_time: f32,
    },
}

impl InputEvent {
    /// A key press event.
    #[must_use]
    pub fn key_down(code: Keycode) -> Self {
        Self::Key {
            code,
            pressed: true,
        }
    }

    /// A key release event.
    #[must_use]
    pub fn key_up(code: Keycode) -> Self {
        Self::Key {
            code,
            pressed: false,
        }
    }

    /// A pointer button press event.
    #[must_use]
    pub fn button_down(button: PointerButton) -> Self {
        Self::PointerButton {
            button,
            pressed: true,
        }
    }

    /// A pointer move event with a window-local position.
    #[must_use]
    pub fn pointer_move(position: Point) -> Self {
        Self::PointerMove { position }
    }

    /// Returns `true` if this is a press of the given key.
    #[must_use]
    pub fn is_key_down(&self, key: Keycode) -> bool {
        matches!(self, Self::Key { code, pressed: true } if *code == key)
    }
}
