// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// The OS-window collaborator implemented by the host.
///
/// The core never creates, destroys, or paints OS windows; it only asks
/// them three questions and issues one command. Implementations should
/// release their OS resources on drop — closing a window drops its
/// controller, and with it this handle.
///
/// All coordinates are window-local: the client rectangle has its origin at
/// zero, and the pointer position is reported relative to that same origin
/// (it may lie outside the rectangle when the pointer is over another
/// window or the desktop).
pub trait OsWindow {
    /// Ask the OS to give this window input focus.
    fn set_focus(&mut self);

    /// Whether the OS currently reports this window focused.
    fn is_focused(&self) -> bool;

    /// The client rectangle, origin at zero, in window-local pixels.
    fn client_rect(&self) -> Rect;

    /// The pointer position in window-local pixels.
    fn pointer_position(&self) -> Point;

    /// Whether the pointer currently lies inside the client rectangle.
    ///
    /// Bounds are half-open: a pointer exactly on the right or bottom edge
    /// is outside, so adjacent windows never both claim it.
    fn pointer_over(&self) -> bool {
        let rect = self.client_rect();
        let p = self.pointer_position();
        p.x >= rect.x0 && p.x < rect.x1 && p.y >= rect.y0 && p.y < rect.y1
    }
}
