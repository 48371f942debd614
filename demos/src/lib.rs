// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared wiring for the Overlook demos: an in-memory desktop standing in
//! for the OS, and a factory assembling demo windows on it.
//!
//! Nothing here renders; the demos print what the core decides each frame.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use overlook_router::{InputEvent, ScopeChain};
use overlook_view3d::CameraController;
use overlook_windows::{
    CommandHistory, ConsoleView, DisplaySlot, OsWindow, Shortcuts, WindowAssembly, WindowFactory,
};

/// Desktop state shared by every demo window: one pointer, one OS focus.
#[derive(Debug, Default)]
pub struct Desktop {
    /// Pointer position in desktop coordinates.
    pub pointer: Point,
    /// Which window serial the OS reports focused, if any.
    pub os_focus: Option<u32>,
}

/// A shared handle to the demo desktop.
pub type DesktopHandle = Rc<RefCell<Desktop>>;

/// An in-memory OS window at a fixed desktop position.
#[derive(Debug)]
pub struct DemoOsWindow {
    desktop: DesktopHandle,
    origin: Point,
    size: Size,
    serial: u32,
}

impl OsWindow for DemoOsWindow {
    fn set_focus(&mut self) {
        self.desktop.borrow_mut().os_focus = Some(self.serial);
    }

    fn is_focused(&self) -> bool {
        self.desktop.borrow().os_focus == Some(self.serial)
    }

    fn client_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }

    fn pointer_position(&self) -> Point {
        let pointer = self.desktop.borrow().pointer;
        Point::new(pointer.x - self.origin.x, pointer.y - self.origin.y)
    }
}

/// A console that swallows all input while visible and keeps a submission
/// history, standing in for a real command-line collaborator.
#[derive(Debug, Default)]
pub struct DemoConsole {
    visible: bool,
    /// Submitted-line history, browsable by the demos.
    pub history: CommandHistory,
}

impl ConsoleView for DemoConsole {
    fn visible(&self) -> bool {
        self.visible
    }

    fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    fn handle_event(&mut self, _event: &InputEvent) -> bool {
        // Typing into the console must never leak to the camera below.
        true
    }
}

/// Builds demo windows side by side on the shared desktop, 800x600 each,
/// overlapping their neighbor by half a width.
#[derive(Debug)]
pub struct DemoFactory {
    desktop: DesktopHandle,
}

impl DemoFactory {
    /// A factory placing windows on `desktop`.
    #[must_use]
    pub fn new(desktop: DesktopHandle) -> Self {
        Self { desktop }
    }
}

impl WindowFactory for DemoFactory {
    fn build(&mut self, _scene: &str, slot: DisplaySlot) -> WindowAssembly {
        let origin = Point::new(f64::from(slot.index()) * 400.0, 0.0);
        WindowAssembly {
            os: Box::new(DemoOsWindow {
                desktop: self.desktop.clone(),
                origin,
                size: Size::new(800.0, 600.0),
                serial: slot.index(),
            }),
            shortcuts: Shortcuts::default(),
            overlay: ScopeChain::new(),
            console: Some(Box::new(DemoConsole::default())),
            world: ScopeChain::new(),
            camera: CameraController::default(),
        }
    }
}
