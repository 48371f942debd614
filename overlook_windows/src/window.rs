// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use overlook_router::{InputEvent, Keycode, ScopeChain};
use overlook_view3d::CameraController;

use crate::console::ConsoleView;
use crate::manager::{DisplaySlot, WindowId};
use crate::os::OsWindow;

/// The fixed global-shortcut set a window checks before its scope chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shortcuts {
    /// The key that shows/hides the developer console.
    pub console_toggle: Keycode,
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            console_toggle: Keycode::Grave,
        }
    }
}

/// Which layer consumed a routed event.
///
/// The window boundary always swallows, so every outcome counts as handled
/// from the manager's point of view; the variants exist for logging and
/// tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A global shortcut matched.
    Shortcut,
    /// The overlay scope at this index consumed the event.
    Overlay(usize),
    /// The visible console consumed the event.
    Console,
    /// The world scope at this index consumed the event.
    World(usize),
    /// The camera consumed the event.
    Camera,
    /// No layer consumed it; the window boundary swallowed it.
    Swallowed,
}

/// Everything a window needs, produced by a
/// [`WindowFactory`](crate::WindowFactory) for a logical scene name.
///
/// Chain order is part of the assembly: `overlay` scopes route before the
/// console, `world` scopes after it, and the camera is always the last
/// resort. Missing pieces (no console, empty chains) are skipped by
/// routing, never errors.
pub struct WindowAssembly {
    /// The host's OS window handle.
    pub os: Box<dyn OsWindow>,
    /// Global shortcuts checked before any scope.
    pub shortcuts: Shortcuts,
    /// Scopes with first refusal, ahead of the console (overlay menus).
    pub overlay: ScopeChain,
    /// The developer console, if this window carries one.
    pub console: Option<Box<dyn ConsoleView>>,
    /// Scopes behind the console (world interaction layers).
    pub world: ScopeChain,
    /// The viewport camera.
    pub camera: CameraController,
}

impl fmt::Debug for WindowAssembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowAssembly")
            .field("shortcuts", &self.shortcuts)
            .field("overlay", &self.overlay)
            .field("console", &self.console.is_some())
            .field("world", &self.world)
            .field("camera", &self.camera)
            .finish_non_exhaustive()
    }
}

/// One top-level window: its OS handle, its routing order, and its camera.
///
/// All parts are wired once at construction from a [`WindowAssembly`];
/// nothing is searched for at routing time.
pub struct WindowController {
    id: WindowId,
    slot: DisplaySlot,
    is_main: bool,
    os: Box<dyn OsWindow>,
    shortcuts: Shortcuts,
    overlay: ScopeChain,
    console: Option<Box<dyn ConsoleView>>,
    world: ScopeChain,
    camera: CameraController,
}

impl WindowController {
    pub(crate) fn new(
        id: WindowId,
        slot: DisplaySlot,
        is_main: bool,
        assembly: WindowAssembly,
    ) -> Self {
        Self {
            id,
            slot,
            is_main,
            os: assembly.os,
            shortcuts: assembly.shortcuts,
            overlay: assembly.overlay,
            console: assembly.console,
            world: assembly.world,
            camera: assembly.camera,
        }
    }

    /// This window's id.
    #[must_use]
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// The display slot assigned at creation.
    #[must_use]
    pub fn slot(&self) -> DisplaySlot {
        self.slot
    }

    /// Whether closing this window terminates the application.
    #[must_use]
    pub fn is_main(&self) -> bool {
        self.is_main
    }

    /// The OS window handle.
    #[must_use]
    pub fn os(&self) -> &dyn OsWindow {
        &*self.os
    }

    pub(crate) fn os_mut(&mut self) -> &mut dyn OsWindow {
        &mut *self.os
    }

    /// This window's camera.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Mutable access to this window's camera.
    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// Whether this window's console exists and is currently visible.
    #[must_use]
    pub fn console_visible(&self) -> bool {
        self.console.as_ref().is_some_and(|c| c.visible())
    }

    /// Whether the pointer is inside this window's client rectangle.
    #[must_use]
    pub fn pointer_over(&self) -> bool {
        self.os.pointer_over()
    }

    /// Per-frame duties plus routing of the synthesized update event.
    ///
    /// The camera's viewport size is refreshed from the OS client rectangle
    /// first, so rays computed this frame use the current aspect.
    pub fn tick(&mut self, delta_time: f32) -> RouteOutcome {
        self.camera.set_viewport_size(self.os.client_rect().size());
        self.route_event(&InputEvent::Update { delta_time })
    }

    /// Routes one event through this window's layers in fixed order.
    ///
    /// Order: global shortcuts, overlay scopes, the console while visible,
    /// world scopes, the camera. The first layer to consume wins; whatever
    /// remains is swallowed at the window boundary so it can never reach a
    /// sibling window or fall back to the OS.
    pub fn route_event(&mut self, event: &InputEvent) -> RouteOutcome {
        if event.is_key_down(self.shortcuts.console_toggle) {
            if let Some(console) = &mut self.console {
                console.toggle();
                log::debug!(
                    "window {:?}: console {}",
                    self.id,
                    if console.visible() { "shown" } else { "hidden" },
                );
            }
            return RouteOutcome::Shortcut;
        }

        if let Some(index) = self.overlay.route(event) {
            return RouteOutcome::Overlay(index);
        }

        if let Some(console) = &mut self.console
            && console.visible()
            && console.handle_event(event)
        {
            return RouteOutcome::Console;
        }

        if let Some(index) = self.world.route(event) {
            return RouteOutcome::World(index);
        }

        if self.camera.handle_event(event) {
            return RouteOutcome::Camera;
        }

        RouteOutcome::Swallowed
    }
}

impl fmt::Debug for WindowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowController")
            .field("id", &self.id)
            .field("slot", &self.slot)
            .field("is_main", &self.is_main)
            .field("console", &self.console.is_some())
            .field("camera", &self.camera)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::{Point, Rect};
    use overlook_router::{EventScope, InputEvent, Keycode, PointerButton, SubView};
    use overlook_view3d::CameraController;

    use super::*;

    struct NullOs;

    impl OsWindow for NullOs {
        fn set_focus(&mut self) {}

        fn is_focused(&self) -> bool {
            true
        }

        fn client_rect(&self) -> Rect {
            Rect::new(0.0, 0.0, 640.0, 480.0)
        }

        fn pointer_position(&self) -> Point {
            Point::ZERO
        }
    }

    struct Counting {
        calls: Rc<Cell<u32>>,
        consume: bool,
    }

    impl SubView for Counting {
        fn handle_event(&mut self, _event: &InputEvent) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.consume
        }
    }

    struct TrapConsole {
        visible: bool,
        handled: Rc<Cell<u32>>,
    }

    impl ConsoleView for TrapConsole {
        fn visible(&self) -> bool {
            self.visible
        }

        fn toggle(&mut self) {
            self.visible = !self.visible;
        }

        fn handle_event(&mut self, _event: &InputEvent) -> bool {
            self.handled.set(self.handled.get() + 1);
            true
        }
    }

    fn controller(console: Option<Box<dyn ConsoleView>>) -> WindowController {
        WindowController::new(
            WindowId::new(0),
            DisplaySlot::new(0),
            true,
            WindowAssembly {
                os: Box::new(NullOs),
                shortcuts: Shortcuts::default(),
                overlay: overlook_router::ScopeChain::new(),
                console,
                world: overlook_router::ScopeChain::new(),
                camera: CameraController::default(),
            },
        )
    }

    #[test]
    fn overlay_gets_first_refusal() {
        let overlay_calls = Rc::new(Cell::new(0));
        let console_calls = Rc::new(Cell::new(0));

        let mut window = controller(Some(Box::new(TrapConsole {
            visible: true,
            handled: console_calls.clone(),
        })));
        window.overlay.push(EventScope::forwarding(
            "menu",
            Box::new(Counting {
                calls: overlay_calls.clone(),
                consume: true,
            }),
        ));

        let outcome = window.route_event(&InputEvent::key_down(Keycode::W));
        assert_eq!(outcome, RouteOutcome::Overlay(0));
        assert_eq!(overlay_calls.get(), 1);
        // The visible console sits behind the overlay and never saw it.
        assert_eq!(console_calls.get(), 0);
    }

    #[test]
    fn visible_console_traps_camera_input() {
        let handled = Rc::new(Cell::new(0));
        let mut window = controller(Some(Box::new(TrapConsole {
            visible: true,
            handled: handled.clone(),
        })));

        let outcome = window.route_event(&InputEvent::button_down(PointerButton::WheelUp));
        assert_eq!(outcome, RouteOutcome::Console);
        assert_eq!(handled.get(), 1);
        // The wheel never reached the camera.
        assert_eq!(window.camera().state().zoom_k(), 0.5);
    }

    #[test]
    fn hidden_console_is_skipped() {
        let handled = Rc::new(Cell::new(0));
        let mut window = controller(Some(Box::new(TrapConsole {
            visible: false,
            handled: handled.clone(),
        })));

        let outcome = window.route_event(&InputEvent::button_down(PointerButton::WheelUp));
        assert_eq!(outcome, RouteOutcome::Camera);
        assert_eq!(handled.get(), 0);
        assert!(window.camera().state().zoom_k() > 0.5);
    }

    #[test]
    fn toggle_shortcut_consumes_and_flips_visibility() {
        let mut window = controller(Some(Box::new(TrapConsole {
            visible: false,
            handled: Rc::new(Cell::new(0)),
        })));

        assert!(!window.console_visible());
        let outcome = window.route_event(&InputEvent::key_down(Keycode::Grave));
        assert_eq!(outcome, RouteOutcome::Shortcut);
        assert!(window.console_visible());

        // Matching the shortcut consumes the event even without a console.
        let mut bare = controller(None);
        assert_eq!(
            bare.route_event(&InputEvent::key_down(Keycode::Grave)),
            RouteOutcome::Shortcut
        );
    }

    #[test]
    fn unclaimed_events_are_swallowed_at_the_boundary() {
        let mut window = controller(None);
        let outcome = window.route_event(&InputEvent::key_down(Keycode::Other(999)));
        assert_eq!(outcome, RouteOutcome::Swallowed);
    }

    #[test]
    fn world_scopes_route_after_the_console_slot() {
        let world_calls = Rc::new(Cell::new(0));
        let mut window = controller(None);
        window.world.push(EventScope::forwarding(
            "terrain",
            Box::new(Counting {
                calls: world_calls.clone(),
                consume: true,
            }),
        ));

        let outcome = window.route_event(&InputEvent::button_down(PointerButton::Left));
        assert_eq!(outcome, RouteOutcome::World(0));
        assert_eq!(world_calls.get(), 1);
    }
}
