// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use overlook_router::InputEvent;

use crate::window::{WindowAssembly, WindowController};

/// The logical scene a plain [`WindowManager::create_window`] requests.
pub const DEFAULT_WINDOW_SCENE: &str = "window";

/// Identifier for a managed window.
///
/// Ids are sequential and never reused within one manager's lifetime, so a
/// stale id held after a close simply stops resolving.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WindowId(u32);

impl WindowId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

/// Sequential display slot assigned at window creation.
///
/// The factory uses it to place the OS window: slot 0 is the main window on
/// the primary screen; later slots go to other screens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplaySlot(u32);

impl DisplaySlot {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The slot index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// What the host should do after a lifecycle operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum AppControl {
    /// Keep running.
    Continue,
    /// Terminate the application: the main (or last) window closed.
    Quit,
}

/// The scene-instantiation collaborator.
///
/// The host assembles a fully wired window — OS handle, scope chains,
/// optional console, camera — for a logical scene name. The core never
/// parses scene files; it only asks for assemblies by name.
pub trait WindowFactory {
    /// Builds the window assembly for `scene`, to be shown in `slot`.
    fn build(&mut self, scene: &str, slot: DisplaySlot) -> WindowAssembly;
}

/// Owns the window set, arbitrates logical focus, and feeds every event —
/// real or synthesized — to exactly one window per frame.
///
/// The window list and focus state never escape by reference; collaborators
/// hold [`WindowId`]s and ask. The host guarantees `tick` and
/// `route_input` are called serially from one thread of control.
pub struct WindowManager {
    factory: Box<dyn WindowFactory>,
    windows: Vec<WindowController>,
    focused: Option<WindowId>,
    next_id: u32,
}

impl WindowManager {
    /// A manager with no windows, building them through `factory`.
    #[must_use]
    pub fn new(factory: Box<dyn WindowFactory>) -> Self {
        Self {
            factory,
            windows: Vec::new(),
            focused: None,
            next_id: 0,
        }
    }

    /// Creates a window from the default scene.
    ///
    /// The first window created is the main window; closing it later quits
    /// the application.
    pub fn create_window(&mut self) -> WindowId {
        self.create_window_from(DEFAULT_WINDOW_SCENE)
    }

    /// Creates a window from the named scene and appends it to the set.
    pub fn create_window_from(&mut self, scene: &str) -> WindowId {
        let id = WindowId::new(self.next_id);
        self.next_id += 1;
        let slot = DisplaySlot::new(self.windows.len() as u32);
        let is_main = self.windows.is_empty();

        let assembly = self.factory.build(scene, slot);
        self.windows
            .push(WindowController::new(id, slot, is_main, assembly));

        // Logical focus must exist from the moment a window does.
        if self.focused.is_none() {
            self.focused = Some(id);
        }
        log::info!("created {scene:?} window {id:?} in slot {}", slot.index());
        id
    }

    /// Closes a window, dropping its OS resources.
    ///
    /// Returns [`AppControl::Quit`] when the closed window was the main
    /// window or the set became empty; the host performs the actual
    /// termination. Closing an unknown id is a no-op. If the closed window
    /// held logical focus, focus falls back to the main window.
    pub fn close_window(&mut self, id: WindowId) -> AppControl {
        let Some(position) = self.windows.iter().position(|w| w.id() == id) else {
            log::warn!("close requested for unknown window {id:?}");
            return AppControl::Continue;
        };

        let closed = self.windows.remove(position);
        if self.focused == Some(id) {
            self.focused = self.windows.first().map(WindowController::id);
        }
        log::info!("closed window {id:?}");

        if closed.is_main() || self.windows.is_empty() {
            log::info!("main window closed; requesting quit");
            AppControl::Quit
        } else {
            AppControl::Continue
        }
    }

    /// The number of managed windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no windows are managed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// The logically focused window's id, if any window exists.
    #[must_use]
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    /// The window with the given id.
    #[must_use]
    pub fn window(&self, id: WindowId) -> Option<&WindowController> {
        self.windows.iter().find(|w| w.id() == id)
    }

    /// Mutable access to the window with the given id.
    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowController> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    /// Advances one frame.
    ///
    /// In order: arbitrate logical focus, synthesize the update event for
    /// `delta_time`, and dispatch it to the focused window exactly as a
    /// real input event. Unfocused windows receive nothing and stay frozen.
    pub fn tick(&mut self, delta_time: f32) {
        self.arbitrate_focus();
        if let Some(window) = self.focused_mut() {
            let outcome = window.tick(delta_time);
            log::trace!("update consumed by {outcome:?}");
        }
    }

    /// Routes one raw input event to the focused window.
    pub fn route_input(&mut self, event: &InputEvent) {
        if let Some(window) = self.focused_mut() {
            let id = window.id();
            let outcome = window.route_event(event);
            log::trace!("window {id:?}: {event:?} consumed by {outcome:?}");
        }
    }

    /// Recomputes logical focus from the pointer position.
    ///
    /// Windows are scanned most-recently-created first so stacked windows
    /// resolve to the top one. A window under the pointer grabs OS focus
    /// only when the OS does not already report it focused; with the
    /// pointer outside every window, the previous focus is retained rather
    /// than fighting whatever the OS decided.
    fn arbitrate_focus(&mut self) {
        let mut target = None;
        for window in self.windows.iter_mut().rev() {
            if window.pointer_over() {
                if !window.os().is_focused() {
                    window.os_mut().set_focus();
                }
                target = Some(window.id());
                break;
            }
        }

        let target = target.or(self.focused).or_else(|| {
            // First frame with the pointer nowhere: default to the main window.
            self.windows.first().map(WindowController::id)
        });

        if target != self.focused {
            log::debug!("logical focus: {:?} -> {target:?}", self.focused);
            self.focused = target;
        }
    }

    fn focused_mut(&mut self) -> Option<&mut WindowController> {
        let id = self.focused?;
        self.windows.iter_mut().find(|w| w.id() == id)
    }
}

impl core::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowManager")
            .field("windows", &self.windows)
            .field("focused", &self.focused)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
