// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Windows: window lifecycle and focus arbitration for multi-window
//! viewports.
//!
//! ## Overview
//!
//! One application owns several top-level windows, each with its own scope
//! chain and camera, while the host delivers a single stream of input events
//! and one tick per frame. This crate decides, every frame, which window is
//! the logical target and routes everything there:
//!
//! - [`WindowManager`] owns the window set, creates and closes windows
//!   through a [`WindowFactory`], arbitrates focus once per tick, and
//!   injects the per-frame [`InputEvent::Update`](overlook_router::InputEvent)
//!   into the same stream as real input.
//! - [`WindowController`] owns one window's routing order: global shortcuts,
//!   then overlay scopes, then the console while visible, then world scopes,
//!   then the camera. The window boundary always swallows — events never
//!   leak to sibling windows or back to the OS.
//! - The OS itself stays behind the [`OsWindow`] trait: the host implements
//!   window creation, focus grabbing, and pointer queries; this crate only
//!   decides *when* to grab focus, preferring the pointer's window but never
//!   forcing focus while the pointer is outside every window.
//!
//! ## Focus arbitration
//!
//! Each tick, windows are scanned most-recently-created first (stacked
//! windows resolve to the top one). The first window whose client rectangle
//! contains the pointer becomes the logical focus, grabbing OS focus only
//! when the OS does not already report it focused. With the pointer outside
//! every window the previous focus is retained, so the window manager is
//! never fought over focus changes the user made by other means.
//!
//! Only the focused window receives events — including the synthesized
//! update — so cameras and scopes in unfocused windows stay frozen until
//! focus returns.
//!
//! ## Lifecycle
//!
//! The first window created is the main window. Closing it (or closing the
//! last window) returns [`AppControl::Quit`]; the host is responsible for
//! actually terminating. Closing any other window just frees it.
//!
//! All operations are total: closing a stale id is a no-op, missing
//! consoles/scopes are skipped, and an empty manager routes nothing.
//!
//! This crate is `no_std` and uses `alloc`. Logging goes through the `log`
//! facade: lifecycle at `info`, focus changes at `debug`, routing at
//! `trace`.

#![no_std]

extern crate alloc;

mod console;
mod manager;
mod os;
mod window;

pub use console::{CommandHistory, ConsoleView};
pub use manager::{
    AppControl, DEFAULT_WINDOW_SCENE, DisplaySlot, WindowFactory, WindowId, WindowManager,
};
pub use os::OsWindow;
pub use window::{RouteOutcome, Shortcuts, WindowAssembly, WindowController};
