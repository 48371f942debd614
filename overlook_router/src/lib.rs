// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Router: deterministic event routing for multi-window viewports.
//!
//! ## Overview
//!
//! This crate provides the event model and the per-window routing chain used
//! by the rest of Overlook. A window owns an ordered list of
//! [`EventScope`]s; each scope either forwards an event into an embedded
//! sub-view or declines it. Routing walks the chain in declared order and
//! stops at the first scope that reports the event consumed.
//!
//! It does **not** perform focus arbitration or own any windows. Feed it one
//! event at a time (from the window layer, which has already decided which
//! window is the logical target) and it reports which scope, if any,
//! consumed the event.
//!
//! ## Events
//!
//! [`InputEvent`] is deliberately small: key, pointer button, pointer move,
//! and the per-frame update carrying a delta time. The update is injected
//! into the same stream as real input so that stateful handlers (a camera,
//! a console) advance only while their window is the routing target. Key
//! and button codes are open-ended ([`Keycode::Other`],
//! [`PointerButton::Other`]); handlers ignore codes they do not bind, so
//! unknown codes flow through the chain unchanged.
//!
//! ## Ordering
//!
//! Chain order is fixed at construction and never computed: overlay UI gets
//! first refusal, a console traps input while visible, and the viewport
//! camera is the last resort. This crate only guarantees the walk is in
//! declared order with first-consumer-wins semantics; the grouping policy
//! lives in the window layer.
//!
//! ## Minimal example
//!
//! ```
//! use overlook_router::{EventScope, InputEvent, Keycode, ScopeChain, SubView};
//!
//! struct Quiet;
//! impl SubView for Quiet {
//!     fn handle_event(&mut self, _event: &InputEvent) -> bool {
//!         false
//!     }
//! }
//!
//! struct Greedy;
//! impl SubView for Greedy {
//!     fn handle_event(&mut self, _event: &InputEvent) -> bool {
//!         true
//!     }
//! }
//!
//! let mut chain = ScopeChain::new();
//! chain.push(EventScope::forwarding("menu", Box::new(Quiet)));
//! chain.push(EventScope::forwarding("world", Box::new(Greedy)));
//!
//! let consumed_by = chain.route(&InputEvent::key_down(Keycode::W));
//! assert_eq!(consumed_by, Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod scope;

pub use event::{InputEvent, Keycode, PointerButton};
pub use scope::{EventScope, ScopeChain, SubView};
