// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scopes and the ordered routing chain.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

use crate::event::InputEvent;

/// An embedded view that a scope forwards events into.
///
/// Implementors report consumption with an explicit boolean return; there is
/// no shared handled flag. A view may also report itself inactive, which
/// makes its scope transparent without removing it from the chain (a hidden
/// console, an unmounted overlay).
pub trait SubView {
    /// Whether the view currently participates in routing.
    ///
    /// Inactive views are skipped; their scope reports the event unconsumed.
    fn is_active(&self) -> bool {
        true
    }

    /// Handle one event, returning `true` if it was consumed.
    fn handle_event(&mut self, event: &InputEvent) -> bool;
}

/// One ordered routing node in a window's chain.
///
/// A scope is a pure forwarding adapter: it owns at most one embedded
/// [`SubView`] and reports whatever consumption signal that view returns. A
/// scope with no view (declared but not wired) always reports `false`; a
/// partially initialized window stays usable.
pub struct EventScope {
    name: Option<&'static str>,
    view: Option<Box<dyn SubView>>,
}

impl EventScope {
    /// A scope with a name but no embedded view.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            view: None,
        }
    }

    /// A scope forwarding into `view`.
    #[must_use]
    pub fn forwarding(name: &'static str, view: Box<dyn SubView>) -> Self {
        Self {
            name: Some(name),
            view: Some(view),
        }
    }

    /// An anonymous scope forwarding into `view`.
    #[must_use]
    pub fn anonymous(view: Box<dyn SubView>) -> Self {
        Self {
            name: None,
            view: Some(view),
        }
    }

    /// The scope's name, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Forward `event` into the embedded view.
    ///
    /// Returns the view's consumption report, or `false` when there is no
    /// view or the view is inactive.
    pub fn process_event(&mut self, event: &InputEvent) -> bool {
        match &mut self.view {
            Some(view) if view.is_active() => view.handle_event(event),
            _ => false,
        }
    }
}

impl fmt::Debug for EventScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventScope")
            .field("name", &self.name)
            .field("wired", &self.view.is_some())
            .finish()
    }
}

/// An ordered list of scopes with first-consumer-wins routing.
///
/// Chains are short (a handful of scopes per window), so entries are stored
/// inline. Order is fixed by construction; [`ScopeChain::route`] never
/// reorders or skips ahead.
#[derive(Debug, Default)]
pub struct ScopeChain {
    scopes: SmallVec<[EventScope; 4]>,
}

impl ScopeChain {
    /// An empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scope at the end of the chain.
    pub fn push(&mut self, scope: EventScope) {
        self.scopes.push(scope);
    }

    /// The number of scopes in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Whether the chain has no scopes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// The scope at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&EventScope> {
        self.scopes.get(index)
    }

    /// Walk the chain in declared order, stopping at the first scope that
    /// consumes `event`.
    ///
    /// Returns the index of the consuming scope, or `None` when every scope
    /// declined. Scopes after the consumer are never invoked.
    pub fn route(&mut self, event: &InputEvent) -> Option<usize> {
        for (index, scope) in self.scopes.iter_mut().enumerate() {
            if scope.process_event(event) {
                return Some(index);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::*;
    use crate::event::{InputEvent, Keycode};

    struct Counting {
        calls: Rc<Cell<u32>>,
        consume: bool,
        active: bool,
    }

    impl SubView for Counting {
        fn is_active(&self) -> bool {
            self.active
        }

        fn handle_event(&mut self, _event: &InputEvent) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.consume
        }
    }

    fn counting(consume: bool) -> (EventScope, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let scope = EventScope::anonymous(Box::new(Counting {
            calls: calls.clone(),
            consume,
            active: true,
        }));
        (scope, calls)
    }

    #[test]
    fn first_consumer_wins() {
        let (first, first_calls) = counting(false);
        let (second, second_calls) = counting(true);
        let (third, third_calls) = counting(true);

        let mut chain = ScopeChain::new();
        chain.push(first);
        chain.push(second);
        chain.push(third);

        let consumed = chain.route(&InputEvent::key_down(Keycode::W));
        assert_eq!(consumed, Some(1));
        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 1);
        // The scope after the consumer must never be invoked.
        assert_eq!(third_calls.get(), 0);
    }

    #[test]
    fn unwired_scope_declines() {
        let mut scope = EventScope::named("console");
        assert!(!scope.process_event(&InputEvent::key_down(Keycode::Enter)));
        assert_eq!(scope.name(), Some("console"));
    }

    #[test]
    fn inactive_view_is_skipped() {
        let calls = Rc::new(Cell::new(0));
        let mut chain = ScopeChain::new();
        chain.push(EventScope::anonymous(Box::new(Counting {
            calls: calls.clone(),
            consume: true,
            active: false,
        })));
        let (tail, tail_calls) = counting(true);
        chain.push(tail);

        let consumed = chain.route(&InputEvent::key_down(Keycode::W));
        assert_eq!(consumed, Some(1));
        assert_eq!(calls.get(), 0);
        assert_eq!(tail_calls.get(), 1);
    }

    #[test]
    fn empty_chain_routes_nothing() {
        let mut chain = ScopeChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.route(&InputEvent::Update { delta_time: 0.016 }), None);
    }
}
