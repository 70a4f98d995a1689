//! One-shot viewport reveal for section entrance animations.
//!
//! Each section owns a [`RevealState`] that starts `Unrevealed` and flips to
//! `Revealed` the first time the section intersects the viewport. The flip is
//! irreversible for the life of the component instance; the underlying
//! `IntersectionObserver` is disconnected as soon as it fires.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible before the reveal fires.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed,
}

impl RevealState {
    /// Applies one intersection record. `Revealed` is terminal.
    pub fn on_intersection(self, is_intersecting: bool) -> Self {
        match self {
            RevealState::Unrevealed if is_intersecting => RevealState::Revealed,
            state => state,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    /// Class list for the render layer: the entrance animation once revealed,
    /// zero opacity before.
    pub fn class(self, animation: &'static str) -> &'static str {
        if self.is_revealed() {
            animation
        } else {
            "reveal-hidden"
        }
    }
}

/// [`use_reveal_with_threshold`] at [`DEFAULT_THRESHOLD`].
#[hook]
pub fn use_reveal(node: NodeRef) -> RevealState {
    use_reveal_with_threshold(node, DEFAULT_THRESHOLD)
}

/// Observes `node` and latches to `Revealed` the first time at least
/// `threshold` of it is visible. An element already inside the viewport at
/// mount still fires, since the observer delivers an initial record for it.
///
/// If the ref has not attached to an element yet, no observation happens for
/// that render pass. Changing either input re-arms the observer (unless the
/// reveal already latched, in which case the state sticks).
#[hook]
pub fn use_reveal_with_threshold(node: NodeRef, threshold: f64) -> RevealState {
    let state = use_state_eq(|| RevealState::Unrevealed);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(node, threshold): &(NodeRef, f64)| {
                let mut teardown: Option<Box<dyn FnOnce()>> = None;

                if let Some(element) = node.cast::<Element>() {
                    let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> =
                        Rc::new(RefCell::new(None));

                    let callback = Closure::wrap(Box::new({
                        let state = state.clone();
                        let observer_slot = observer_slot.clone();
                        move |entries: js_sys::Array, _observer: JsValue| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|entry| entry.is_intersecting())
                                    .unwrap_or(false)
                            });

                            let next = (*state).on_intersection(intersecting);
                            state.set(next);

                            if next.is_revealed() {
                                if let Some(observer) = observer_slot.borrow_mut().take() {
                                    observer.disconnect();
                                }
                            }
                        }
                    })
                        as Box<dyn FnMut(js_sys::Array, JsValue)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(*threshold));

                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        *observer_slot.borrow_mut() = Some(observer);

                        teardown = Some(Box::new(move || {
                            if let Some(observer) = observer_slot.borrow_mut().take() {
                                observer.disconnect();
                            }
                            drop(callback);
                        }));
                    }
                }

                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            (node, threshold),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unrevealed() {
        assert_eq!(RevealState::Unrevealed.is_revealed(), false);
    }

    #[test]
    fn first_intersection_reveals() {
        let state = RevealState::Unrevealed.on_intersection(true);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn non_intersecting_records_never_reveal() {
        let mut state = RevealState::Unrevealed;
        for _ in 0..3 {
            state = state.on_intersection(false);
        }
        assert_eq!(state, RevealState::Unrevealed);
    }

    #[test]
    fn reveal_is_terminal() {
        let state = RevealState::Unrevealed.on_intersection(true);
        // Later records, intersecting or not, are no-ops.
        assert_eq!(state.on_intersection(false), RevealState::Revealed);
        assert_eq!(state.on_intersection(true), RevealState::Revealed);
    }

    #[test]
    fn default_threshold_is_a_tenth_of_the_element() {
        assert!((DEFAULT_THRESHOLD - 0.1).abs() < f64::EPSILON);
        assert!((0.0..=1.0).contains(&DEFAULT_THRESHOLD));
    }

    #[test]
    fn class_swaps_on_reveal() {
        assert_eq!(RevealState::Unrevealed.class("rise-in"), "reveal-hidden");
        assert_eq!(RevealState::Revealed.class("rise-in"), "rise-in");
    }
}
