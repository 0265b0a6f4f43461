//! Keyed state machine with explicit enter/update/exit phases.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::StateError;

/// A single state in a [`StateMachine`].
///
/// `on_update` returns the key of the state to run next; returning the
/// current key stays in the state.
pub trait State<K> {
    /// Called when this state is entered.
    fn on_enter(&mut self) {}

    /// Called once per tick while this state is current. Returns the key of
    /// the next state.
    fn on_update(&mut self, dt: f32) -> K;

    /// Called when this state is exited.
    fn on_exit(&mut self) {}
}

/// Owns one state object per key and drives transitions between them.
///
/// Transitions happen only through `on_update` return values; entering a key
/// no object was registered for is a hard error, surfaced on the update that
/// would run it.
pub struct StateMachine<K> {
    /// Registered state objects.
    states: HashMap<K, Box<dyn State<K>>>,
    /// Key of the current state.
    current: K,
    /// Observer invoked as `(from, to)` after each transition.
    observer: Option<Box<dyn FnMut(K, K)>>,
}

impl<K> StateMachine<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Creates a machine starting in `initial`. No enter callback runs for
    /// the initial state.
    #[must_use]
    pub fn new(initial: K) -> Self {
        Self {
            states: HashMap::new(),
            current: initial,
            observer: None,
        }
    }

    /// Registers the state object for `key`, replacing any previous one.
    pub fn insert(&mut self, key: K, state: impl State<K> + 'static) {
        self.states.insert(key, Box::new(state));
    }

    /// Registers an observer invoked after every transition with the exited
    /// and entered keys.
    pub fn on_transition(&mut self, observer: impl FnMut(K, K) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// The key of the current state.
    #[must_use]
    pub fn current(&self) -> K {
        self.current
    }

    /// Runs the current state for one tick and performs a transition if it
    /// requested one.
    ///
    /// # Errors
    ///
    /// [`StateError::MissingState`] if the current state, or the state being
    /// entered, has no registered object.
    pub fn update(&mut self, dt: f32) -> Result<(), StateError> {
        let next = {
            let Some(state) = self.states.get_mut(&self.current) else {
                return Err(Self::missing(self.current));
            };
            state.on_update(dt)
        };

        if next == self.current {
            return Ok(());
        }

        if let Some(state) = self.states.get_mut(&self.current) {
            state.on_exit();
        }

        let previous = self.current;
        self.current = next;

        let Some(state) = self.states.get_mut(&self.current) else {
            return Err(Self::missing(self.current));
        };
        state.on_enter();

        if let Some(observer) = self.observer.as_mut() {
            observer(previous, next);
        }

        Ok(())
    }

    fn missing(key: K) -> StateError {
        StateError::MissingState {
            state: format!("{key:?}"),
        }
    }
}
