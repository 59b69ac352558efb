//! Local UI state.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

/// Small piece of view-local state (an expanded panel, a hover flag) kept on
/// the same Actor+Relay footing as the domain state.
///
/// ```rust
/// let expanded = Atom::new(false);
/// expanded.toggle();
/// El::new().child_signal(expanded.signal().map(|open| open.then(panel)))
/// ```
#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    modifier: Relay<fn(&T) -> T>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        let (modifier, mut modifier_stream) = relay::<fn(&T) -> T>();
        let actor = Actor::new(initial, async move |state| {
            while let Some(modify) = modifier_stream.next().await {
                let new_value = modify(&state.lock_ref());
                state.set(new_value);
            }
        });
        Self { actor, modifier }
    }

    pub fn signal(&self) -> impl Signal<Item = T> + Unpin + use<T> {
        self.actor.signal()
    }
}

impl Atom<bool> {
    pub fn toggle(&self) {
        self.modifier.send(|flag| !flag);
    }
}
