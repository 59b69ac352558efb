//! Single-value Actor.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// State owned by one async processing loop.
///
/// Only the processor receives the `Mutable`; everybody else reads the state
/// through signals. Events are handled one at a time, so a mutation and the
/// projections derived from it settle before the next event is looked at.
///
/// ```rust
/// let (add_shadow_button_pressed_relay, mut add_stream) = relay();
/// let list = Actor::new(ShadowList::new(), async move |state| {
///     while let Some(()) = add_stream.next().await {
///         state.lock_mut().add_layer();
///     }
/// });
/// list.signal_ref(|list| box_shadow_style(list.layers()))
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));
        Self { state, task_handle }
    }

    pub fn signal(&self) -> impl Signal<Item = T> + Unpin + use<T> {
        self.state.signal_cloned()
    }

    /// Derived signal computed from a borrowed state, avoiding a clone of the
    /// whole value on every change.
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + Unpin + use<T, U, F>
    where
        U: PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + Unpin + 'static,
    {
        self.state.signal_ref(f)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dataflow::relay;
    use futures::StreamExt;
    use wasm_bindgen_test::wasm_bindgen_test;
    use zoon::SignalExt;

    #[wasm_bindgen_test]
    async fn processes_events_sequentially() {
        let (value_typed_relay, mut value_typed_stream) = relay::<String>();
        let actor = Actor::new(String::new(), async move |state| {
            while let Some(text) = value_typed_stream.next().await {
                state.lock_mut().push_str(&text);
            }
        });

        value_typed_relay.send("1".to_string());
        value_typed_relay.send("2".to_string());
        gloo_timers::future::TimeoutFuture::new(10).await;

        let value = actor.signal().to_stream().next().await;
        assert_eq!(value.as_deref(), Some("12"));
    }
}
