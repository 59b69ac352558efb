//! Collection Actor exposing `SignalVec` diffs.

use std::future::Future;
use std::sync::Arc;
use zoon::{MutableVec, SignalVec, Task, TaskHandle};

/// Collection owned by one async processing loop.
///
/// Views bind to [`ActorVec::signal_vec`], which only reports the items that
/// were pushed or removed, so existing child elements (and their local UI
/// state) survive unrelated changes.
#[derive(Clone, Debug)]
pub struct ActorVec<T>
where
    T: Clone + Send + Sync + 'static,
{
    vec: MutableVec<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> ActorVec<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial_items: Vec<T>, processor: F) -> Self
    where
        F: FnOnce(ActorVecHandle<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let vec = MutableVec::new_with_values(initial_items);
        let handle = ActorVecHandle {
            mutable_vec: vec.clone(),
        };
        let task_handle = Arc::new(Task::start_droppable(processor(handle)));
        Self { vec, task_handle }
    }

    pub fn signal_vec(&self) -> impl SignalVec<Item = T> + Unpin + use<T> {
        self.vec.signal_vec_cloned()
    }
}

/// Mutation access handed to the processor of an [`ActorVec`].
pub struct ActorVecHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    mutable_vec: MutableVec<T>,
}

impl<T> ActorVecHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn push_cloned(&self, item: T) {
        self.mutable_vec.lock_mut().push_cloned(item);
    }

    /// Keeps the items `f` accepts; returns how many were removed.
    pub fn retain<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut items = self.mutable_vec.lock_mut();
        let initial_len = items.len();
        items.retain(|item| f(item));
        initial_len - items.len()
    }
}
