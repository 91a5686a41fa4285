use crate::{Signal, SubId, signal};

/// A state snapshot that advances through a pure transition function.
pub trait StateHolder: Clone + 'static {
    type Event;

    fn reduce(&self, event: Self::Event) -> Self;
}

/// Holds the current snapshot of a [`StateHolder`] and swaps in a new one
/// per event. Cloning yields another handle to the same snapshot.
pub struct Store<S: StateHolder> {
    state: Signal<S>,
}

impl<S: StateHolder> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<S: StateHolder> Store<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: signal(initial),
        }
    }

    pub fn get(&self) -> S {
        self.state.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        self.state.with(f)
    }

    /// The snapshot `event` would produce, without committing it.
    pub fn preview(&self, event: S::Event) -> S {
        self.state.with(|s| s.reduce(event))
    }

    pub fn dispatch(&self, event: S::Event) {
        let next = self.preview(event);
        self.commit(next);
    }

    pub fn commit(&self, next: S) {
        self.state.set(next);
    }

    pub fn subscribe(&self, f: impl Fn(&S) + 'static) -> SubId {
        self.state.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.state.unsubscribe(id);
    }
}
