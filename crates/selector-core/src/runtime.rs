use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{View, ViewId};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

/// Storage that outlives a single composition pass.
#[derive(Default)]
pub struct Composer {
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
    /// Next [`ViewId`] handed out in the current pass.
    pub next_id: ViewId,
}

/// Marks the start of a composition pass; view ids restart at one.
pub struct ComposeGuard {
    _private: (),
}

impl ComposeGuard {
    pub fn begin() -> Self {
        COMPOSER.with(|c| c.borrow_mut().next_id = 1);
        ComposeGuard { _private: () }
    }
}

/// Runs one composition pass and returns the resulting tree.
pub fn compose(build_root: impl FnOnce() -> View) -> View {
    let _guard = ComposeGuard::begin();
    build_root()
}

/// Id for a node built in the current pass. Ids are unique within a pass
/// and follow build order, so the same tree gets the same ids every pass.
pub fn next_view_id() -> ViewId {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let id = c.next_id.max(1);
        c.next_id = id + 1;
        id
    })
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let existing = COMPOSER.with(|c| {
        let c = c.borrow();
        let slot = c.keyed_slots.get(&key)?;
        let found = slot.downcast_ref::<Rc<T>>().cloned();
        if found.is_none() {
            log::warn!(
                "remember_with_key: key '{}' reused with a different type; replacing.",
                key
            );
        }
        found
    });
    if let Some(rc) = existing {
        return rc;
    }

    // `init` may itself remember things, so the composer is not borrowed here.
    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| {
        c.borrow_mut().keyed_slots.insert(key, Box::new(rc.clone()));
    });
    rc
}

/// Drops the value stored under `key`. The next `remember_with_key` for the
/// same key starts from its initializer again. Returns whether a value was
/// stored.
pub fn forget_key(key: &str) -> bool {
    COMPOSER.with(|c| c.borrow_mut().keyed_slots.remove(key).is_some())
}
