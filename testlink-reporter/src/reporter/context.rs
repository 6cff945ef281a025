// Copyright (c) The testlink-junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{
    any::Any,
    cell::RefCell,
    collections::HashMap,
    fmt,
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static SLOTS: RefCell<HashMap<u64, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// A value of type `T` per (instance, thread) pair.
///
/// Unlike a bare `thread_local!`, two instances used from the same thread see separate values.
/// Each thread starts out with `T::default()`.
///
/// Dropping an instance frees only the dropping thread's value. Values on other threads live
/// until those threads exit, so a long-lived pool that serves many instances holds one small
/// value per (instance, worker) pair for its lifetime.
pub(crate) struct ThreadScoped<T> {
    id: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Default + 'static> ThreadScoped<T> {
    pub(crate) fn new() -> Self {
        Self {
            id: NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed),
            _marker: PhantomData,
        }
    }

    /// Runs `f` against this thread's value.
    ///
    /// `f` must not call back into any `ThreadScoped`.
    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        SLOTS.with(|slots| {
            let mut slots = slots.borrow_mut();
            let slot = slots
                .entry(self.id)
                .or_insert_with(|| Box::new(T::default()));
            match slot.downcast_mut::<T>() {
                Some(value) => f(value),
                None => unreachable!("scope IDs are never reused across types"),
            }
        })
    }

    /// Replaces this thread's value, returning the previous one.
    pub(crate) fn replace(&self, value: T) -> T {
        self.with(|current| std::mem::replace(current, value))
    }
}

impl<T> fmt::Debug for ThreadScoped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadScoped").field("id", &self.id).finish()
    }
}

impl<T> Drop for ThreadScoped<T> {
    fn drop(&mut self) {
        // Other threads' values for this ID are unreachable from here; they are freed when
        // those threads exit.
        let _ = SLOTS.try_with(|slots| {
            if let Ok(mut slots) = slots.try_borrow_mut() {
                slots.remove(&self.id);
            }
        });
    }
}
