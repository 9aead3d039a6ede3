//! The fetch/render lifecycle both screens share.
//!
//! A cycle runs Loading -> one outbound call -> Loaded or Failed, with the
//! loading flag cleared at the end of every current cycle. Starting a new
//! cycle supersedes any fetch still in flight; a superseded result that
//! lands late is discarded by generation token, the same effect
//! `use_resource` gets by cancelling its previous task.

use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;

/// What a screen currently renders.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Token tying an in-flight fetch to the cycle that dispatched it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation(u64);

/// Generation-counted fetch state, independent of any UI runtime.
#[derive(Debug, Default)]
pub struct Lifecycle {
    current: u64,
    loading: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, superseding any fetch still in flight.
    pub fn begin(&mut self) -> Generation {
        self.current += 1;
        self.loading = true;
        Generation(self.current)
    }

    /// Finish a cycle. Returns the terminal state to render, or `None` when
    /// a newer cycle has started since `generation` was handed out.
    pub fn resolve<T, E: Display>(
        &mut self,
        generation: Generation,
        result: Result<T, E>,
    ) -> Option<RemoteState<T>> {
        if generation != Generation(self.current) {
            return None;
        }
        self.loading = false;
        Some(match result {
            Ok(value) => RemoteState::Loaded(value),
            Err(err) => RemoteState::Failed(err.to_string()),
        })
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Drive a [`Lifecycle`] from a component: dispatch one fetch per distinct
/// `key` value, never on mere re-renders, and publish the state through a
/// signal. Failures land in the state as display text and on the tracing
/// channel; nothing is retried.
pub fn use_remote<K, T, E, F, Fut>(key: K, fetch: F) -> ReadOnlySignal<RemoteState<T>>
where
    K: PartialEq + Clone + 'static,
    T: 'static,
    E: Display + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let mut state = use_signal(|| RemoteState::Loading);
    let lifecycle = use_hook(|| Rc::new(RefCell::new(Lifecycle::new())));

    use_effect(use_reactive((&key,), move |(key,)| {
        let generation = lifecycle.borrow_mut().begin();
        state.set(RemoteState::Loading);
        let fut = fetch(key);
        let lifecycle = Rc::clone(&lifecycle);
        spawn(async move {
            let result = fut.await;
            if let Err(err) = &result {
                tracing::warn!("fetch failed: {err}");
            }
            if let Some(resolved) = lifecycle.borrow_mut().resolve(generation, result) {
                state.set(resolved);
            }
        });
    }));

    state.into()
}
