//! The idle / loading / ready / error cycle that drives every data page.
//!
//! A page feeds its driving inputs (URL parameters) into a
//! [`FetchLifecycle`]. Whenever the inputs change the lifecycle enters
//! [`FetchState::Loading`] and hands out a [`Ticket`] for exactly one
//! request. The page completes the ticket with the request's result.
//!
//! Every transition into `Loading` bumps a generation counter. A completion
//! carrying an older generation belongs to superseded inputs and is dropped,
//! so a slow response can never overwrite the state of a newer request.

use std::fmt::Display;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    /// Display form of the failure; errors never propagate past the page.
    Error(String),
}

/// Proof that a request was started for a particular generation of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a started fetch must be completed with its ticket"]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct FetchLifecycle<I, T> {
    inputs: Option<I>,
    state: FetchState<T>,
    generation: u64,
}

impl<I, T> Default for FetchLifecycle<I, T> {
    fn default() -> Self {
        Self {
            inputs: None,
            state: FetchState::Idle,
            generation: 0,
        }
    }
}

impl<I: PartialEq, T> FetchLifecycle<I, T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records new driving inputs and starts a fetch for them.
    ///
    /// Returns `None` without touching state when `inputs` equal the current
    /// inputs, so re-rendering with unchanged parameters never refetches.
    pub fn set_inputs(&mut self, inputs: I) -> Option<Ticket> {
        if self.inputs.as_ref() == Some(&inputs) {
            return None;
        }
        self.inputs = Some(inputs);
        Some(self.begin())
    }

    /// Starts a fresh fetch for the current inputs, if any.
    pub fn restart(&mut self) -> Option<Ticket> {
        if self.inputs.is_none() {
            return None;
        }
        Some(self.begin())
    }

    /// Drops the current inputs and returns to `Idle`. Any in-flight
    /// request is invalidated.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.inputs = None;
        self.state = FetchState::Idle;
    }

    /// Applies a finished request's result.
    ///
    /// Returns `false` when the ticket is stale (a newer fetch has started,
    /// or the lifecycle was reset) or was already completed; state is left
    /// unchanged in that case.
    pub fn complete<E: Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding superseded fetch result"
            );
            return false;
        }

        if !matches!(self.state, FetchState::Loading) {
            return false;
        }

        self.state = match result {
            Ok(value) => FetchState::Ready(value),
            Err(e) => {
                tracing::warn!(error = %e, "fetch failed");
                FetchState::Error(e.to_string())
            }
        };
        true
    }

    /// Sets `inputs` and, if they changed, awaits `fetch` for them and
    /// completes the cycle. Returns whether a result was applied.
    pub async fn run<F, Fut, E>(&mut self, inputs: I, fetch: F) -> bool
    where
        I: Clone,
        F: FnOnce(I) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let Some(ticket) = self.set_inputs(inputs.clone()) else {
            return false;
        };
        let result = fetch(inputs).await;
        self.complete(ticket, result)
    }

    fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = FetchState::Loading;
        Ticket {
            generation: self.generation,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    #[must_use]
    pub fn inputs(&self) -> Option<&I> {
        self.inputs.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }
}

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod tests;
