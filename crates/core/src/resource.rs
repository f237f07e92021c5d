//! The uniform fetch lifecycle shared by every resource binding.
//!
//! A resource holds a [`ResourceState`] and drives it through the same
//! transitions regardless of what it fetches: `begin` marks a request in
//! flight, `settle` applies its outcome. Settled data is tagged with its
//! origin ([`ResourceData`]) so a live server payload and a fixture
//! substitute can never be confused or mixed.

use crate::errors::{Error, Result};

/// A settled payload, tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceData<T> {
    /// Decoded live server payload.
    Live(T),
    /// Fixture substitute, used while the backend is unreachable.
    Fallback(T),
}

impl<T> ResourceData<T> {
    pub fn get(&self) -> &T {
        match self {
            ResourceData::Live(value) | ResourceData::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            ResourceData::Live(value) | ResourceData::Fallback(value) => value,
        }
    }

    /// True when this payload is fixture data rather than a live response.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResourceData::Fallback(_))
    }
}

/// Per-resource fetch state: `{data, loading, error}` plus the request
/// generation.
///
/// The generation counter makes overlapping fetches safe: each `begin`
/// invalidates all earlier tickets, and a settlement carrying a stale
/// ticket is discarded instead of overwriting newer state.
#[derive(Debug)]
pub struct ResourceState<T> {
    data: Option<ResourceData<T>>,
    error: Option<Error>,
    loading: bool,
    generation: u64,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            generation: 0,
        }
    }
}

impl<T> ResourceState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a request in flight and returns its ticket.
    ///
    /// Clears any previous error; data from the previous settlement stays
    /// visible until the new outcome lands.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a request outcome.
    ///
    /// Returns false (and changes nothing) when `ticket` has been
    /// superseded by a newer `begin`. Otherwise:
    /// - success stores the payload as [`ResourceData::Live`];
    /// - an offline failure stores the `fallback` slice as
    ///   [`ResourceData::Fallback`] when one exists;
    /// - any other failure lands in the error slot, leaving previous data
    ///   in place.
    pub fn settle<F>(&mut self, ticket: u64, outcome: Result<T>, fallback: F) -> bool
    where
        F: FnOnce() -> Option<T>,
    {
        if ticket != self.generation {
            return false;
        }
        match outcome {
            Ok(value) => {
                self.data = Some(ResourceData::Live(value));
                self.error = None;
            }
            Err(err) if err.is_offline() => match fallback() {
                Some(substitute) => {
                    self.data = Some(ResourceData::Fallback(substitute));
                    self.error = None;
                }
                None => {
                    self.error = Some(err);
                }
            },
            Err(err) => {
                self.error = Some(err);
            }
        }
        self.loading = false;
        true
    }

    /// Resets the state to its initial, unsettled form.
    ///
    /// Bumps the generation so any in-flight settlement is discarded.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.data = None;
        self.error = None;
        self.loading = false;
    }

    pub fn data(&self) -> Option<&ResourceData<T>> {
        self.data.as_ref()
    }

    pub fn value(&self) -> Option<&T> {
        self.data.as_ref().map(ResourceData::get)
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once a fetch for the current inputs has settled with data.
    pub fn is_settled(&self) -> bool {
        !self.loading && (self.data.is_some() || self.error.is_some())
    }
}
