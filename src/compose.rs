//! Creation Flow
//!
//! `Idle -> Submitting -> Idle` around a form. At most one submission is in
//! flight per composer. On success the backend's copy of the new entity goes
//! into the cache and the form is cleared; on failure neither changes.
//!
//! The three steps are separate so a view can hold the composer in a signal
//! and run the request in between: `begin`, the API call, then `settle`.

use leptos::prelude::*;

use crate::cache::{Collection, Placement};
use crate::error::{ApiError, SubmitError};
use crate::forms::Draft;
use crate::session::Author;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composer<D> {
    pub draft: D,
    phase: Phase,
}

impl<D: Draft> Composer<D> {
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Validate and enter `Submitting`. Refuses while a request is pending.
    pub fn begin(&mut self, author: &Author) -> Result<D::Payload, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }
        let payload = self.draft.validate(author).map_err(SubmitError::Invalid)?;
        self.phase = Phase::Submitting;
        Ok(payload)
    }

    /// Apply the outcome of the create call and return to `Idle`.
    pub fn settle<T>(
        &mut self,
        outcome: Result<T, ApiError>,
        cache: &mut Collection<T>,
        placement: Placement,
    ) -> Result<(), ApiError> {
        self.phase = Phase::Idle;
        let created = outcome?;
        cache.insert(created, placement);
        self.draft.clear();
        Ok(())
    }
}

/// `settle` against a view's signals once the request returns.
///
/// `None` means the owning view was unmounted while the request was in
/// flight; the result is dropped and nothing is touched.
pub fn settle_into<D, T>(
    composer: RwSignal<Composer<D>>,
    cache: RwSignal<Collection<T>>,
    outcome: Result<T, ApiError>,
    placement: Placement,
) -> Option<Result<(), ApiError>>
where
    D: Draft + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    composer
        .try_update(|c| cache.try_update(|items| c.settle(outcome, items, placement)))
        .flatten()
}
