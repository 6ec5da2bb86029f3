//! Create/lookup interaction workflow.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::domain::entities::{
    CreateRequest, CreateResult, InteractionState, LookupRequest, LookupResult,
};
use crate::domain::ports::LinkApi;
use crate::error::ClientError;

/// Fallback shown when creation fails without a service-supplied message.
pub const CREATE_FALLBACK_MESSAGE: &str = "create failed";

/// Fallback shown when lookup fails without a service-supplied message.
pub const LOOKUP_FALLBACK_MESSAGE: &str = "lookup failed";

/// State of one operation plus the sequence number of its latest request.
///
/// Issuing a sequence number and writing a settled outcome both happen under
/// the watch channel's write lock, so a response can only land while its
/// sequence number is still the newest one.
struct Slot<T> {
    name: &'static str,
    latest: AtomicU64,
    state: watch::Sender<InteractionState<T>>,
}

impl<T: Clone> Slot<T> {
    fn new(name: &'static str) -> Self {
        let (state, _) = watch::channel(InteractionState::Idle);
        Self {
            name,
            latest: AtomicU64::new(0),
            state,
        }
    }

    /// Moves to `state` and invalidates every request issued so far.
    ///
    /// Returns the new sequence number.
    fn replace(&self, state: InteractionState<T>) -> u64 {
        let mut seq = 0;
        self.state.send_modify(|current| {
            seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *current = state;
        });
        seq
    }

    /// Starts a new request cycle.
    fn begin(&self) -> u64 {
        let seq = self.replace(InteractionState::Pending);
        tracing::debug!(operation = self.name, seq, "request issued");
        seq
    }

    /// Writes `outcome` if `seq` is still the latest request of this slot.
    fn settle(&self, seq: u64, outcome: InteractionState<T>) -> bool {
        let label = outcome.label();
        let applied = self.state.send_if_modified(|current| {
            if self.latest.load(Ordering::SeqCst) == seq {
                *current = outcome;
                true
            } else {
                false
            }
        });

        if applied {
            tracing::debug!(operation = self.name, seq, outcome = label, "request settled");
        } else {
            tracing::debug!(
                operation = self.name,
                seq,
                outcome = label,
                "discarding response superseded by a newer request"
            );
        }

        applied
    }

    fn snapshot(&self) -> InteractionState<T> {
        self.state.borrow().clone()
    }
}

/// Drives the create and lookup cycles against a [`LinkApi`].
///
/// The controller is the only writer of both interaction states. The two
/// operations are independent: a pending create never affects lookup state
/// and vice versa.
///
/// # Re-entry
///
/// Submitting while a request of the same operation is pending starts a new
/// cycle. The superseded request is not cancelled, but its response is
/// discarded: only the most recently issued request can write the state.
/// A local validation failure counts as a new submission and also
/// supersedes any pending request.
///
/// # Errors
///
/// Submissions never return an error. Every failure ends in
/// [`InteractionState::Failed`] with a display message chosen by
/// [`ClientError::display_message`].
pub struct LinkWorkflow<A: LinkApi> {
    api: Arc<A>,
    create: Slot<CreateResult>,
    lookup: Slot<LookupResult>,
}

impl<A: LinkApi> LinkWorkflow<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            create: Slot::new("create"),
            lookup: Slot::new("lookup"),
        }
    }

    /// Submits a create request from raw form input.
    ///
    /// An empty URL (after trimming) fails locally with `"missing URL"`
    /// before anything is awaited; no request is sent. An empty custom code
    /// is omitted from the request.
    ///
    /// Returns the outcome of this submission. The slot state reflects it
    /// only if no newer submission was issued meanwhile.
    pub async fn submit_create(
        &self,
        raw_url: &str,
        raw_custom_code: &str,
    ) -> InteractionState<CreateResult> {
        self.submit_create_with_expiry(raw_url, raw_custom_code, None)
            .await
    }

    /// Like [`Self::submit_create`], additionally requesting an expiry time.
    ///
    /// The expiry is passed through as is; the service decides whether it is
    /// acceptable.
    pub async fn submit_create_with_expiry(
        &self,
        raw_url: &str,
        raw_custom_code: &str,
        expire_at: Option<DateTime<Utc>>,
    ) -> InteractionState<CreateResult> {
        let request = match CreateRequest::new(raw_url, raw_custom_code) {
            Ok(request) => request.with_expire_at(expire_at),
            Err(e) => return self.reject(&self.create, &e, CREATE_FALLBACK_MESSAGE),
        };

        let seq = self.create.begin();

        let outcome = match self.api.shorten(&request).await {
            Ok(result) => {
                tracing::info!(code = %result.code, short_url = %result.short_url, "short link created");
                InteractionState::Succeeded(result)
            }
            Err(e) => InteractionState::Failed(normalize_error(
                self.create.name,
                &e,
                CREATE_FALLBACK_MESSAGE,
            )),
        };

        self.create.settle(seq, outcome.clone());
        outcome
    }

    /// Submits a lookup request from raw form input.
    ///
    /// An empty code (after trimming) fails locally with `"missing code"`,
    /// and `.` or `..` with `"invalid code"`; no request is sent. Otherwise mirrors [`Self::submit_create`].
    pub async fn submit_lookup(&self, raw_code: &str) -> InteractionState<LookupResult> {
        let request = match LookupRequest::new(raw_code) {
            Ok(request) => request,
            Err(e) => return self.reject(&self.lookup, &e, LOOKUP_FALLBACK_MESSAGE),
        };

        let seq = self.lookup.begin();

        let outcome = match self.api.lookup(&request).await {
            Ok(result) => {
                tracing::info!(code = %result.code, clicks = result.click_count, "short link found");
                InteractionState::Succeeded(result)
            }
            Err(e) => InteractionState::Failed(normalize_error(
                self.lookup.name,
                &e,
                LOOKUP_FALLBACK_MESSAGE,
            )),
        };

        self.lookup.settle(seq, outcome.clone());
        outcome
    }

    pub fn create_state(&self) -> InteractionState<CreateResult> {
        self.create.snapshot()
    }

    pub fn lookup_state(&self) -> InteractionState<LookupResult> {
        self.lookup.snapshot()
    }

    /// Subscribes to create state changes.
    pub fn subscribe_create(&self) -> watch::Receiver<InteractionState<CreateResult>> {
        self.create.state.subscribe()
    }

    /// Subscribes to lookup state changes.
    pub fn subscribe_lookup(&self) -> watch::Receiver<InteractionState<LookupResult>> {
        self.lookup.state.subscribe()
    }

    /// Returns the create slot to `Idle`, discarding any pending response.
    pub fn reset_create(&self) {
        self.create.replace(InteractionState::Idle);
    }

    /// Returns the lookup slot to `Idle`, discarding any pending response.
    pub fn reset_lookup(&self) {
        self.lookup.replace(InteractionState::Idle);
    }

    /// Checks that the service is reachable. Does not touch either slot.
    pub async fn check_health(&self) -> Result<(), ClientError> {
        self.api.health().await
    }

    fn reject<T: Clone>(
        &self,
        slot: &Slot<T>,
        error: &ClientError,
        fallback: &str,
    ) -> InteractionState<T> {
        let message = error.display_message(fallback);
        tracing::debug!(operation = slot.name, %message, "rejected locally");

        slot.replace(InteractionState::Failed(message.clone()));
        InteractionState::Failed(message)
    }
}

/// Reduces an error to its display message, logging the technical detail.
fn normalize_error(operation: &'static str, error: &ClientError, fallback: &str) -> String {
    match error {
        ClientError::Transport(detail) => {
            tracing::warn!(operation, %detail, "request did not complete");
        }
        ClientError::Service { status, message } => {
            tracing::info!(operation, status, ?message, "service rejected request");
        }
        ClientError::Validation { message } => {
            tracing::debug!(operation, %message, "validation failed");
        }
    }

    error.display_message(fallback)
}
