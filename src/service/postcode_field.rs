// Copyright (c) 2025 - Cowboy AI, Inc.
//! Postcode Field Validation with Supersession
//!
//! Every keystroke in the postcode field triggers a lookup. When lookups are
//! asynchronous their completions can arrive out of order, so each call takes
//! a ticket at invocation time and a state is only published if no later
//! ticket has published already. A slow, stale response can never overwrite
//! a fresh one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, error};

use crate::classifier::{PostcodeLookup, PostcodeResult};

/// What the postcode field currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Input too short for a verdict
    #[default]
    Idle,
    /// A lookup is in flight
    Validating,
    /// Lookup finished
    Ready(PostcodeResult),
    /// Lookup backend failed; the field stays unvalidated
    Failed(String),
}

impl FieldState {
    /// The verdict, if one is available
    pub fn result(&self) -> Option<&PostcodeResult> {
        match self {
            Self::Ready(result) => Some(result),
            _ => None,
        }
    }
}

/// Last-write-wins validator for a single postcode input field
pub struct PostcodeFieldValidator<L: PostcodeLookup> {
    lookup: Arc<L>,
    issued: AtomicU64,
    applied: Mutex<u64>,
    state: watch::Sender<FieldState>,
}

impl<L: PostcodeLookup> PostcodeFieldValidator<L> {
    pub fn new(lookup: Arc<L>) -> Self {
        let (state, _) = watch::channel(FieldState::Idle);
        Self {
            lookup,
            issued: AtomicU64::new(0),
            applied: Mutex::new(0),
            state,
        }
    }

    /// Watch the field state
    pub fn subscribe(&self) -> watch::Receiver<FieldState> {
        self.state.subscribe()
    }

    /// Current field state
    pub fn current(&self) -> FieldState {
        self.state.borrow().clone()
    }

    /// Handle a change of the field's text
    ///
    /// Returns `true` when this call's final state was published, `false`
    /// when a later call superseded it.
    pub async fn on_input(&self, raw: &str, address_line: Option<&str>) -> bool {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        if raw.trim().chars().count() < self.lookup.min_input_length() {
            return self.publish(ticket, FieldState::Idle);
        }

        if !self.publish(ticket, FieldState::Validating) {
            return false;
        }

        let state = match self.lookup.lookup(raw, address_line).await {
            Ok(result) => FieldState::Ready(result),
            Err(e) => {
                error!(input = raw, error = %e, "Postcode lookup failed");
                FieldState::Failed(e.to_string())
            }
        };

        self.publish(ticket, state)
    }

    fn publish(&self, ticket: u64, state: FieldState) -> bool {
        // A poisoned lock still holds a valid ticket number
        let mut applied = self.applied.lock().unwrap_or_else(|e| e.into_inner());
        if ticket < *applied {
            debug!(ticket, applied = *applied, "Dropping superseded postcode state");
            return false;
        }
        *applied = ticket;
        self.state.send_replace(state);
        true
    }
}
