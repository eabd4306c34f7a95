//! Debounced conflict pre-checking.
//!
//! Edits to the watched draft fields (professor, room, day, start, end)
//! re-arm a single pending deadline; once it elapses on a tick, the draft
//! is validated against backend-known bookings. A check with incomplete
//! timing fields is suppressed outright, not deferred. The result gates
//! save until the next watched change makes it stale.

use std::time::{Duration, Instant};

use crate::models::edit::{ConflictQuery, ConflictResult, EditDraft};
use crate::services::api::{ApiError, ScheduleBackend};

/// Quiet period absorbed before a check fires.
pub const CONFLICT_DEBOUNCE: Duration = Duration::from_millis(220);

/// Handle for one issued check; completion is matched back through it.
#[derive(Debug)]
pub struct ConflictTicket {
    seq: u64,
    pub query: ConflictQuery,
}

#[derive(Default)]
pub struct ConflictChecker {
    deadline: Option<Instant>,
    issued_seq: u64,
    applied_seq: u64,
    result: ConflictResult,
    stale: bool,
}

impl ConflictChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> ConflictResult {
        self.result
    }

    /// True from the moment a watched field changes until a later check
    /// lands successfully.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn has_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Save is refused while the last known result reports a conflict.
    pub fn blocks_save(&self) -> bool {
        self.result.conflict
    }

    /// A watched draft field changed: supersede any pending check and mark
    /// the current result stale.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + CONFLICT_DEBOUNCE);
        self.stale = true;
    }

    /// Clear an unfired deadline. An already-issued check is unaffected.
    pub fn cancel_pending(&mut self) {
        self.deadline = None;
    }

    /// Consume the deadline if it has elapsed. Returns a ticket when the
    /// draft has complete timing fields; otherwise the check is suppressed
    /// entirely and nothing goes out.
    pub fn begin(&mut self, now: Instant, draft: &EditDraft) -> Option<ConflictTicket> {
        let due = self.deadline.is_some_and(|deadline| now >= deadline);
        if !due {
            return None;
        }
        self.deadline = None;

        let Some(query) = ConflictQuery::from_draft(draft) else {
            log::debug!("Conflict check suppressed: day/start/end incomplete");
            return None;
        };

        self.issued_seq += 1;
        Some(ConflictTicket {
            seq: self.issued_seq,
            query,
        })
    }

    /// Land a check result. Success replaces the result wholesale when the
    /// ticket is not outdated; failure keeps the prior (stale) result and
    /// is fatal to that check only.
    pub fn complete(&mut self, ticket: ConflictTicket, result: Result<ConflictResult, ApiError>) {
        if ticket.seq <= self.applied_seq {
            log::debug!(
                "Discarding stale conflict response (seq {} <= applied {})",
                ticket.seq,
                self.applied_seq
            );
            return;
        }

        match result {
            Ok(conflict) => {
                self.applied_seq = ticket.seq;
                self.result = conflict;
                if ticket.seq == self.issued_seq {
                    self.stale = false;
                }
            }
            Err(err) => {
                log::warn!("Conflict check failed, keeping previous result: {:#}", err);
            }
        }
    }

    /// Production path: issue and land a check synchronously if one is due.
    pub fn run_due(
        &mut self,
        now: Instant,
        draft: &EditDraft,
        backend: &dyn ScheduleBackend,
    ) -> bool {
        let Some(ticket) = self.begin(now, draft) else {
            return false;
        };
        let result = backend.check_conflict(&ticket.query);
        self.complete(ticket, result);
        true
    }
}
