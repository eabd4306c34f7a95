//! Debounced schedule fetching.
//!
//! Rapid filter changes collapse into at most one query per debounce
//! window: each trigger re-arms a single pending deadline, superseding the
//! previous one, and the query only fires once the deadline elapses on a
//! tick. An already-issued query is never cancelled; its response lands
//! subject to a monotonic staleness guard so an old in-flight result can
//! never overwrite a newer one.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::models::filters::ScheduleFilters;
use crate::models::schedule::TimeBlock;
use crate::services::api::ScheduleBackend;
use crate::services::board::ScheduleBoard;

/// Quiet period absorbed before a query fires.
pub const FETCH_DEBOUNCE: Duration = Duration::from_millis(160);

/// Handle for one issued fetch; completion is matched back through it.
#[derive(Debug)]
pub struct FetchTicket {
    seq: u64,
}

#[derive(Default)]
pub struct FetchCoordinator {
    filters: ScheduleFilters,
    deadline: Option<Instant>,
    issued_seq: u64,
    applied_seq: u64,
    loading: bool,
    last_warning: Option<String>,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &ScheduleFilters {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The latest fetch warning, if any. Consuming clears it; the warning
    /// is informational and never blocks rendering.
    pub fn take_warning(&mut self) -> Option<String> {
        self.last_warning.take()
    }

    /// Replace the filter state and schedule a refresh.
    pub fn apply_filters(&mut self, filters: ScheduleFilters, now: Instant) {
        self.filters = filters;
        self.request(now);
    }

    /// Arm (or re-arm) the debounce deadline. Last write wins.
    pub fn request(&mut self, now: Instant) {
        self.deadline = Some(now + FETCH_DEBOUNCE);
    }

    /// Clear an unfired deadline. An already-issued query is unaffected.
    pub fn cancel_pending(&mut self) {
        self.deadline = None;
    }

    /// Consume the deadline if it has elapsed and open a ticket for the
    /// query about to be issued. The loading flag stays set until the
    /// newest ticket completes.
    pub fn begin(&mut self, now: Instant) -> Option<FetchTicket> {
        let due = self.deadline.is_some_and(|deadline| now >= deadline);
        if !due {
            return None;
        }
        self.deadline = None;
        self.loading = true;
        self.issued_seq += 1;
        Some(FetchTicket {
            seq: self.issued_seq,
        })
    }

    /// Land a query result. Responses older than one already applied are
    /// discarded; everything else replaces the raw set wholesale (empty on
    /// failure, with a non-fatal warning) and finalizes by recomputing the
    /// window and layout through the board. Only the newest ticket's
    /// completion clears the loading flag.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<TimeBlock>>,
        board: &mut ScheduleBoard,
    ) {
        let is_newest = ticket.seq == self.issued_seq;

        if ticket.seq <= self.applied_seq {
            log::debug!(
                "Discarding stale fetch response (seq {} <= applied {})",
                ticket.seq,
                self.applied_seq
            );
            return;
        }
        self.applied_seq = ticket.seq;

        match result {
            Ok(blocks) => {
                board.replace_raw_data(blocks);
            }
            Err(err) => {
                log::warn!("Could not fetch schedules: {:#}", err);
                self.last_warning = Some("Could not fetch schedules".to_string());
                board.replace_raw_data(Vec::new());
            }
        }

        if is_newest {
            self.loading = false;
        }
    }

    /// Production path: if the deadline has elapsed, default-fill the
    /// filters, run the query synchronously and land the result. Returns
    /// whether a query was issued.
    pub fn run_due(
        &mut self,
        now: Instant,
        backend: &dyn ScheduleBackend,
        board: &mut ScheduleBoard,
    ) -> bool {
        let Some(ticket) = self.begin(now) else {
            return false;
        };

        let result = match self.fill_active_defaults(backend) {
            Ok(()) => backend
                .query_schedules(&self.filters)
                .context("querying schedules"),
            Err(err) => Err(err),
        };
        self.complete(ticket, result, board);
        true
    }

    /// Resolve unset school-year/semester filters to the backend's active
    /// ones before querying. Default-filling, not validation: a backend
    /// with no active row simply leaves the filter unset.
    fn fill_active_defaults(&mut self, backend: &dyn ScheduleBackend) -> Result<()> {
        if self.filters.school_year_id.is_none() {
            if let Some(id) = backend
                .active_school_year()
                .context("resolving active school year")?
            {
                self.filters.school_year_id = Some(id);
            }
        }
        if self.filters.semester_id.is_none() {
            if let Some(id) = backend
                .active_semester()
                .context("resolving active semester")?
            {
                self.filters.semester_id = Some(id);
            }
        }
        Ok(())
    }
}
