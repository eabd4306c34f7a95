//! Edit session lifecycle.
//!
//! One session per opened drawer: load the draft from the backend, track
//! field edits (watched fields feed the conflict checker), and gate the
//! final save on the last known conflict verdict with a single-flight
//! guard against double submission.

use std::time::Instant;

use anyhow::{anyhow, Context};
use thiserror::Error;

use crate::models::edit::{ConflictResult, EditDraft, ScheduleUpdate, UpdateReceipt};
use crate::models::schedule::DayOfWeek;
use crate::services::api::ScheduleBackend;
use crate::services::conflict::ConflictChecker;
use crate::services::fetch::FetchCoordinator;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("a save is already in progress")]
    SaveInFlight,
    #[error("cannot save while schedule conflicts exist")]
    Conflict,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub struct EditSession {
    draft: EditDraft,
    checker: ConflictChecker,
    saving: bool,
}

impl EditSession {
    /// Open a session for an existing schedule row.
    pub fn load(backend: &dyn ScheduleBackend, schedule_id: i64) -> anyhow::Result<Self> {
        let detail = backend
            .fetch_schedule(schedule_id)
            .with_context(|| format!("loading schedule {} for editing", schedule_id))?;
        Ok(Self::from_draft(EditDraft::from_detail(&detail)))
    }

    pub fn from_draft(draft: EditDraft) -> Self {
        Self {
            draft,
            checker: ConflictChecker::new(),
            saving: false,
        }
    }

    pub fn draft(&self) -> &EditDraft {
        &self.draft
    }

    pub fn conflict(&self) -> ConflictResult {
        self.checker.result()
    }

    pub fn conflict_is_stale(&self) -> bool {
        self.checker.is_stale()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn has_pending_check(&self) -> bool {
        self.checker.has_pending()
    }

    // Watched fields: any change supersedes the pending check and marks the
    // current verdict stale.

    pub fn set_professor(&mut self, professor_id: Option<i64>, now: Instant) {
        self.draft.professor_id = professor_id;
        self.checker.touch(now);
    }

    pub fn set_room(&mut self, room_id: Option<i64>, now: Instant) {
        self.draft.room_id = room_id;
        self.checker.touch(now);
    }

    pub fn set_day(&mut self, day: Option<DayOfWeek>, now: Instant) {
        self.draft.day_of_week = day;
        self.checker.touch(now);
    }

    pub fn set_start_time(&mut self, start_time: Option<String>, now: Instant) {
        self.draft.start_time = start_time;
        self.checker.touch(now);
    }

    pub fn set_end_time(&mut self, end_time: Option<String>, now: Instant) {
        self.draft.end_time = end_time;
        self.checker.touch(now);
    }

    // Unwatched fields.

    pub fn set_subject(&mut self, subject_id: Option<i64>) {
        self.draft.subject_id = subject_id;
    }

    pub fn set_building(&mut self, building: Option<String>) {
        self.draft.building = building;
    }

    pub fn set_section(&mut self, section_id: Option<i64>) {
        self.draft.section_id = section_id;
    }

    /// Run the debounced conflict check if it is due.
    pub fn tick(&mut self, now: Instant, backend: &dyn ScheduleBackend) -> bool {
        self.checker.run_due(now, &self.draft, backend)
    }

    /// Persist the draft.
    ///
    /// Refused without any network call while a save is in flight or while
    /// the last conflict verdict is positive; the in-flight guard is reset
    /// on every exit path. A successful save schedules a debounced refresh
    /// so the calendar picks up the new row.
    pub fn save(
        &mut self,
        backend: &dyn ScheduleBackend,
        fetch: &mut FetchCoordinator,
        now: Instant,
    ) -> Result<UpdateReceipt, SaveError> {
        if self.saving {
            return Err(SaveError::SaveInFlight);
        }
        self.saving = true;

        if self.checker.blocks_save() {
            self.saving = false;
            return Err(SaveError::Conflict);
        }

        let result = self.perform_save(backend);
        self.saving = false;

        match result {
            Ok(receipt) => {
                self.checker.cancel_pending();
                fetch.request(now);
                Ok(receipt)
            }
            Err(err) => Err(err),
        }
    }

    fn perform_save(&self, backend: &dyn ScheduleBackend) -> Result<UpdateReceipt, SaveError> {
        let id = self
            .draft
            .id
            .ok_or_else(|| SaveError::Backend(anyhow!("draft has no schedule id")))?;

        let payload = ScheduleUpdate::from_draft(&self.draft);
        let receipt = backend
            .update_schedule(id, &payload)
            .with_context(|| format!("updating schedule {}", id))?;
        Ok(receipt)
    }

    /// Drawer closed without saving: drop the pending check so no timer
    /// outlives the session.
    pub fn close(&mut self) {
        self.checker.cancel_pending();
    }
}
