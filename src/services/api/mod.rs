//! Backend interface.
//!
//! The calendar consumes a REST backend but never owns its semantics:
//! everything the engine needs is behind the two traits here, so tests and
//! alternative transports plug in at this seam. `http` provides the real
//! reqwest-backed implementation.

pub mod http;

use thiserror::Error;

use crate::models::edit::{ConflictQuery, ConflictResult, ScheduleDetail, ScheduleUpdate, UpdateReceipt};
use crate::models::filters::ScheduleFilters;
use crate::models::reference::{Course, Professor, Room, SchoolYear, Section, Semester, Subject};
use crate::models::schedule::TimeBlock;

/// Transport-level failure talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error calling {endpoint}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("failed to decode response from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The schedule endpoints the core engine depends on.
#[cfg_attr(test, mockall::automock)]
pub trait ScheduleBackend {
    /// `GET /schedules/query?...`
    fn query_schedules(&self, filters: &ScheduleFilters) -> Result<Vec<TimeBlock>, ApiError>;

    /// `GET /schedules/{id}`
    fn fetch_schedule(&self, id: i64) -> Result<ScheduleDetail, ApiError>;

    /// `POST /schedules/check-conflict`
    fn check_conflict(&self, query: &ConflictQuery) -> Result<ConflictResult, ApiError>;

    /// `PUT /schedules/{id}`
    fn update_schedule(&self, id: i64, update: &ScheduleUpdate) -> Result<UpdateReceipt, ApiError>;

    /// `GET /master/active-school-year`, `None` when the backend has no
    /// active year configured.
    fn active_school_year(&self) -> Result<Option<i64>, ApiError>;

    /// `GET /master/active-semester`
    fn active_semester(&self) -> Result<Option<i64>, ApiError>;
}

/// Dropdown-population endpoints, outside the core data path.
#[cfg_attr(test, mockall::automock)]
pub trait ReferenceBackend {
    fn school_years(&self) -> Result<Vec<SchoolYear>, ApiError>;
    fn semesters(&self) -> Result<Vec<Semester>, ApiError>;
    fn courses(&self) -> Result<Vec<Course>, ApiError>;
    fn course(&self, id: i64) -> Result<Course, ApiError>;
    fn sections(&self) -> Result<Vec<Section>, ApiError>;
    fn section(&self, id: i64) -> Result<Section, ApiError>;
    fn rooms(&self) -> Result<Vec<Room>, ApiError>;
    fn professors_by_department(&self, department_id: i64) -> Result<Vec<Professor>, ApiError>;
    fn filtered_subjects(
        &self,
        course_id: i64,
        semester_id: i64,
        year_level: u32,
    ) -> Result<Vec<Subject>, ApiError>;
}

/// Build a query string from flat pairs, silently dropping blank values and
/// percent-encoding the rest. Key order follows the input.
pub fn build_query(pairs: &[(&str, String)]) -> String {
    let mut query = String::new();
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.push_str(&urlencoding::encode(value));
    }
    query
}
