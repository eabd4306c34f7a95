//! reqwest-backed implementation of the backend traits.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{build_query, ApiError, ReferenceBackend, ScheduleBackend};
use crate::models::edit::{ConflictQuery, ConflictResult, ScheduleDetail, ScheduleUpdate, UpdateReceipt};
use crate::models::filters::ScheduleFilters;
use crate::models::reference::{Course, Professor, Room, SchoolYear, Section, Semester, Subject};
use crate::models::schedule::TimeBlock;

/// `{ "data": ... }` wrapper used by the master/reference endpoints.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ActiveId {
    id: i64,
}

pub struct HttpScheduleApi {
    client: Client,
    base_url: String,
}

impl HttpScheduleApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build schedule HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .map_err(|source| ApiError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().map_err(|source| ApiError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }

    fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .map_err(|source| ApiError::Network {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().map_err(|source| ApiError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }

    fn get_active_id(&self, path: &str) -> Result<Option<i64>, ApiError> {
        let envelope: Envelope<Option<ActiveId>> = self.get_json(path)?;
        Ok(envelope.data.map(|active| active.id))
    }
}

impl ScheduleBackend for HttpScheduleApi {
    fn query_schedules(&self, filters: &ScheduleFilters) -> Result<Vec<TimeBlock>, ApiError> {
        let query = build_query(&filters.to_query_pairs());
        let path = if query.is_empty() {
            "/schedules/query".to_string()
        } else {
            format!("/schedules/query?{}", query)
        };
        self.get_json(&path)
    }

    fn fetch_schedule(&self, id: i64) -> Result<ScheduleDetail, ApiError> {
        self.get_json(&format!("/schedules/{}", id))
    }

    fn check_conflict(&self, query: &ConflictQuery) -> Result<ConflictResult, ApiError> {
        self.send_json(reqwest::Method::POST, "/schedules/check-conflict", query)
    }

    fn update_schedule(&self, id: i64, update: &ScheduleUpdate) -> Result<UpdateReceipt, ApiError> {
        self.send_json(reqwest::Method::PUT, &format!("/schedules/{}", id), update)
    }

    fn active_school_year(&self) -> Result<Option<i64>, ApiError> {
        self.get_active_id("/master/active-school-year")
    }

    fn active_semester(&self) -> Result<Option<i64>, ApiError> {
        self.get_active_id("/master/active-semester")
    }
}

impl ReferenceBackend for HttpScheduleApi {
    fn school_years(&self) -> Result<Vec<SchoolYear>, ApiError> {
        Ok(self.get_json::<Envelope<Vec<SchoolYear>>>("/master/school-years")?.data)
    }

    fn semesters(&self) -> Result<Vec<Semester>, ApiError> {
        Ok(self.get_json::<Envelope<Vec<Semester>>>("/master/semesters")?.data)
    }

    fn courses(&self) -> Result<Vec<Course>, ApiError> {
        Ok(self.get_json::<Envelope<Vec<Course>>>("/courses")?.data)
    }

    fn course(&self, id: i64) -> Result<Course, ApiError> {
        self.get_json(&format!("/courses/{}", id))
    }

    fn sections(&self) -> Result<Vec<Section>, ApiError> {
        Ok(self.get_json::<Envelope<Vec<Section>>>("/sections")?.data)
    }

    fn section(&self, id: i64) -> Result<Section, ApiError> {
        self.get_json(&format!("/sections/{}", id))
    }

    fn rooms(&self) -> Result<Vec<Room>, ApiError> {
        Ok(self.get_json::<Envelope<Vec<Room>>>("/rooms")?.data)
    }

    fn professors_by_department(&self, department_id: i64) -> Result<Vec<Professor>, ApiError> {
        Ok(self
            .get_json::<Envelope<Vec<Professor>>>(&format!(
                "/professors/by-department/{}",
                department_id
            ))?
            .data)
    }

    fn filtered_subjects(
        &self,
        course_id: i64,
        semester_id: i64,
        year_level: u32,
    ) -> Result<Vec<Subject>, ApiError> {
        let query = build_query(&[
            ("semester_id", semester_id.to_string()),
            ("year_level", year_level.to_string()),
        ]);
        Ok(self
            .get_json::<Envelope<Vec<Subject>>>(&format!(
                "/courses/{}/filtered-subjects?{}",
                course_id, query
            ))?
            .data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let api = HttpScheduleApi::new("http://localhost:8000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.url("/rooms"), "http://localhost:8000/api/rooms");
    }

    #[test]
    fn test_envelope_decodes_wrapped_list() {
        let json = r#"{"data": [{"id": 1, "name": "2025-2026"}]}"#;
        let envelope: Envelope<Vec<SchoolYear>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, 1);
    }

    #[test]
    fn test_active_id_envelope_allows_null() {
        let empty: Envelope<Option<ActiveId>> = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(empty.data.is_none());

        let active: Envelope<Option<ActiveId>> =
            serde_json::from_str(r#"{"data": {"id": 4}}"#).unwrap();
        assert_eq!(active.data.map(|a| a.id), Some(4));
    }
}
