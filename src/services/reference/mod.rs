//! Reference-data loading for the filter bar and edit form.
//!
//! Thin wrappers over the dropdown endpoints. The only logic here is the
//! option chain the edit form needs (section → semester, course →
//! department → professors) and small shaping like building dedup.

use anyhow::{Context, Result};

use crate::models::edit::EditDraft;
use crate::models::reference::{
    Course, IdOption, Room, SchoolYear, Section, Semester, TextOption,
};
use crate::services::api::ReferenceBackend;
use crate::utils::time::minutes_to_time;

/// Base lists loaded once when the calendar page opens.
#[derive(Debug, Clone, Default)]
pub struct BaseReferenceData {
    pub school_years: Vec<SchoolYear>,
    pub semesters: Vec<Semester>,
    pub courses: Vec<Course>,
    pub sections: Vec<Section>,
    pub rooms: Vec<Room>,
}

pub fn load_base(backend: &dyn ReferenceBackend) -> Result<BaseReferenceData> {
    Ok(BaseReferenceData {
        school_years: backend.school_years().context("loading school years")?,
        semesters: backend.semesters().context("loading semesters")?,
        courses: backend.courses().context("loading courses")?,
        sections: backend.sections().context("loading sections")?,
        rooms: backend.rooms().context("loading rooms")?,
    })
}

/// Options backing the edit-form dropdowns.
#[derive(Debug, Clone, Default)]
pub struct EditFormOptions {
    pub subjects: Vec<IdOption>,
    pub professors: Vec<IdOption>,
    pub buildings: Vec<TextOption>,
    pub rooms: Vec<Room>,
    pub time_options: Vec<String>,
}

/// Load the option chain for an opened draft: the section pins the
/// semester, the course pins both the subject list and the professor pool.
pub fn load_edit_form_options(
    backend: &dyn ReferenceBackend,
    draft: &EditDraft,
) -> Result<EditFormOptions> {
    let section_id = draft.section_id.context("draft has no section")?;
    let course_id = draft.course_id.context("draft has no course")?;
    let year_level = draft.year_level.context("draft has no year level")?;

    let section = backend
        .section(section_id)
        .with_context(|| format!("loading section {}", section_id))?;
    let semester_id = section
        .semester_id
        .with_context(|| format!("section {} has no semester", section_id))?;

    let subjects = backend
        .filtered_subjects(course_id, semester_id, year_level)
        .context("loading filtered subjects")?
        .iter()
        .map(|subject| IdOption {
            value: subject.id,
            label: subject.display_name(),
        })
        .collect();

    let professors = professors_for_course(backend, course_id)?;

    let rooms = backend.rooms().context("loading rooms")?;
    let buildings = distinct_buildings(&rooms);

    Ok(EditFormOptions {
        subjects,
        professors,
        buildings,
        rooms,
        time_options: generate_time_options(),
    })
}

/// Professors teaching in the department that owns the course. Also used
/// when the filter bar narrows by course.
pub fn professors_for_course(
    backend: &dyn ReferenceBackend,
    course_id: i64,
) -> Result<Vec<IdOption>> {
    let course = backend
        .course(course_id)
        .with_context(|| format!("loading course {}", course_id))?;
    let department_id = course
        .department_id
        .with_context(|| format!("course {} has no department", course_id))?;

    let professors = backend
        .professors_by_department(department_id)
        .with_context(|| format!("loading professors for department {}", department_id))?;

    Ok(professors
        .iter()
        .map(|professor| IdOption {
            value: professor.id,
            label: professor.display_name(),
        })
        .collect())
}

/// Distinct building names in first-seen order.
fn distinct_buildings(rooms: &[Room]) -> Vec<TextOption> {
    let mut buildings: Vec<TextOption> = Vec::new();
    for room in rooms {
        if !buildings.iter().any(|option| option.value == room.building_name) {
            buildings.push(TextOption {
                value: room.building_name.clone(),
                label: room.building_name.clone(),
            });
        }
    }
    buildings
}

/// Selectable times for the edit form: 07:00 through 19:00 inclusive in
/// 5-minute steps.
pub fn generate_time_options() -> Vec<String> {
    (7 * 60..=19 * 60)
        .step_by(5)
        .map(minutes_to_time)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reference::{Professor, Subject};
    use crate::services::api::MockReferenceBackend;

    fn room(id: i64, building: &str) -> Room {
        Room {
            id,
            room_number: format!("{}", 100 + id),
            building_name: building.to_string(),
            capacity: 40,
            room_type: "Lecture".to_string(),
        }
    }

    #[test]
    fn test_time_options_cover_seven_to_seven_in_five_minute_steps() {
        let options = generate_time_options();
        assert_eq!(options.first().map(String::as_str), Some("07:00"));
        assert_eq!(options.last().map(String::as_str), Some("19:00"));
        assert_eq!(options.len(), (19 * 60 - 7 * 60) / 5 + 1);
        assert!(options.contains(&"13:35".to_string()));
    }

    #[test]
    fn test_distinct_buildings_preserve_first_seen_order() {
        let rooms = vec![
            room(1, "Engineering"),
            room(2, "Main"),
            room(3, "Engineering"),
            room(4, "Annex"),
        ];
        let buildings = distinct_buildings(&rooms);
        let names: Vec<&str> = buildings.iter().map(|b| b.value.as_str()).collect();
        assert_eq!(names, vec!["Engineering", "Main", "Annex"]);
    }

    #[test]
    fn test_edit_form_chain_pins_semester_and_department() {
        let mut backend = MockReferenceBackend::new();
        backend.expect_section().withf(|id| *id == 11).returning(|id| {
            Ok(Section {
                id,
                name: "A".to_string(),
                semester_id: Some(2),
            })
        });
        backend
            .expect_filtered_subjects()
            .withf(|course, semester, year| (*course, *semester, *year) == (5, 2, 3))
            .returning(|_, _, _| {
                Ok(vec![Subject {
                    id: 21,
                    subject_code: "CS101".to_string(),
                    subject_name: "Intro to Computing".to_string(),
                }])
            });
        backend.expect_course().returning(|id| {
            Ok(Course {
                id,
                name: "Computer Science".to_string(),
                department_id: Some(8),
            })
        });
        backend
            .expect_professors_by_department()
            .withf(|id| *id == 8)
            .returning(|_| {
                Ok(vec![Professor {
                    id: 9,
                    first_name: "Maria".to_string(),
                    last_name: "Santos".to_string(),
                    middle_name: None,
                }])
            });
        backend
            .expect_rooms()
            .returning(|| Ok(vec![room(1, "Main"), room(2, "Main")]));

        let draft = EditDraft {
            section_id: Some(11),
            course_id: Some(5),
            year_level: Some(3),
            ..EditDraft::default()
        };

        let options = load_edit_form_options(&backend, &draft).unwrap();
        assert_eq!(options.subjects[0].label, "CS101 - Intro to Computing");
        assert_eq!(options.professors[0].label, "Santos, Maria");
        assert_eq!(options.buildings.len(), 1);
        assert_eq!(options.rooms.len(), 2);
        assert!(!options.time_options.is_empty());
    }

    #[test]
    fn test_incomplete_draft_fails_with_context() {
        let backend = MockReferenceBackend::new();
        let draft = EditDraft::default();

        let err = load_edit_form_options(&backend, &draft).unwrap_err();
        assert!(err.to_string().contains("section"));
    }
}
