// Calendar query filters

use serde::Serialize;

/// Filters applied to the schedule query. Every field is optional; unset
/// fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleFilters {
    pub school_year_id: Option<i64>,
    pub semester_id: Option<i64>,
    pub course_id: Option<i64>,
    pub professor_id: Option<i64>,
    pub student_id: Option<i64>,
    pub room_id: Option<i64>,
    pub section_id: Option<i64>,
    pub year_level: Option<u32>,
}

impl ScheduleFilters {
    /// Flatten into query pairs, dropping unset fields.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_id(&mut pairs, "school_year_id", self.school_year_id);
        push_id(&mut pairs, "semester_id", self.semester_id);
        push_id(&mut pairs, "course_id", self.course_id);
        push_id(&mut pairs, "professor_id", self.professor_id);
        push_id(&mut pairs, "student_id", self.student_id);
        push_id(&mut pairs, "room_id", self.room_id);
        push_id(&mut pairs, "section_id", self.section_id);
        if let Some(level) = self.year_level {
            pairs.push(("year_level", level.to_string()));
        }
        pairs
    }
}

fn push_id(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<i64>) {
    if let Some(id) = value {
        pairs.push((key, id.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_produce_no_pairs() {
        assert!(ScheduleFilters::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_set_fields_appear_with_values() {
        let filters = ScheduleFilters {
            school_year_id: Some(3),
            semester_id: Some(1),
            year_level: Some(2),
            ..ScheduleFilters::default()
        };

        let pairs = filters.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("school_year_id", "3".to_string()),
                ("semester_id", "1".to_string()),
                ("year_level", "2".to_string()),
            ]
        );
    }
}
