//! Student observations recorded by teachers.

use crate::domain::api::{FixtureApi, Record};
use crate::types::envelope::ApiEnvelope;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservationCategory {
    Academic,
    Behavioral,
    Health,
    Extracurricular,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub class_id: String,
    pub section: String,
    pub category: ObservationCategory,
    pub title: String,
    pub description: String,
    pub observed_by: String,
    /// Date of the observation, `YYYY-MM-DD`
    pub observed_on: String,
    pub follow_up_required: bool,
}

/// Criteria for `ObservationApi::search`; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationFilter {
    pub student_id: Option<String>,
    pub class_id: Option<String>,
    pub category: Option<ObservationCategory>,
}

impl ObservationFilter {
    pub fn matches(&self, observation: &Observation) -> bool {
        let student = self
            .student_id
            .as_ref()
            .map_or(true, |id| *id == observation.student_id);
        let class = self
            .class_id
            .as_ref()
            .map_or(true, |id| *id == observation.class_id);
        let category = self
            .category
            .map_or(true, |category| category == observation.category);
        student && class && category
    }
}

pub type ObservationApi = FixtureApi<Observation>;

impl FixtureApi<Observation> {
    pub async fn search(&self, filter: &ObservationFilter) -> ApiEnvelope<Vec<Observation>> {
        self.filter(|o| filter.matches(o)).await
    }
}

impl Record for Observation {
    const KIND: &'static str = "Observation";
    const ID_PREFIX: &'static str = "obs";

    fn id(&self) -> &str {
        &self.id
    }

    fn fixtures() -> Vec<Self> {
        vec![
            Observation {
                id: "obs-1".to_string(),
                student_id: "student-1".to_string(),
                student_name: "Aarav Mehta".to_string(),
                class_id: "class-5".to_string(),
                section: "A".to_string(),
                category: ObservationCategory::Academic,
                title: "Improved reading fluency".to_string(),
                description: "Reads grade-level passages without prompting.".to_string(),
                observed_by: "Ms. Kapoor".to_string(),
                observed_on: "2024-01-10".to_string(),
                follow_up_required: false,
            },
            Observation {
                id: "obs-2".to_string(),
                student_id: "student-2".to_string(),
                student_name: "Diya Nair".to_string(),
                class_id: "class-5".to_string(),
                section: "B".to_string(),
                category: ObservationCategory::Behavioral,
                title: "Disruptive during assembly".to_string(),
                description: "Talked repeatedly during morning assembly.".to_string(),
                observed_by: "Mr. Iyer".to_string(),
                observed_on: "2024-01-12".to_string(),
                follow_up_required: true,
            },
            Observation {
                id: "obs-3".to_string(),
                student_id: "student-1".to_string(),
                student_name: "Aarav Mehta".to_string(),
                class_id: "class-5".to_string(),
                section: "A".to_string(),
                category: ObservationCategory::Health,
                title: "Complained of headaches".to_string(),
                description: "Sent to the infirmary twice this week.".to_string(),
                observed_by: "Nurse Thomas".to_string(),
                observed_on: "2024-01-18".to_string(),
                follow_up_required: true,
            },
            Observation {
                id: "obs-4".to_string(),
                student_id: "student-3".to_string(),
                student_name: "Kabir Singh".to_string(),
                class_id: "class-7".to_string(),
                section: "A".to_string(),
                category: ObservationCategory::Extracurricular,
                title: "Chess club finalist".to_string(),
                description: "Reached the inter-school chess final.".to_string(),
                observed_by: "Mr. Das".to_string(),
                observed_on: "2024-01-22".to_string(),
                follow_up_required: false,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ObservationFilter::default(), &["obs-1", "obs-2", "obs-3", "obs-4"])]
    #[case(
        ObservationFilter { student_id: Some("student-1".into()), ..Default::default() },
        &["obs-1", "obs-3"]
    )]
    #[case(
        ObservationFilter { class_id: Some("class-7".into()), ..Default::default() },
        &["obs-4"]
    )]
    #[case(
        ObservationFilter {
            student_id: Some("student-1".into()),
            category: Some(ObservationCategory::Health),
            ..Default::default()
        },
        &["obs-3"]
    )]
    #[case(
        ObservationFilter { class_id: Some("class-9".into()), ..Default::default() },
        &[]
    )]
    #[tokio::test(start_paused = true)]
    async fn test_search(#[case] filter: ObservationFilter, #[case] expected: &[&str]) {
        let envelope = ObservationApi::new().search(&filter).await;
        assert!(envelope.success);
        let ids: Vec<&str> = envelope.data.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[rstest]
    fn test_category_serialization() {
        let value = serde_json::to_value(ObservationCategory::Extracurricular)
            .expect("Should serialize");
        assert_eq!(value, "extracurricular");
    }

    #[rstest]
    fn test_filter_from_query_json() {
        let filter: ObservationFilter =
            serde_json::from_str(r#"{"studentId": "student-2", "category": "behavioral"}"#)
                .expect("Should deserialize");
        assert_eq!(filter.student_id.as_deref(), Some("student-2"));
        assert_eq!(filter.category, Some(ObservationCategory::Behavioral));
    }
}
