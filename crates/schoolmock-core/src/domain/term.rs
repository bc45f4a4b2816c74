//! Academic terms and their exam configuration.

use crate::domain::api::{FixtureApi, Record};
use crate::types::envelope::ApiEnvelope;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub name: String,
    pub max_marks: u32,
    /// Share of the term result, in percent
    pub weightage: f64,
    pub start_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub id: String,
    pub name: String,
    /// Academic session, e.g. `2023-24`
    pub session: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub exams: Vec<Exam>,
}

impl Term {
    pub fn total_weightage(&self) -> f64 {
        self.exams.iter().map(|e| e.weightage).sum()
    }
}

pub type TermApi = FixtureApi<Term>;

impl FixtureApi<Term> {
    pub async fn by_session(&self, session: &str) -> ApiEnvelope<Vec<Term>> {
        self.filter(|t| t.session == session).await
    }

    /// The term flagged as current.
    pub async fn current(&self) -> ApiEnvelope<Option<Term>> {
        let mut envelope = self.filter(|t| t.is_current).await;
        match envelope.data.pop() {
            Some(term) => ApiEnvelope::success(Some(term)),
            None => ApiEnvelope::failure(None, "No current term configured"),
        }
    }
}

fn exam(id: &str, name: &str, max_marks: u32, weightage: f64, start_date: &str) -> Exam {
    Exam {
        id: id.to_string(),
        name: name.to_string(),
        max_marks,
        weightage,
        start_date: start_date.to_string(),
    }
}

impl Record for Term {
    const KIND: &'static str = "Term";
    const ID_PREFIX: &'static str = "term";

    fn id(&self) -> &str {
        &self.id
    }

    fn fixtures() -> Vec<Self> {
        vec![
            Term {
                id: "term-1".to_string(),
                name: "Term 1".to_string(),
                session: "2023-24".to_string(),
                start_date: "2023-04-03".to_string(),
                end_date: "2023-09-29".to_string(),
                is_current: false,
                exams: vec![
                    exam("exam-1", "Unit Test 1", 25, 20.0, "2023-06-12"),
                    exam("exam-2", "Half Yearly", 100, 80.0, "2023-09-11"),
                ],
            },
            Term {
                id: "term-2".to_string(),
                name: "Term 2".to_string(),
                session: "2023-24".to_string(),
                start_date: "2023-10-09".to_string(),
                end_date: "2024-03-22".to_string(),
                is_current: true,
                exams: vec![
                    exam("exam-3", "Unit Test 2", 25, 20.0, "2023-12-04"),
                    exam("exam-4", "Annual", 100, 80.0, "2024-03-04"),
                ],
            },
            Term {
                id: "term-3".to_string(),
                name: "Term 1".to_string(),
                session: "2024-25".to_string(),
                start_date: "2024-04-01".to_string(),
                end_date: "2024-09-27".to_string(),
                is_current: false,
                exams: Vec::new(),
            },
        ]
    }
}
