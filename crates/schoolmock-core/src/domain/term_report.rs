//! Per-student term results and class summaries.

use crate::domain::api::{FixtureApi, Record};
use crate::types::envelope::ApiEnvelope;
use serde::{Deserialize, Serialize};

/// Minimum percentage for a passing result.
pub const PASS_PERCENTAGE: f64 = 33.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectResult {
    pub subject: String,
    pub marks_obtained: f64,
    pub max_marks: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermReport {
    pub id: String,
    pub term_id: String,
    pub student_id: String,
    pub student_name: String,
    pub class_id: String,
    pub section: String,
    pub subjects: Vec<SubjectResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl TermReport {
    /// Overall percentage across subjects; zero when no marks are possible.
    pub fn percentage(&self) -> f64 {
        let (obtained, max) = self
            .subjects
            .iter()
            .fold((0.0, 0.0), |(o, m), s| (o + s.marks_obtained, m + s.max_marks));
        if max > 0.0 {
            obtained * 100.0 / max
        } else {
            0.0
        }
    }

    pub fn passed(&self) -> bool {
        self.percentage() >= PASS_PERCENTAGE
    }
}

/// Aggregate over the reports of one term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSummary {
    pub term_id: String,
    pub students: usize,
    pub passed: usize,
    pub failed: usize,
    /// Mean of per-student percentages, rounded to two decimals
    pub average_percentage: f64,
}

impl TermSummary {
    fn from_reports(term_id: &str, reports: &[TermReport]) -> Self {
        let passed = reports.iter().filter(|r| r.passed()).count();
        let average = if reports.is_empty() {
            0.0
        } else {
            reports.iter().map(TermReport::percentage).sum::<f64>() / reports.len() as f64
        };
        Self {
            term_id: term_id.to_owned(),
            students: reports.len(),
            passed,
            failed: reports.len() - passed,
            average_percentage: (average * 100.0).round() / 100.0,
        }
    }
}

pub type TermReportsApi = FixtureApi<TermReport>;

impl FixtureApi<TermReport> {
    /// Reports of `term_id`, optionally narrowed to one class.
    pub async fn search(
        &self,
        term_id: &str,
        class_id: Option<&str>,
    ) -> ApiEnvelope<Vec<TermReport>> {
        self.filter(|r| r.term_id == term_id && class_id.map_or(true, |c| r.class_id == c))
            .await
    }

    pub async fn summary(&self, term_id: &str) -> ApiEnvelope<TermSummary> {
        let reports = self.search(term_id, None).await.data;
        ApiEnvelope::success(TermSummary::from_reports(term_id, &reports))
    }
}

fn subjects(marks: &[(&str, f64)]) -> Vec<SubjectResult> {
    marks
        .iter()
        .map(|(subject, obtained)| SubjectResult {
            subject: subject.to_string(),
            marks_obtained: *obtained,
            max_marks: 100.0,
        })
        .collect()
}

impl Record for TermReport {
    const KIND: &'static str = "Term report";
    const ID_PREFIX: &'static str = "report";

    fn id(&self) -> &str {
        &self.id
    }

    fn fixtures() -> Vec<Self> {
        vec![
            TermReport {
                id: "report-1".to_string(),
                term_id: "term-1".to_string(),
                student_id: "student-1".to_string(),
                student_name: "Aarav Mehta".to_string(),
                class_id: "class-5".to_string(),
                section: "A".to_string(),
                subjects: subjects(&[("English", 82.0), ("Mathematics", 91.0), ("Science", 77.0)]),
                remarks: Some("Consistent performer".to_string()),
            },
            TermReport {
                id: "report-2".to_string(),
                term_id: "term-1".to_string(),
                student_id: "student-2".to_string(),
                student_name: "Diya Nair".to_string(),
                class_id: "class-5".to_string(),
                section: "B".to_string(),
                subjects: subjects(&[("English", 25.0), ("Mathematics", 18.0), ("Science", 30.0)]),
                remarks: Some("Needs support in mathematics".to_string()),
            },
            TermReport {
                id: "report-3".to_string(),
                term_id: "term-1".to_string(),
                student_id: "student-3".to_string(),
                student_name: "Kabir Singh".to_string(),
                class_id: "class-7".to_string(),
                section: "A".to_string(),
                subjects: subjects(&[("English", 64.0), ("Mathematics", 58.0), ("Science", 71.0)]),
                remarks: None,
            },
            TermReport {
                id: "report-4".to_string(),
                term_id: "term-2".to_string(),
                student_id: "student-1".to_string(),
                student_name: "Aarav Mehta".to_string(),
                class_id: "class-5".to_string(),
                section: "A".to_string(),
                subjects: subjects(&[("English", 88.0), ("Mathematics", 94.0), ("Science", 80.0)]),
                remarks: None,
            },
        ]
    }
}
