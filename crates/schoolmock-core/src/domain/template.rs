//! Message and document templates.

use crate::domain::api::{FixtureApi, Record};
use crate::types::envelope::ApiEnvelope;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Sms,
    Email,
    Whatsapp,
    ReportCard,
    Certificate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub kind: TemplateKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Body with `{{placeholder}}` variables
    pub content: String,
    pub variables: Vec<String>,
    pub is_default: bool,
}

impl Template {
    /// Substitute `{{name}}` placeholders; unknown placeholders stay as-is.
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        values
            .iter()
            .fold(self.content.clone(), |text, (name, value)| {
                text.replace(&format!("{{{{{name}}}}}"), value)
            })
    }
}

pub type TemplateApi = FixtureApi<Template>;

impl FixtureApi<Template> {
    pub async fn by_kind(&self, kind: TemplateKind) -> ApiEnvelope<Vec<Template>> {
        self.filter(|t| t.kind == kind).await
    }
}

impl Record for Template {
    const KIND: &'static str = "Template";
    const ID_PREFIX: &'static str = "tpl";

    fn id(&self) -> &str {
        &self.id
    }

    fn fixtures() -> Vec<Self> {
        vec![
            Template {
                id: "tpl-1".to_string(),
                name: "Fee Reminder".to_string(),
                kind: TemplateKind::Sms,
                subject: None,
                content: "Dear {{parentName}}, fee of {{amount}} for {{studentName}} is due on {{dueDate}}."
                    .to_string(),
                variables: vec![
                    "parentName".to_string(),
                    "amount".to_string(),
                    "studentName".to_string(),
                    "dueDate".to_string(),
                ],
                is_default: true,
            },
            Template {
                id: "tpl-2".to_string(),
                name: "Absence Alert".to_string(),
                kind: TemplateKind::Sms,
                subject: None,
                content: "{{studentName}} was absent on {{date}}.".to_string(),
                variables: vec!["studentName".to_string(), "date".to_string()],
                is_default: false,
            },
            Template {
                id: "tpl-3".to_string(),
                name: "Meeting Invitation".to_string(),
                kind: TemplateKind::Email,
                subject: Some("Parent Teacher Meeting".to_string()),
                content: "Dear {{parentName}}, you are invited to the meeting on {{date}}."
                    .to_string(),
                variables: vec!["parentName".to_string(), "date".to_string()],
                is_default: true,
            },
            Template {
                id: "tpl-4".to_string(),
                name: "Term Report Card".to_string(),
                kind: TemplateKind::ReportCard,
                subject: None,
                content: "{{studentName}} | {{className}} | {{termName}}".to_string(),
                variables: vec![
                    "studentName".to_string(),
                    "className".to_string(),
                    "termName".to_string(),
                ],
                is_default: true,
            },
            Template {
                id: "tpl-5".to_string(),
                name: "Participation Certificate".to_string(),
                kind: TemplateKind::Certificate,
                subject: None,
                content: "This certifies that {{studentName}} took part in {{event}}.".to_string(),
                variables: vec!["studentName".to_string(), "event".to_string()],
                is_default: false,
            },
        ]
    }
}
