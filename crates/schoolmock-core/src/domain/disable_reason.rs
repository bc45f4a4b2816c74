//! Reasons for disabling a student account.

use crate::domain::api::{FixtureApi, Record};
use crate::types::envelope::ApiEnvelope;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableReason {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

pub type DisableReasonApi = FixtureApi<DisableReason>;

impl Record for DisableReason {
    const KIND: &'static str = "Disable reason";
    const ID_PREFIX: &'static str = "reason";

    fn id(&self) -> &str {
        &self.id
    }

    fn fixtures() -> Vec<Self> {
        [
            ("reason-1", "Left School", "Student has left the school", true),
            ("reason-2", "Transferred", "Transferred to another school", true),
            ("reason-3", "Fee Default", "Fees unpaid beyond the grace period", true),
            ("reason-4", "Disciplinary", "Suspended after disciplinary action", false),
        ]
        .into_iter()
        .map(|(id, name, description, is_active)| DisableReason {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            is_active,
        })
        .collect()
    }
}

impl FixtureApi<DisableReason> {
    pub async fn active(&self) -> ApiEnvelope<Vec<DisableReason>> {
        self.filter(|r| r.is_active).await
    }
}
