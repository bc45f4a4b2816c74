//! Domain mock APIs.
//!
//! Each domain serves hand-authored fixtures through [`FixtureApi`], which
//! adds an artificial delay and wraps results in an
//! [`ApiEnvelope`](crate::types::envelope::ApiEnvelope).

pub mod api;
pub mod disable_reason;
pub mod observation;
pub mod template;
pub mod term;
pub mod term_report;

pub use api::{FixtureApi, Record, DEFAULT_DOMAIN_DELAY};
pub use disable_reason::{DisableReason, DisableReasonApi};
pub use observation::{Observation, ObservationApi, ObservationCategory, ObservationFilter};
pub use template::{Template, TemplateApi, TemplateKind};
pub use term::{Exam, Term, TermApi};
pub use term_report::{SubjectResult, TermReport, TermReportsApi, TermSummary};
