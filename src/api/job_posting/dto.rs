use serde::Serialize;

use crate::form::{AgeRequirement, Benefit, DeadlineWindow, JobPosting};

/// Response for an accepted posting
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingResponse {
    pub message: String,
    pub job_posting: JobPosting,
}

/// Response for a draft that passed validation without being submitted
#[derive(Serialize)]
pub struct ValidResponse {
    pub valid: bool,
}

#[derive(Serialize)]
pub struct OptionItem {
    pub value: AgeRequirement,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct BenefitOption {
    pub id: Benefit,
    pub label: &'static str,
}

/// Choices for rendering the form
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub age_requirements: Vec<OptionItem>,
    pub benefits: Vec<BenefitOption>,
    /// Absent when today is too close to the end of the calendar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_window: Option<DeadlineWindow>,
}
