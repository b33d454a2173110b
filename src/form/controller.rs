use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::models::{AgeRequirement, Benefit, JobPosting, JobPostingDraft};
use super::validation::{self, FieldErrors};
use super::visibility::AgeRangeVisibility;

/// Receives a confirmation for every accepted posting.
///
/// Fire-and-forget: the form does not wait on or inspect the outcome.
pub trait Notifier: Send + Sync {
    fn job_posted(&self, posting: &JobPosting);
}

/// Notifier that writes the confirmation to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn job_posted(&self, posting: &JobPosting) {
        info!(
            "Job posted successfully: title={}, company={}",
            posting.job_title, posting.company
        );
    }
}

type OnComplete = Box<dyn FnMut() + Send>;

/// Holds the draft and conditional field state for one form session
pub struct JobPostingForm {
    draft: JobPostingDraft,
    visibility: AgeRangeVisibility,
    notifier: Arc<dyn Notifier>,
    on_complete: Option<OnComplete>,
}

impl JobPostingForm {
    /// Create an empty form
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::from_draft(JobPostingDraft::default(), notifier)
    }

    /// Create a form pre-filled with `draft`
    pub fn from_draft(draft: JobPostingDraft, notifier: Arc<dyn Notifier>) -> Self {
        let visibility = AgeRangeVisibility::for_requirement(draft.age_requirement);
        Self {
            draft,
            visibility,
            notifier,
            on_complete: None,
        }
    }

    /// Register a callback invoked once after every successful submission
    pub fn with_on_complete(mut self, on_complete: impl FnMut() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    pub fn draft(&self) -> &JobPostingDraft {
        &self.draft
    }

    pub fn age_range_visibility(&self) -> AgeRangeVisibility {
        self.visibility
    }

    pub fn set_job_title(&mut self, value: impl Into<String>) {
        self.draft.job_title = value.into();
    }

    pub fn set_company(&mut self, value: impl Into<String>) {
        self.draft.company = value.into();
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.draft.location = value.into();
    }

    pub fn set_job_description(&mut self, value: impl Into<String>) {
        self.draft.job_description = value.into();
    }

    pub fn set_salary(&mut self, value: Option<String>) {
        self.draft.salary = value;
    }

    /// Select the age requirement. The age bounds are kept when the range is hidden.
    pub fn set_age_requirement(&mut self, requirement: AgeRequirement) {
        let next = self.visibility.on_select(requirement);
        if next != self.visibility {
            debug!("Age range {:?} -> {:?}", self.visibility, next);
        }
        self.draft.age_requirement = Some(requirement);
        self.visibility = next;
    }

    pub fn set_age_from(&mut self, value: Option<i32>) {
        self.draft.age_from = value;
    }

    pub fn set_age_to(&mut self, value: Option<i32>) {
        self.draft.age_to = value;
    }

    /// Returns whether the benefit is selected afterwards
    pub fn toggle_benefit(&mut self, benefit: Benefit) -> bool {
        self.draft.toggle_benefit(benefit)
    }

    pub fn set_application_deadline(&mut self, value: Option<NaiveDate>) {
        self.draft.application_deadline = value;
    }

    pub fn set_viber_number(&mut self, value: impl Into<String>) {
        self.draft.viber_number = value.into();
    }

    /// Validate the current draft without submitting it
    pub fn validate(&self, today: NaiveDate) -> Result<JobPosting, FieldErrors> {
        validation::validate(&self.draft, today)
    }

    /// Submit the draft.
    ///
    /// On success the notifier is fired, the form is reset and the completion
    /// callback runs. On failure the draft is left as it was.
    pub fn submit(&mut self, today: NaiveDate) -> Result<JobPosting, FieldErrors> {
        let posting = match self.validate(today) {
            Ok(posting) => posting,
            Err(errors) => {
                warn!("Job posting rejected: {}", errors);
                return Err(errors);
            }
        };

        self.notifier.job_posted(&posting);
        info!(
            payload = %serde_json::to_string(&posting).unwrap_or_default(),
            "Job posting submitted"
        );

        self.reset();
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete();
        }

        Ok(posting)
    }

    /// Return the form to its initial empty state
    pub fn reset(&mut self) {
        self.draft = JobPostingDraft::default();
        self.visibility = AgeRangeVisibility::default();
    }
}
