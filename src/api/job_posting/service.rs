use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::dto::{BenefitOption, FormOptions, OptionItem};
use crate::form::{
    AgeRequirement, Benefit, DeadlineWindow, FieldErrors, JobPosting, JobPostingDraft,
    JobPostingForm, Notifier,
};

/// Source of "today" for deadline checks
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Job posting service hosting the form for HTTP clients
pub struct JobPostingService {
    clock: Clock,
    notifier: Arc<dyn Notifier>,
    submitted: Arc<AtomicU64>,
}

impl JobPostingService {
    /// Create a new JobPostingService using the local calendar date
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_clock(Arc::new(|| Local::now().date_naive()), notifier)
    }

    pub fn with_clock(clock: Clock, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            clock,
            notifier,
            submitted: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Number of postings accepted since startup
    pub fn submitted_count(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    /// Choices the client needs to render the form
    pub fn options(&self) -> FormOptions {
        FormOptions {
            age_requirements: AgeRequirement::ALL
                .into_iter()
                .map(|requirement| OptionItem {
                    value: requirement,
                    label: requirement.label(),
                })
                .collect(),
            benefits: Benefit::ALL
                .into_iter()
                .map(|benefit| BenefitOption {
                    id: benefit,
                    label: benefit.label(),
                })
                .collect(),
            deadline_window: DeadlineWindow::starting(self.today()),
        }
    }

    /// Validate a draft without submitting it
    pub fn check(&self, draft: &JobPostingDraft) -> Result<JobPosting, FieldErrors> {
        debug!("Service: Checking draft title={}", draft.job_title);
        crate::form::validate(draft, self.today())
    }

    /// Submit a draft through a fresh form session
    ///
    /// # Returns
    /// - `Ok(JobPosting)` - Posting accepted
    /// - `Err(FieldErrors)` - One message per failing field
    pub fn submit(&self, draft: JobPostingDraft) -> Result<JobPosting, FieldErrors> {
        info!("Service: Submitting job posting title={}", draft.job_title);

        let submitted = self.submitted.clone();
        let mut form = JobPostingForm::from_draft(draft, self.notifier.clone())
            .with_on_complete(move || {
                let total = submitted.fetch_add(1, Ordering::Relaxed) + 1;
                debug!("Service: {} postings accepted since startup", total);
            });

        form.submit(self.today())
    }
}
