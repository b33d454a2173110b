pub mod controller;
pub mod models;
pub mod validation;
pub mod visibility;

// Re-export commonly used types
pub use controller::{JobPostingForm, LogNotifier, Notifier};
pub use models::{AgeRange, AgeRequirement, Benefit, Field, JobPosting, JobPostingDraft};
pub use validation::{validate, DeadlineWindow, FieldErrors};
pub use visibility::AgeRangeVisibility;
