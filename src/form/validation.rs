use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;
use serde::Serialize;
use validator::{Validate, ValidationErrors};

use super::models::{AgeRange, AgeRequirement, Field, JobPosting, JobPostingDraft};

/// Latest allowed deadline, in days after today
pub const DEADLINE_WINDOW_DAYS: u64 = 60;

/// "09" followed by 7 to 9 ASCII digits
pub static VIBER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09[0-9]{7,9}$").expect("viber number pattern is valid"));

/// Dates the application deadline may take, both ends inclusive
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DeadlineWindow {
    /// `None` when the window would run past the last representable date
    pub fn starting(today: NaiveDate) -> Option<Self> {
        Some(Self {
            earliest: today.checked_add_days(Days::new(1))?,
            latest: today.checked_add_days(Days::new(DEADLINE_WINDOW_DAYS))?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.earliest <= date && date <= self.latest
    }
}

/// One human-readable message per failing field
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Records `message` unless the field already has an error
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(validation_errors: ValidationErrors) -> Self {
        let mut errors = FieldErrors::default();
        for (key, field_errors) in validation_errors.field_errors() {
            let Some(field) = Field::from_key(key.as_ref()) else {
                continue;
            };
            for e in field_errors.iter() {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation error in field: {}", field));
                errors.insert(field, message);
            }
        }
        errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Validates a complete draft against the posting schema.
///
/// Per-field rules run first; the age range and deadline rules run after them.
/// All failing fields are reported together.
pub fn validate(draft: &JobPostingDraft, today: NaiveDate) -> Result<JobPosting, FieldErrors> {
    let mut errors = match draft.validate() {
        Ok(()) => FieldErrors::default(),
        Err(validation_errors) => FieldErrors::from(validation_errors),
    };

    let age = check_age(draft, &mut errors);
    let application_deadline = check_deadline(draft.application_deadline, today, &mut errors);

    match (age, application_deadline) {
        (Some(age), Some(application_deadline)) if errors.is_empty() => Ok(JobPosting {
            job_title: draft.job_title.clone(),
            company: draft.company.clone(),
            location: draft.location.clone(),
            job_description: draft.job_description.clone(),
            salary: draft
                .salary
                .as_ref()
                .filter(|salary| !salary.trim().is_empty())
                .cloned(),
            age,
            benefits: draft.benefits.clone(),
            application_deadline,
            viber_number: draft.viber_number.clone(),
        }),
        _ => Err(errors),
    }
}

fn check_age(draft: &JobPostingDraft, errors: &mut FieldErrors) -> Option<AgeRange> {
    let requirement = match draft.age_requirement {
        Some(requirement) => requirement,
        None => {
            errors.remove(Field::AgeFrom);
            errors.remove(Field::AgeTo);
            errors.insert(Field::AgeRequirement, "Please select an age requirement");
            return None;
        }
    };

    match requirement {
        AgeRequirement::Any | AgeRequirement::EighteenToThirtyFive => {
            // Bounds left over from an earlier custom selection do not count.
            errors.remove(Field::AgeFrom);
            errors.remove(Field::AgeTo);
            Some(if requirement == AgeRequirement::Any {
                AgeRange::Any
            } else {
                AgeRange::EighteenToThirtyFive
            })
        }
        AgeRequirement::Custom => match (draft.age_from, draft.age_to) {
            (Some(from), Some(to)) if from <= to => Some(AgeRange::Custom { from, to }),
            _ => {
                // Reported on the upper bound whichever part is wrong.
                errors.insert(Field::AgeTo, "Please enter a valid age range");
                None
            }
        },
    }
}

fn check_deadline(
    deadline: Option<NaiveDate>,
    today: NaiveDate,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let Some(deadline) = deadline else {
        errors.insert(Field::ApplicationDeadline, "Please select an application deadline");
        return None;
    };

    let in_window = DeadlineWindow::starting(today).is_some_and(|window| window.contains(deadline));
    if in_window {
        Some(deadline)
    } else {
        errors.insert(
            Field::ApplicationDeadline,
            format!(
                "Deadline must be after today and within {} days",
                DEADLINE_WINDOW_DAYS
            ),
        );
        None
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::form::models::Benefit;

    pub(crate) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    pub(crate) fn valid_draft() -> JobPostingDraft {
        JobPostingDraft {
            job_title: "Senior Rust Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Yangon".to_string(),
            job_description: "Build and operate our backend services.".to_string(),
            salary: Some("1,500,000 MMK".to_string()),
            age_requirement: Some(AgeRequirement::Any),
            age_from: None,
            age_to: None,
            benefits: [Benefit::HealthInsurance, Benefit::Training].into_iter().collect(),
            application_deadline: Some(today() + Days::new(30)),
            viber_number: "0912345678".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_produces_posting() {
        let posting = validate(&valid_draft(), today()).unwrap();

        assert_eq!(posting.job_title, "Senior Rust Engineer");
        assert_eq!(posting.age, AgeRange::Any);
        assert_eq!(posting.salary.as_deref(), Some("1,500,000 MMK"));
        assert_eq!(posting.benefits.len(), 2);
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let errors = validate(&JobPostingDraft::default(), today()).unwrap_err();

        for field in [
            Field::JobTitle,
            Field::Company,
            Field::Location,
            Field::JobDescription,
            Field::AgeRequirement,
            Field::ApplicationDeadline,
            Field::ViberNumber,
        ] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
        assert_eq!(errors.len(), 7);
        assert!(!errors.contains(Field::Salary));
        assert!(!errors.contains(Field::Benefits));
    }

    #[test]
    fn test_text_lengths_are_checked_at_minimum() {
        let mut draft = valid_draft();
        draft.job_title = "QA".to_string();
        draft.company = "A".to_string();
        draft.location = "NY".to_string();
        draft.job_description = "Too short".to_string();

        let errors = validate(&draft, today()).unwrap_err();
        assert_eq!(
            errors.get(Field::JobTitle),
            Some("Job title must be at least 3 characters")
        );
        assert!(errors.contains(Field::Company));
        assert!(!errors.contains(Field::Location));
        assert!(errors.contains(Field::JobDescription));
    }

    #[test]
    fn test_age_bounds_ignored_unless_custom() {
        for requirement in [AgeRequirement::Any, AgeRequirement::EighteenToThirtyFive] {
            let mut draft = valid_draft();
            draft.age_requirement = Some(requirement);
            draft.age_from = Some(5);
            draft.age_to = Some(200);

            assert!(validate(&draft, today()).is_ok());
        }
    }

    #[test]
    fn test_custom_age_range_accepted() {
        let mut draft = valid_draft();
        draft.age_requirement = Some(AgeRequirement::Custom);
        draft.age_from = Some(25);
        draft.age_to = Some(25);

        let posting = validate(&draft, today()).unwrap();
        assert_eq!(posting.age, AgeRange::Custom { from: 25, to: 25 });
    }

    #[test]
    fn test_custom_age_range_errors_attach_to_upper_bound() {
        let cases = [(None, Some(30)), (Some(30), None), (None, None), (Some(40), Some(30))];

        for (from, to) in cases {
            let mut draft = valid_draft();
            draft.age_requirement = Some(AgeRequirement::Custom);
            draft.age_from = from;
            draft.age_to = to;

            let errors = validate(&draft, today()).unwrap_err();
            assert_eq!(
                errors.get(Field::AgeTo),
                Some("Please enter a valid age range"),
                "from={:?} to={:?}",
                from,
                to
            );
            assert!(!errors.contains(Field::AgeFrom));
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_custom_age_out_of_range() {
        let mut draft = valid_draft();
        draft.age_requirement = Some(AgeRequirement::Custom);
        draft.age_from = Some(17);
        draft.age_to = Some(101);

        let errors = validate(&draft, today()).unwrap_err();
        assert_eq!(errors.get(Field::AgeFrom), Some("Age must be between 18 and 100"));
        assert_eq!(errors.get(Field::AgeTo), Some("Age must be between 18 and 100"));
    }

    #[test]
    fn test_viber_number_pattern() {
        let cases = [
            ("0912345678", true),
            ("091234567", true),
            ("09123456789", true),
            ("09123456", false),
            ("091234567890", false),
            ("08123456789", false),
            ("09-1234567", false),
            ("09\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}\u{668}", false),
            ("09１２３４５６７８", false),
            ("", false),
        ];

        for (number, expected) in cases {
            let mut draft = valid_draft();
            draft.viber_number = number.to_string();
            assert_eq!(validate(&draft, today()).is_ok(), expected, "number {:?}", number);
        }
    }

    #[test]
    fn test_deadline_window_bounds() {
        let cases = [
            (today() - Days::new(1), false),
            (today(), false),
            (today() + Days::new(1), true),
            (today() + Days::new(60), true),
            (today() + Days::new(61), false),
        ];

        for (deadline, expected) in cases {
            let mut draft = valid_draft();
            draft.application_deadline = Some(deadline);
            assert_eq!(validate(&draft, today()).is_ok(), expected, "deadline {}", deadline);
        }
    }

    #[test]
    fn test_deadline_window_at_end_of_calendar() {
        assert_eq!(DeadlineWindow::starting(NaiveDate::MAX), None);

        let last_day = NaiveDate::MAX - Days::new(10);
        let mut draft = valid_draft();
        draft.application_deadline = Some(NaiveDate::MAX);

        let errors = validate(&draft, last_day).unwrap_err();
        assert!(errors.contains(Field::ApplicationDeadline));
    }

    #[test]
    fn test_blank_salary_is_dropped() {
        let mut draft = valid_draft();
        draft.salary = Some("   ".to_string());

        assert_eq!(validate(&draft, today()).unwrap().salary, None);
    }

    #[test]
    fn test_field_errors_serialize_by_wire_name() {
        let mut draft = valid_draft();
        draft.viber_number = "123".to_string();

        let errors = validate(&draft, today()).unwrap_err();
        let value = serde_json::to_value(&errors).unwrap();
        assert!(value["viberNumber"].is_string());
        assert_eq!(
            errors.to_string(),
            "viberNumber: Viber number must start with 09 followed by 7 to 9 digits"
        );
    }
}
