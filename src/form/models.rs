use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::VIBER_NUMBER;

/// Age requirement selected on the form
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum AgeRequirement {
    #[serde(rename = "any")]
    Any,
    #[serde(rename = "18-35")]
    EighteenToThirtyFive,
    #[serde(rename = "custom")]
    Custom,
}

impl AgeRequirement {
    pub const ALL: [AgeRequirement; 3] = [
        AgeRequirement::Any,
        AgeRequirement::EighteenToThirtyFive,
        AgeRequirement::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeRequirement::Any => "Any age",
            AgeRequirement::EighteenToThirtyFive => "18 - 35",
            AgeRequirement::Custom => "Custom range",
        }
    }
}

/// Fixed set of perks a posting can advertise.
///
/// Ordering follows declaration order, which is also the order benefits are
/// listed in serialized postings.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Benefit {
    HealthInsurance,
    PaidLeave,
    Transportation,
    MealAllowance,
    Accommodation,
    PerformanceBonus,
    Training,
}

impl Benefit {
    pub const ALL: [Benefit; 7] = [
        Benefit::HealthInsurance,
        Benefit::PaidLeave,
        Benefit::Transportation,
        Benefit::MealAllowance,
        Benefit::Accommodation,
        Benefit::PerformanceBonus,
        Benefit::Training,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Benefit::HealthInsurance => "health-insurance",
            Benefit::PaidLeave => "paid-leave",
            Benefit::Transportation => "transportation",
            Benefit::MealAllowance => "meal-allowance",
            Benefit::Accommodation => "accommodation",
            Benefit::PerformanceBonus => "performance-bonus",
            Benefit::Training => "training",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Benefit::HealthInsurance => "Health insurance",
            Benefit::PaidLeave => "Paid leave",
            Benefit::Transportation => "Transportation",
            Benefit::MealAllowance => "Meal allowance",
            Benefit::Accommodation => "Accommodation",
            Benefit::PerformanceBonus => "Performance bonus",
            Benefit::Training => "Training & development",
        }
    }
}

/// Form fields, named as they appear on the wire
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    JobTitle,
    Company,
    Location,
    JobDescription,
    Salary,
    AgeRequirement,
    AgeFrom,
    AgeTo,
    Benefits,
    ApplicationDeadline,
    ViberNumber,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::JobTitle => "jobTitle",
            Field::Company => "company",
            Field::Location => "location",
            Field::JobDescription => "jobDescription",
            Field::Salary => "salary",
            Field::AgeRequirement => "ageRequirement",
            Field::AgeFrom => "ageFrom",
            Field::AgeTo => "ageTo",
            Field::Benefits => "benefits",
            Field::ApplicationDeadline => "applicationDeadline",
            Field::ViberNumber => "viberNumber",
        }
    }

    /// Resolves both the struct field name and the wire name
    pub fn from_key(key: &str) -> Option<Field> {
        let field = match key {
            "job_title" | "jobTitle" => Field::JobTitle,
            "company" => Field::Company,
            "location" => Field::Location,
            "job_description" | "jobDescription" => Field::JobDescription,
            "salary" => Field::Salary,
            "age_requirement" | "ageRequirement" => Field::AgeRequirement,
            "age_from" | "ageFrom" => Field::AgeFrom,
            "age_to" | "ageTo" => Field::AgeTo,
            "benefits" => Field::Benefits,
            "application_deadline" | "applicationDeadline" => Field::ApplicationDeadline,
            "viber_number" | "viberNumber" => Field::ViberNumber,
            _ => return None,
        };
        Some(field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress form state.
///
/// Per-field rules are declared here; the age range and deadline rules need
/// more than one value and are checked in [`super::validation::validate`].
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPostingDraft {
    #[validate(length(min = 3, message = "Job title must be at least 3 characters"))]
    pub job_title: String,

    #[validate(length(min = 2, message = "Company name must be at least 2 characters"))]
    pub company: String,

    #[validate(length(min = 2, message = "Location must be at least 2 characters"))]
    pub location: String,

    #[validate(length(
        min = 20,
        message = "Job description must be at least 20 characters"
    ))]
    pub job_description: String,

    pub salary: Option<String>,

    pub age_requirement: Option<AgeRequirement>,

    #[validate(range(min = 18, max = 100, message = "Age must be between 18 and 100"))]
    pub age_from: Option<i32>,

    #[validate(range(min = 18, max = 100, message = "Age must be between 18 and 100"))]
    pub age_to: Option<i32>,

    pub benefits: BTreeSet<Benefit>,

    pub application_deadline: Option<NaiveDate>,

    #[validate(regex(
        path = *VIBER_NUMBER,
        message = "Viber number must start with 09 followed by 7 to 9 digits"
    ))]
    pub viber_number: String,
}

impl JobPostingDraft {
    /// Adds the benefit if absent, removes it if present.
    /// Returns whether the benefit is selected afterwards.
    pub fn toggle_benefit(&mut self, benefit: Benefit) -> bool {
        if self.benefits.remove(&benefit) {
            false
        } else {
            self.benefits.insert(benefit)
        }
    }
}

/// Age rule of a validated posting
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "requirement")]
pub enum AgeRange {
    #[serde(rename = "any")]
    Any,
    #[serde(rename = "18-35")]
    EighteenToThirtyFive,
    #[serde(rename = "custom")]
    Custom { from: i32, to: i32 },
}

/// A fully validated job posting
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub job_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub age: AgeRange,
    pub benefits: BTreeSet<Benefit>,
    pub application_deadline: NaiveDate,
    pub viber_number: String,
}
