use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::error;

use crate::form::{JobPostingDraft, JobPostingForm, LogNotifier};

#[derive(Parser, Debug)]
#[command(name = "job-posting-form", version, about = "Job posting form host and validator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Validate and submit a draft stored as JSON
    Validate {
        /// Path to the draft JSON file
        file: PathBuf,
        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

/// Result of the `validate` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateStatus {
    /// Draft accepted and submitted
    Accepted,
    /// Draft failed one or more field rules
    Rejected,
    /// Draft could not be read, parsed or rendered
    Failed,
}

impl ValidateStatus {
    pub fn code(self) -> u8 {
        match self {
            ValidateStatus::Accepted => 0,
            ValidateStatus::Rejected => 1,
            ValidateStatus::Failed => 2,
        }
    }
}

impl From<ValidateStatus> for ExitCode {
    fn from(status: ValidateStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Runs the `validate` command. Prints the accepted posting, or the field
/// errors, as JSON on stdout.
pub fn run_validate(file: &Path, today: Option<NaiveDate>) -> ExitCode {
    validate_file(file, today).into()
}

pub fn validate_file(file: &Path, today: Option<NaiveDate>) -> ValidateStatus {
    let draft = match read_draft(file) {
        Ok(draft) => draft,
        Err(e) => {
            error!("Failed to load draft from {}: {}", file.display(), e);
            return ValidateStatus::Failed;
        }
    };

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut form = JobPostingForm::from_draft(draft, Arc::new(LogNotifier));

    let (output, status) = match form.submit(today) {
        Ok(posting) => (serde_json::to_string_pretty(&posting), ValidateStatus::Accepted),
        Err(errors) => (serde_json::to_string_pretty(&errors), ValidateStatus::Rejected),
    };
    match output {
        Ok(json) => {
            println!("{}", json);
            status
        }
        Err(e) => {
            error!("Failed to render result: {}", e);
            ValidateStatus::Failed
        }
    }
}

fn read_draft(file: &Path) -> Result<JobPostingDraft, String> {
    let raw = std::fs::read_to_string(file).map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate_command() {
        let cli = Cli::try_parse_from([
            "job-posting-form",
            "validate",
            "draft.json",
            "--today",
            "2026-10-19",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Validate { file, today }) => {
                assert_eq!(file, PathBuf::from("draft.json"));
                assert_eq!(today, NaiveDate::from_ymd_opt(2026, 10, 19));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["job-posting-form"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_read_draft() {
        assert!(read_draft(Path::new("does/not/exist.json")).is_err());

        let path = std::env::temp_dir().join("job-posting-form-cli-draft.json");
        std::fs::write(&path, r#"{"jobTitle": "Cashier", "viberNumber": "0912345678"}"#).unwrap();
        let draft = read_draft(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(draft.job_title, "Cashier");
        assert_eq!(draft.viber_number, "0912345678");
    }

    fn write_draft(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("job-posting-form-{}.json", name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_validate_file_exit_statuses() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19);
        let valid = write_draft(
            "valid",
            r#"{
                "jobTitle": "Cashier",
                "company": "Corner Mart",
                "location": "Bago",
                "jobDescription": "Handle the till and help customers at checkout.",
                "ageRequirement": "any",
                "applicationDeadline": "2026-11-01",
                "viberNumber": "0912345678"
            }"#,
        );
        let invalid = write_draft("invalid", r#"{"jobTitle": "Cashier", "viberNumber": "0812345678"}"#);
        let unparsable = write_draft("unparsable", "{ not json");

        let statuses = [
            validate_file(&valid, today),
            validate_file(&invalid, today),
            validate_file(&unparsable, today),
            validate_file(Path::new("does/not/exist.json"), today),
        ];
        for path in [valid, invalid, unparsable] {
            std::fs::remove_file(path).ok();
        }

        assert_eq!(
            statuses,
            [
                ValidateStatus::Accepted,
                ValidateStatus::Rejected,
                ValidateStatus::Failed,
                ValidateStatus::Failed,
            ]
        );
        assert_eq!(statuses.map(ValidateStatus::code), [0, 1, 2, 2]);
    }
}
