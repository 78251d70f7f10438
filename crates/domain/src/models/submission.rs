//! Contact submission domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Lifecycle status of a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    New,
    InProgress,
    Resolved,
    Spam,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 4] = [
        SubmissionStatus::New,
        SubmissionStatus::InProgress,
        SubmissionStatus::Resolved,
        SubmissionStatus::Spam,
    ];

    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::InProgress => "in_progress",
            SubmissionStatus::Resolved => "resolved",
            SubmissionStatus::Spam => "spam",
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(SubmissionStatus::New),
            "in_progress" => Ok(SubmissionStatus::InProgress),
            "resolved" => Ok(SubmissionStatus::Resolved),
            "spam" => Ok(SubmissionStatus::Spam),
            _ => Err(format!("Unknown submission status: {}", s)),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service a visitor is enquiring about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    AppDevelopment,
    ThemeCustomization,
    StoreSetup,
    Consultation,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::AppDevelopment,
        ServiceKind::ThemeCustomization,
        ServiceKind::StoreSetup,
        ServiceKind::Consultation,
    ];

    /// Value stored in the `service` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::AppDevelopment => "app-development",
            ServiceKind::ThemeCustomization => "theme-customization",
            ServiceKind::StoreSetup => "store-setup",
            ServiceKind::Consultation => "consultation",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "app-development" => Ok(ServiceKind::AppDevelopment),
            "theme-customization" => Ok(ServiceKind::ThemeCustomization),
            "store-setup" => Ok(ServiceKind::StoreSetup),
            "consultation" => Ok(ServiceKind::Consultation),
            _ => Err(format!("Unknown service: {}", s)),
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored contact submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Submission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: ServiceKind,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when a visitor submits the contact form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct NewSubmission {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,
    #[validate(regex(path = "*PHONE_REGEX", message = "Phone number is not valid"))]
    pub phone: Option<String>,
    pub service: ServiceKind,
    #[validate(length(min = 10, max = 1000, message = "Message must be 10-1000 characters"))]
    pub message: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl NewSubmission {
    /// Builds the stored record from the generated identifier and timestamp.
    ///
    /// The result echoes exactly the supplied fields; nothing is read back
    /// from the store.
    pub fn into_submission(self, id: i64, created_at: DateTime<Utc>) -> Submission {
        Submission {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            service: self.service,
            message: self.message,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            status: SubmissionStatus::New,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Optional predicates for listing and counting submissions.
///
/// Every field is independent. An empty filter selects all rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SubmissionFilter {
    pub status: Option<SubmissionStatus>,
    pub service: Option<ServiceKind>,
    /// Inclusive lower bound on `created_at`.
    pub from_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub to_date: Option<DateTime<Utc>>,
    /// Case-insensitive substring of name, email or message.
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SubmissionFilter {
    pub fn with_status(status: SubmissionStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn since(from_date: DateTime<Utc>) -> Self {
        Self {
            from_date: Some(from_date),
            ..Default::default()
        }
    }

    /// Returns true when no predicate, limit or offset is set.
    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }
}

// Digits, spaces and the usual phone punctuation
lazy_static::lazy_static! {
    pub static ref PHONE_REGEX: regex::Regex = regex::Regex::new(r"^[0-9+\-\s()]{7,20}$").unwrap();
}
