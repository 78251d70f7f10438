//! Domain models for Contact Desk.

pub mod account;
pub mod setting;
pub mod social_link;
pub mod stats;
pub mod submission;

pub use account::{Account, NewAccount};
pub use setting::Setting;
pub use social_link::SocialLink;
pub use stats::{ContactStats, ServiceCount};
pub use submission::{NewSubmission, ServiceKind, Submission, SubmissionFilter, SubmissionStatus};
