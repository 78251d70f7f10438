//! Database entity definitions.
//!
//! Entities are direct mappings to database rows. Each derives `FromRow`
//! generically, so the same struct decodes rows from either backend.

pub mod account;
pub mod setting;
pub mod social_link;
pub mod stats;
pub mod submission;

pub use account::AccountEntity;
pub use setting::SettingEntity;
pub use social_link::SocialLinkEntity;
pub use stats::ServiceCountEntity;
pub use submission::SubmissionEntity;
