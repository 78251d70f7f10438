//! First-provisioning seed data.
//!
//! Seeds one administrative account and a starter set of social links. Every
//! insert is insert-if-absent, so seeding an already provisioned store changes
//! nothing.

use domain::models::NewAccount;
use serde::Deserialize;
use shared::password::{generate_password, hash_password};
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::store::DataStore;

/// Length of the password generated when none is configured.
const GENERATED_PASSWORD_LEN: usize = 24;

/// Starter social links as `(platform, url)`, all seeded active.
pub const STARTER_SOCIAL_LINKS: [(&str, &str); 4] = [
    ("instagram", "https://instagram.com/contactdesk"),
    ("linkedin", "https://linkedin.com/company/contactdesk"),
    ("github", "https://github.com/contactdesk"),
    ("telegram", "https://t.me/contactdesk"),
];

/// Seed account configuration (`[admin]` section).
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSeedConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_email")]
    pub email: String,
    /// Cleartext password to hash for the seed account. Never logged.
    #[serde(default)]
    pub password: Option<String>,
    /// Without a configured password, generate one and print it at warn
    /// level instead of refusing to seed. Local development only.
    #[serde(default)]
    pub log_generated_password: bool,
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_email() -> String {
    "admin@contactdesk.local".to_string()
}

impl Default for AdminSeedConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            email: default_email(),
            password: None,
            log_generated_password: false,
        }
    }
}

impl AdminSeedConfig {
    /// Configuration with an explicit seed password.
    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..Self::default()
        }
    }

    fn configured_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|password| !password.is_empty())
    }
}

/// Rows actually inserted by [`seed_defaults`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    /// The seed account received a generated password.
    pub password_generated: bool,
    pub social_links_created: u64,
}

impl SeedReport {
    /// Whether this run inserted anything at all.
    pub fn is_first_provisioning(&self) -> bool {
        self.admin_created || self.social_links_created > 0
    }
}

/// Inserts the seed account and starter social links unless already present.
///
/// The password is only resolved and hashed when no account holds the seed
/// username or email. With no password configured, seeding fails with
/// [`StoreError::MissingAdminPassword`] unless
/// [`AdminSeedConfig::log_generated_password`] is set.
pub async fn seed_defaults<S>(store: &S, config: &AdminSeedConfig) -> Result<SeedReport, StoreError>
where
    S: DataStore + ?Sized,
{
    let mut report = SeedReport::default();

    if store.account_exists(&config.username, &config.email).await? {
        debug!(username = %config.username, "Seed admin account already present");
    } else {
        let (password, generated) = match config.configured_password() {
            Some(password) => (password.to_string(), false),
            None if config.log_generated_password => {
                (generate_password(GENERATED_PASSWORD_LEN), true)
            }
            None => {
                return Err(StoreError::MissingAdminPassword {
                    username: config.username.clone(),
                })
            }
        };

        let account = NewAccount {
            username: config.username.clone(),
            email: config.email.clone(),
            password_hash: hash_password(&password)?,
        };
        report.admin_created = store.insert_account_if_absent(&account).await? > 0;

        if report.admin_created {
            info!(username = %account.username, email = %account.email, "Seed admin account created");
            if generated {
                report.password_generated = true;
                warn!(
                    username = %account.username,
                    "SECURITY: Generated admin password: {} \
                     (disable admin.log_generated_password outside local development)",
                    password
                );
            }
        }
    }

    for (platform, url) in STARTER_SOCIAL_LINKS {
        let inserted = store.insert_social_link_if_absent(platform, url, true).await?;
        if inserted > 0 {
            info!(platform = platform, "Seed social link created");
        }
        report.social_links_created += inserted;
    }

    Ok(report)
}
