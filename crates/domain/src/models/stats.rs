//! Contact statistics domain models.

use serde::{Deserialize, Serialize};

/// Number of submissions for one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceCount {
    pub service: String,
    pub count: i64,
}

/// Summary statistics over all contact submissions.
///
/// Each field is computed independently; a field whose query failed holds
/// its zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContactStats {
    pub total: i64,
    pub new: i64,
    pub today: i64,
    pub this_week: i64,
    /// Ordered by count descending.
    pub by_service: Vec<ServiceCount>,
}

impl ContactStats {
    /// Count recorded for `service`, or zero when it has no submissions.
    pub fn service_count(&self, service: &str) -> i64 {
        self.by_service
            .iter()
            .find(|entry| entry.service == service)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default_is_all_zero() {
        let stats = ContactStats::default();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.this_week, 0);
        assert!(stats.by_service.is_empty());
    }

    #[test]
    fn test_service_count_lookup() {
        let stats = ContactStats {
            by_service: vec![
                ServiceCount {
                    service: "app-development".to_string(),
                    count: 2,
                },
                ServiceCount {
                    service: "consultation".to_string(),
                    count: 1,
                },
            ],
            ..Default::default()
        };
        assert_eq!(stats.service_count("app-development"), 2);
        assert_eq!(stats.service_count("store-setup"), 0);
    }

    #[test]
    fn test_stats_serialization_field_names() {
        let json = serde_json::to_string(&ContactStats::default()).unwrap();
        assert!(json.contains("\"this_week\":0"));
        assert!(json.contains("\"by_service\":[]"));
    }
}
