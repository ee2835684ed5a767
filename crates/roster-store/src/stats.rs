//! Summary numbers for the dashboard header and gender chart.

use std::collections::HashSet;

use roster_model::Record;
use serde::Serialize;

/// Bucket name for records with an empty gender.
pub const UNKNOWN_GENDER: &str = "Unknown";

/// Records sharing one gender value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderCount {
    pub gender: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    /// In order of first appearance.
    pub by_gender: Vec<GenderCount>,
    pub unique_ips: usize,
}

impl DashboardStats {
    pub fn from_records(records: &[Record]) -> Self {
        let mut by_gender: Vec<GenderCount> = Vec::new();
        for record in records {
            let gender = if record.gender.is_empty() {
                UNKNOWN_GENDER
            } else {
                record.gender.as_str()
            };
            match by_gender.iter_mut().find(|bucket| bucket.gender == gender) {
                Some(bucket) => bucket.count += 1,
                None => by_gender.push(GenderCount {
                    gender: gender.to_string(),
                    count: 1,
                }),
            }
        }

        let unique_ips = records
            .iter()
            .map(|record| record.ip_address.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            total: records.len(),
            by_gender,
            unique_ips,
        }
    }

    pub fn gender_categories(&self) -> usize {
        self.by_gender.len()
    }

    pub fn count_for(&self, gender: &str) -> usize {
        self.by_gender
            .iter()
            .find(|bucket| bucket.gender == gender)
            .map_or(0, |bucket| bucket.count)
    }

    /// Share of `count` in the total, as a percentage.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::RecordId;

    fn record(id: &str, gender: &str, ip: &str) -> Record {
        Record {
            id: RecordId::new(id),
            gender: gender.to_string(),
            ip_address: ip.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn test_counts_by_first_appearance() {
        let records = vec![
            record("1", "Female", "10.0.0.1"),
            record("2", "Male", "10.0.0.2"),
            record("3", "", "10.0.0.1"),
            record("4", "Female", "10.0.0.3"),
        ];
        let stats = DashboardStats::from_records(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.unique_ips, 3);
        assert_eq!(stats.gender_categories(), 3);
        let order: Vec<&str> = stats.by_gender.iter().map(|b| b.gender.as_str()).collect();
        assert_eq!(order, vec!["Female", "Male", UNKNOWN_GENDER]);
        assert_eq!(stats.count_for("Female"), 2);
        assert_eq!(stats.count_for("Agender"), 0);
        assert!((stats.percent(2) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_records() {
        let stats = DashboardStats::from_records(&[]);
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(stats.percent(0), 0.0);
    }
}
