use serde::{Deserialize, Serialize};

use crate::schema::{RecordCategory, Section};

/// Headline counters from `/dashboard/overview`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewStats {
    pub total_beneficiaries: u64,
    pub active_cases: u64,
    pub pending_legal_aid: u64,
    pub completed_this_month: u64,
    pub recent_beneficiaries: u64,
    pub urgent_cases: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "message", alias = "title")]
    pub description: String,
    pub timestamp: Option<String>,
    pub user: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Activity {
    /// `record_created` -> `RECORD CREATED`
    pub fn badge(&self) -> String {
        self.kind.replace('_', " ").to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: RecordCategory,
    pub count: u64,
    /// The count request failed and `count` is a placeholder zero
    pub failed: bool,
}

/// Per-category totals gathered by the dashboard fan-out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleStats {
    pub counts: Vec<CategoryCount>,
}

impl ModuleStats {
    pub fn count(&self, category: RecordCategory) -> u64 {
        self.counts
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    pub fn section_total(&self, section: Section) -> u64 {
        self.counts
            .iter()
            .filter(|c| c.category.schema().section == section)
            .map(|c| c.count)
            .sum()
    }

    /// Totals for the programme sections, in sidebar order.
    pub fn distribution(&self) -> Vec<(Section, u64)> {
        [Section::Health, Section::Education, Section::SocialJustice]
            .into_iter()
            .map(|section| (section, self.section_total(section)))
            .collect()
    }

    pub fn failed(&self) -> impl Iterator<Item = RecordCategory> + '_ {
        self.counts.iter().filter(|c| c.failed).map(|c| c.category)
    }
}

/// Compact display: `1234` -> `1.2k`
pub fn format_count(n: u64) -> String {
    if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

/// Share of `part` in `total` as a whole percentage
pub fn percent(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn section_totals_treat_failures_as_zero() {
        let stats = ModuleStats {
            counts: vec![
                CategoryCount { category: RecordCategory::HealthCamps, count: 4, failed: false },
                CategoryCount { category: RecordCategory::Pwd, count: 0, failed: true },
                CategoryCount { category: RecordCategory::Elderly, count: 6, failed: false },
                CategoryCount { category: RecordCategory::Schools, count: 3, failed: false },
                CategoryCount { category: RecordCategory::Beneficiaries, count: 50, failed: false },
            ],
        };

        assert_eq!(stats.section_total(Section::Health), 10);
        assert_eq!(stats.section_total(Section::Education), 3);
        assert_eq!(
            stats.distribution(),
            vec![(Section::Health, 10), (Section::Education, 3), (Section::SocialJustice, 0)]
        );
        assert_eq!(stats.failed().collect::<Vec<_>>(), vec![RecordCategory::Pwd]);
        assert_eq!(stats.count(RecordCategory::Workshops), 0);
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.0k");
        assert_eq!(format_count(1234), "1.2k");
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn overview_tolerates_missing_counters() {
        let stats: OverviewStats = serde_json::from_value(json!({ "totalBeneficiaries": 12 })).unwrap();
        assert_eq!(stats.total_beneficiaries, 12);
        assert_eq!(stats.urgent_cases, 0);

        let activity: Activity = serde_json::from_value(json!({ "_id": "a", "message": "Added", "type": "record_created" })).unwrap();
        assert_eq!(activity.description, "Added");
        assert_eq!(activity.badge(), "RECORD CREATED");
    }
}
