//! Per-group market profiles: how common a category is next to how many
//! users its apps reach on average.

use apps_model::AppTable;

use crate::average::{Normalize, grouped_average};
use crate::error::Result;
use crate::frequency::value_counts;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupProfile {
    pub group: String,
    pub apps: usize,
    /// Percentage of all rows in this group.
    pub share_pct: f64,
    pub average: f64,
}

/// Profiles of every group, most popular on average first.
///
/// Ties order by group name, descending, like the display tables.
pub fn market_profile(
    table: &AppTable,
    group: usize,
    metric: usize,
    normalize: Normalize,
) -> Result<Vec<GroupProfile>> {
    let counts = value_counts(table, group)?;
    let total = table.len() as f64;
    let mut profiles: Vec<GroupProfile> = grouped_average(table, group, metric, normalize)?
        .into_iter()
        .map(|(name, average)| {
            let apps = counts.get(&name).copied().unwrap_or(0);
            GroupProfile {
                share_pct: apps as f64 / total * 100.0,
                group: name,
                apps,
                average,
            }
        })
        .collect();
    profiles.sort_by(|a, b| {
        b.average
            .total_cmp(&a.average)
            .then_with(|| b.group.cmp(&a.group))
    });
    tracing::debug!(
        marketplace = %table.marketplace,
        groups = profiles.len(),
        "built market profile"
    );
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apps_model::Marketplace;

    #[test]
    fn joins_share_and_average() {
        let rows = [
            ("Navigation", "345046"),
            ("Navigation", "154911"),
            ("Games", "2130805"),
            ("Reference", "985920"),
        ];
        let table = AppTable::new(
            Marketplace::AppStore,
            Vec::new(),
            rows.iter()
                .map(|(genre, ratings)| vec![(*genre).to_string(), (*ratings).to_string()])
                .collect(),
        );
        let profiles = market_profile(&table, 0, 1, Normalize::Raw).unwrap();

        let groups: Vec<&str> = profiles.iter().map(|p| p.group.as_str()).collect();
        assert_eq!(groups, vec!["Games", "Reference", "Navigation"]);
        let navigation = &profiles[2];
        assert_eq!(navigation.apps, 2);
        assert_eq!(navigation.share_pct, 50.0);
        assert_eq!(navigation.average, 249_978.5);
    }
}
