use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use super::totals::item_total;
use crate::models::Item;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(ts: DateTime<Utc>) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyGroup<T> {
    pub month: MonthKey,
    pub total: f64,
    pub entries: Vec<T>,
}

/// Groups entries by the calendar month of their timestamp, keeping the order in
/// which months first appear. Feed it a newest-first sequence to get newest-first
/// months.
pub fn group_by_month<T>(
    entries: impl IntoIterator<Item = T>,
    timestamp: impl Fn(&T) -> DateTime<Utc>,
    item: impl Fn(&T) -> &Item,
) -> Vec<MonthlyGroup<T>> {
    let mut groups: Vec<MonthlyGroup<T>> = Vec::new();
    for entry in entries {
        let key = MonthKey::of(timestamp(&entry));
        let value = item_total(item(&entry));
        match groups.iter_mut().find(|group| group.month == key) {
            Some(group) => {
                group.total += value;
                group.entries.push(entry);
            }
            None => groups.push(MonthlyGroup {
                month: key,
                total: value,
                entries: vec![entry],
            }),
        }
    }
    groups
}
