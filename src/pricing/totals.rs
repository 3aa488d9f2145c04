use serde::Serialize;

use crate::models::Item;

use super::quantity::parse_quantity;

/// Quantity multiplier times unit price; items without a price are worth zero.
pub fn item_total(item: &Item) -> f64 {
    parse_quantity(item.quantity.as_deref()) * item.estimated_price.unwrap_or(0.0)
}

pub fn sum_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> f64 {
    items.into_iter().map(item_total).sum()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub pending_count: usize,
    pub completed_count: usize,
    pub pending_total: f64,
    pub completed_total: f64,
    pub total: f64,
}

pub fn summarize(items: &[Item]) -> ListSummary {
    let (completed, pending): (Vec<&Item>, Vec<&Item>) =
        items.iter().partition(|item| item.completed);
    let pending_total = sum_items(pending.iter().copied());
    let completed_total = sum_items(completed.iter().copied());

    ListSummary {
        pending_count: pending.len(),
        completed_count: completed.len(),
        pending_total,
        completed_total,
        total: pending_total + completed_total,
    }
}
