pub mod monthly;
pub mod quantity;
pub mod totals;

pub use monthly::{MonthKey, MonthlyGroup, group_by_month};
pub use quantity::parse_quantity;
pub use totals::{ListSummary, item_total, summarize, sum_items};
