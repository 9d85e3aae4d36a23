use crate::models::item::Item;
use std::str::FromStr;

/// Ordering applied to a listing. The empty string parses to `Unsorted`,
/// matching the UI's "no sort selected" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(SortOrder::Unsorted),
            "ascending" => Ok(SortOrder::Ascending),
            "descending" => Ok(SortOrder::Descending),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

/// Filter items by case-insensitive substring match on name, then order
/// them. Pure: the input is left untouched.
///
/// `Unsorted` preserves the input order exactly (the fetch order, newest
/// first). Ascending/descending compare names case-insensitively with a
/// stable sort, so equal names keep their relative input order.
pub fn filter_and_sort(items: &[Item], search: &str, order: SortOrder) -> Vec<Item> {
    let needle = search.to_lowercase();

    let mut filtered: Vec<Item> = items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => {
            filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortOrder::Descending => {
            filtered.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
    }

    filtered
}
