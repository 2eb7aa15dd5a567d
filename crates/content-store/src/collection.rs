//! Id-based list helpers shared by the keyed collections.

use crate::model::Keyed;

pub(crate) fn contains_id<T: Keyed>(items: &[T], id: &str) -> bool {
    items.iter().any(|item| item.id() == id)
}

/// Replace the record with the same id. Returns false if none matched.
pub(crate) fn replace_by_id<T: Keyed>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Drop every record with the given id, keeping the order of the rest.
pub(crate) fn remove_by_id<T: Keyed>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
