//! Shared traits for finance records.

use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies the monetary amount a record contributes to an aggregate.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of every record yielded by `items`.
pub fn sum_amounts<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|item| item.amount()).sum()
}

/// Looks up the record carrying `id`.
pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Index of the record carrying `id`.
pub fn position_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Rounds a currency value to whole cents for display.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
