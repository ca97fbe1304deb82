//! Gift selection and ordering.

use giftwise_kb::GiftItem;

/// Upper bound on gifts per recommendation.
pub const MAX_GIFTS: usize = 5;

/// Select catalog items whose category is among the detected interests.
///
/// A single stable pass over the catalog: authored catalog order is the
/// priority signal, so selected items keep their relative order and no
/// re-sorting by price or popularity happens. Truncated to `limit`.
/// Zero matches is a valid outcome, not an error.
pub fn rank(interests: &[String], catalog: &[GiftItem], limit: usize) -> Vec<GiftItem> {
    catalog
        .iter()
        .filter(|item| interests.iter().any(|i| i == &item.category))
        .take(limit)
        .cloned()
        .collect()
}
