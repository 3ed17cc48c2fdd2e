//! News ordering.

use std::cmp::Reverse;

use crate::api::types::NewsItem;

use super::parse_timestamp;

/// Newest first; items without a usable timestamp go last, in API order.
pub fn sort_news(items: &mut [NewsItem]) {
    items.sort_by_cached_key(|item| {
        let ts = item.published_at.as_deref().and_then(parse_timestamp);
        (ts.is_none(), Reverse(ts))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, published_at: Option<&str>) -> NewsItem {
        NewsItem { id, title: format!("n{id}"), published_at: published_at.map(str::to_owned), ..NewsItem::default() }
    }

    #[test]
    fn newest_first_undated_last() {
        let mut items = vec![
            item(1, Some("2024-10-01T09:00:00Z")),
            item(2, None),
            item(3, Some("2024-10-18")),
            item(4, Some("garbled")),
            item(5, Some("2024-10-05 12:00:00")),
        ];
        sort_news(&mut items);
        let ids: Vec<i64> = items.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 5, 1, 2, 4]);
    }
}
