//! Pagination of the ordered photo list.

/// Split an ordered slice into consecutive pages of `per_page` items.
///
/// Every page holds exactly `per_page` items except possibly the last,
/// which holds the remainder. Zero items yields zero pages; insertion
/// order is preserved. `per_page` is floored at 1.
pub fn paginate<T>(items: &[T], per_page: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    items.chunks(per_page.max(1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourteen_photos_six_per_page() {
        let items: Vec<u32> = (0..14).collect();
        let pages = paginate(&items, 6);
        let sizes: Vec<usize> = pages.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![6, 6, 2]);
    }

    #[test]
    fn test_exact_fit() {
        let items: Vec<u32> = (0..12).collect();
        let pages = paginate(&items, 6);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.len() == 6));
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, 6).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let items = vec!["a", "b", "c", "d", "e"];
        let pages = paginate(&items, 2);
        assert_eq!(pages[0], ["a", "b"]);
        assert_eq!(pages[1], ["c", "d"]);
        assert_eq!(pages[2], ["e"]);
    }

    #[test]
    fn test_zero_per_page_floored() {
        let items = vec![1, 2, 3];
        let pages = paginate(&items, 0);
        assert_eq!(pages.len(), 3);
    }
}
