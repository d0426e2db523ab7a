//! Property-based tests for pagination normalization

use proptest::prelude::*;

use roomcast::shared::pagination::{Page, PageParams, MAX_PER_PAGE};

proptest! {
    #[test]
    fn test_normalize_stays_within_bounds(
        page in proptest::option::of(any::<u32>()),
        per_page in proptest::option::of(any::<u32>()),
        default_per_page in 1..=MAX_PER_PAGE,
    ) {
        let request = PageParams { page, per_page }.normalize(default_per_page);
        prop_assert!(request.page >= 1);
        prop_assert!(request.per_page >= 1);
        prop_assert!(request.per_page <= MAX_PER_PAGE);
    }

    #[test]
    fn test_offset_matches_page_arithmetic(
        page in 1..10_000u32,
        per_page in 1..=MAX_PER_PAGE,
    ) {
        let request = PageParams {
            page: Some(page),
            per_page: Some(per_page),
        }
        .normalize(per_page);
        prop_assert_eq!(request.limit(), i64::from(per_page));
        prop_assert_eq!(
            request.offset(),
            i64::from(page - 1) * i64::from(per_page)
        );
    }

    #[test]
    fn test_has_more_iff_the_page_came_back_full(
        item_count in 0..=50usize,
        per_page in 1..=50u32,
    ) {
        let request = PageParams {
            page: Some(1),
            per_page: Some(per_page),
        }
        .normalize(per_page);
        let items: Vec<u32> = (0..item_count as u32).collect();
        let page = Page::new(items, request);
        prop_assert_eq!(page.has_more, item_count == per_page as usize);
    }
}
