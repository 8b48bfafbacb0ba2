use super::*;

// =============================================================
// Boundaries
// =============================================================

#[test]
fn empty_list_has_no_pages_and_no_controls() {
    let pager = Pager::new(10);
    assert_eq!(pager.total_pages(), 0);
    assert!(!pager.has_prev());
    assert!(!pager.has_next());
}

#[test]
fn twenty_three_items_by_ten_is_three_pages() {
    let mut pager = Pager::new(10);
    pager.loaded(2, 23);
    assert_eq!(pager.total_pages(), 3);
    assert!(pager.has_prev());
    assert!(pager.has_next());
    assert_eq!(pager.prev_page(), Some(1));
    assert_eq!(pager.next_page(), Some(3));

    pager.loaded(3, 23);
    assert!(pager.has_prev());
    assert!(!pager.has_next());
    assert_eq!(pager.next_page(), None);
}

#[test]
fn first_page_disables_prev() {
    let mut pager = Pager::new(10);
    pager.loaded(1, 23);
    assert!(!pager.has_prev());
    assert_eq!(pager.prev_page(), None);
    assert!(pager.has_next());
}

#[test]
fn exact_multiple_has_no_partial_page() {
    let mut pager = Pager::new(10);
    pager.loaded(2, 20);
    assert_eq!(pager.total_pages(), 2);
    assert!(!pager.has_next());
}

#[test]
fn page_beyond_total_disables_next() {
    let mut pager = Pager::new(10);
    pager.loaded(5, 23);
    assert!(!pager.has_next());
    assert!(pager.has_prev());
}

#[test]
fn loaded_clamps_page_zero() {
    let mut pager = Pager::new(10);
    pager.loaded(0, 5);
    assert_eq!(pager.page, 1);
}

#[test]
fn zero_size_is_treated_as_one() {
    let mut pager = Pager::new(0);
    pager.loaded(1, 3);
    assert_eq!(pager.size, 1);
    assert_eq!(pager.total_pages(), 3);
}
