use super::*;
use proptest::prelude::*;

fn rows(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

fn state(index: usize, size: usize) -> PageState {
    PageState::new(index, size).unwrap()
}

#[test]
fn zero_page_size_is_a_contract_violation() {
    let err = PageState::new(1, 0).unwrap_err();

    assert!(err.is_invariant_violation());
    assert_eq!(err.display_with_class(), "page:invariant_violation: page size must be non-zero");
}

#[test]
fn twelve_records_page_size_ten_with_gate_yields_three_pages() {
    // naturalPages = 2, totalPages = 3; page 3 is the locked synthetic page
    let rows = rows(12);
    let gate = GateConfig::gated(10);

    let page1 = paginate(&rows, state(1, 10), gate);
    assert_eq!(page1.natural_pages, 2);
    assert_eq!(page1.total_pages, 3);
    assert_eq!(page1.body.len(), 10);
    assert!(!page1.is_gated);

    let page2 = paginate(&rows, state(2, 10), gate);
    assert_eq!(page2.body.len(), 2);
    assert!(!page2.is_gated);

    let page3 = paginate(&rows, state(3, 10), gate);
    assert!(page3.is_gated);
    assert_eq!(page3.body, PageBody::Placeholder { rows: 10 });
}

#[test]
fn no_gated_page_when_gate_is_disabled() {
    let rows = rows(7);
    let view = paginate(&rows, state(1, 10), GateConfig::disabled());

    assert_eq!(view.natural_pages, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.body.rows().len(), 7);
    assert!(!view.is_gated);
}

#[test]
fn out_of_range_index_clamps_to_last_page() {
    let rows = rows(12);

    let view = paginate(&rows, state(99, 10), GateConfig::disabled());
    assert_eq!(view.index, 2);
    assert_eq!(view.body.rows(), &[10, 11]);

    let gated = paginate(&rows, state(99, 10), GateConfig::gated(10));
    assert_eq!(gated.index, 3);
    assert!(gated.is_gated);
}

#[test]
fn empty_set_renders_a_valid_empty_page_not_an_error() {
    let rows: Vec<u32> = vec![];
    let view = paginate(&rows, state(1, 10), GateConfig::disabled());

    assert_eq!(view.natural_pages, 0);
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.index, 1);
    assert!(view.body.is_empty());
    assert!(!view.is_gated);
}

#[test]
fn empty_set_with_gate_still_exposes_the_locked_page() {
    let rows: Vec<u32> = vec![];
    let view = paginate(&rows, state(1, 10), GateConfig::gated(10));

    assert_eq!(view.total_pages, 1);
    assert!(view.is_gated);
}

#[test]
fn clamp_resets_out_of_range_index_after_shrink() {
    // view was on page 5, the filtered set now fits in one page
    let st = state(5, 10).clamped(1);
    assert_eq!(st.index(), 1);

    // in-range index is untouched
    let st = state(2, 10).clamped(3);
    assert_eq!(st.index(), 2);
}

proptest! {
    #[test]
    fn natural_pages_concatenate_to_the_input_exactly_once(
        n in 0usize..120,
        size in 1usize..20,
    ) {
        let rows = rows(n);
        let pages = natural_pages(n, size);

        let mut seen = Vec::new();
        for index in 1..=pages {
            let view = paginate(&rows, state(index, size), GateConfig::disabled());
            prop_assert!(!view.is_gated);
            seen.extend_from_slice(view.body.rows());
        }

        prop_assert_eq!(seen, rows);
    }

    #[test]
    fn every_natural_page_is_full_except_possibly_the_last(
        n in 1usize..120,
        size in 1usize..20,
    ) {
        let rows = rows(n);
        let pages = natural_pages(n, size);

        for index in 1..pages {
            let view = paginate(&rows, state(index, size), GateConfig::disabled());
            prop_assert_eq!(view.body.len(), size);
        }

        let last = paginate(&rows, state(pages, size), GateConfig::disabled());
        prop_assert!(last.body.len() >= 1 && last.body.len() <= size);
    }

    #[test]
    fn gate_appends_exactly_one_page(n in 0usize..120, size in 1usize..20) {
        let rows = rows(n);

        let open = paginate(&rows, state(1, size), GateConfig::disabled());
        let gated = paginate(&rows, state(1, size), GateConfig::gated(size));

        prop_assert_eq!(gated.total_pages, open.total_pages + 1);
        prop_assert_eq!(gated.natural_pages, open.natural_pages);
    }
}
