//! End-to-end exercise of the public surface through the prelude only.

use tabview::prelude::*;

fn dataset() -> Vec<Record> {
    (1..=25)
        .map(|i| {
            Record::new(format!("acct-{i:02}"))
                .with("name", format!("Account {i:02}"))
                .with("country", if i % 2 == 0 { "USA" } else { "Canada" })
                .with("vais", (100 - i) as u64)
        })
        .collect()
}

#[test]
fn full_pipeline_from_mount_to_locked_page() {
    let schema = ViewSchema::new()
        .with_page_size(DEFAULT_PAGE_SIZE)
        .with_free_pages(DEFAULT_FREE_TIER_PAGES)
        .with_ranking_field("vais")
        .with_searchable_fields(["name"])
        .with_gate(GateConfig::gated(DEFAULT_PAGE_SIZE));

    let mut view = TableView::new(schema, dataset()).unwrap();

    view.set_filter(FilterSpec::new().equals("country", "USA"));
    view.sort_by("vais");

    let frame = view.render();
    assert_eq!(frame.filtered_count, 12);
    assert_eq!(frame.natural_pages, 2);
    assert_eq!(frame.total_pages, 3);
    assert_eq!(frame.tier, AccessTier::Visible);
    assert_eq!(
        frame.sort_key,
        Some(SortKey {
            field: "vais".to_string(),
            direction: SortDirection::Desc,
        })
    );

    view.select_all_visible();
    assert_eq!(view.render().selection_indicator, SelectionIndicator::Checked);

    view.set_page(3);
    let locked = view.render();
    assert!(locked.is_gated);
    assert_eq!(locked.tier, AccessTier::Locked);
    assert_eq!(locked.body, PageBody::Placeholder { rows: DEFAULT_PAGE_SIZE });
}

#[test]
fn guards_route_around_the_session_signal() {
    let mut guard = RouteGuard::new("/login", "/dashboard");
    let session = SessionState::default();

    assert_eq!(
        guard.admit(RouteGate::Protected, &session, "/lookalike"),
        GuardDecision::Redirect {
            to: "/login".to_string(),
            preserve: Some("/lookalike".to_string()),
        }
    );
    assert_eq!(
        guard.admit(RouteGate::PublicOnly, &session, "/login"),
        GuardDecision::Admit
    );
}
