use athlete_track_ui::api::ApiError;
use athlete_track_ui::cache::{Resource, ResourceStore};
use athlete_track_ui::models::Finance;
use chrono::NaiveDate;

fn finance(id: i64, amount: f64) -> Finance {
    Finance {
        id,
        user_id: 1,
        category: "Equipment".to_string(),
        amount,
        is_income: false,
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        description: None,
    }
}

#[test]
fn concurrent_observers_share_one_fetch() {
    let mut store: ResourceStore<Finance> = ResourceStore::new();

    let token = store.begin("1");
    assert!(token.is_some());
    // A second observer of the same key must not start another request.
    assert_eq!(store.begin("1"), None);
    // A different user key is an independent fetch.
    assert!(store.begin("2").is_some());

    assert!(store.complete("1", token.unwrap(), vec![finance(1, 10.0)]));
    let value = store.value("1").unwrap();
    assert_eq!(value.len(), 1);
    // The key is free again once the result landed.
    assert!(store.begin("1").is_some());
}

#[test]
fn loading_only_without_a_previous_value() {
    let mut store: ResourceStore<Finance> = ResourceStore::new();

    let token = store.begin("1").unwrap();
    assert!(store.is_loading("1"));
    store.complete("1", token, vec![finance(1, 10.0)]);
    assert!(!store.is_loading("1"));

    // Stale refetch: the old value keeps rendering, no spinner.
    store.invalidate("1");
    let token = store.begin("1").unwrap();
    assert!(store.is_fetching("1"));
    assert!(!store.is_loading("1"));
    assert_eq!(store.value("1").unwrap()[0].id, 1);
    store.complete("1", token, vec![finance(2, 20.0)]);
    assert_eq!(store.value("1").unwrap()[0].id, 2);
}

#[test]
fn invalidation_marks_stale_and_triggers_refetch_need() {
    let mut store: ResourceStore<Finance> = ResourceStore::new();

    let token = store.begin("1").unwrap();
    store.complete("1", token, vec![finance(1, 10.0)]);
    assert!(!store.needs_fetch("1"));

    store.invalidate("1");
    assert!(store.needs_fetch("1"));
}

#[test]
fn results_from_invalidated_fetches_are_discarded() {
    let mut store: ResourceStore<Finance> = ResourceStore::new();

    let stale_token = store.begin("1").unwrap();
    // Mutation lands while the fetch is in flight: the entry is invalidated
    // and a fresh fetch starts.
    store.invalidate("1");
    let fresh_token = store.begin("1").unwrap();

    // The fresh result resolves first and wins.
    assert!(store.complete("1", fresh_token, vec![finance(2, 20.0)]));
    // The orphaned result is dropped on arrival.
    assert!(!store.complete("1", stale_token, vec![finance(1, 10.0)]));
    assert_eq!(store.value("1").unwrap()[0].id, 2);

    // Same for failures of orphaned fetches.
    assert!(!store.fail("1", stale_token, ApiError::Transport("late".to_string())));
    assert!(store.error("1").is_none());
}

#[test]
fn failed_fetch_keeps_previous_value_and_exposes_error() {
    let mut store: ResourceStore<Finance> = ResourceStore::new();

    let token = store.begin("1").unwrap();
    store.complete("1", token, vec![finance(1, 10.0)]);

    store.invalidate("1");
    let token = store.begin("1").unwrap();
    assert!(store.fail("1", token, ApiError::Transport("boom".to_string())));

    assert_eq!(store.value("1").unwrap()[0].id, 1);
    assert_eq!(store.error("1"), Some(&ApiError::Transport("boom".to_string())));
    // No automatic retry: the entry is not considered fetch-worthy until the
    // user re-triggers via invalidation.
    assert!(!store.needs_fetch("1"));
}

#[test]
fn successful_refetch_clears_the_error() {
    let mut store: ResourceStore<Finance> = ResourceStore::new();

    let token = store.begin("1").unwrap();
    store.fail("1", token, ApiError::Transport("boom".to_string()));
    assert!(store.error("1").is_some());

    store.invalidate("1");
    let token = store.begin("1").unwrap();
    store.complete("1", token, vec![finance(1, 10.0)]);
    assert!(store.error("1").is_none());
}

#[test]
fn eviction_clears_every_key_and_orphans_in_flight_fetches() {
    let mut store: ResourceStore<Finance> = ResourceStore::new();

    let token_a = store.begin("1").unwrap();
    store.complete("1", token_a, vec![finance(1, 10.0)]);
    let token_b = store.begin("2").unwrap();

    store.evict_all();
    assert!(store.value("1").is_none());
    assert!(store.value("2").is_none());
    // The in-flight result for the evicted key resolves into nothing.
    assert!(!store.complete("2", token_b, vec![finance(9, 99.0)]));
    assert!(store.value("2").is_none());
}

#[test]
fn prefix_invalidation_covers_all_user_keys() {
    let mut store: ResourceStore<Finance> = ResourceStore::new();

    let token = store.begin("1").unwrap();
    store.complete("1", token, vec![finance(1, 10.0)]);
    let token = store.begin("2").unwrap();
    store.complete("2", token, vec![finance(2, 20.0)]);

    store.invalidate_all();
    assert!(store.needs_fetch("1"));
    assert!(store.needs_fetch("2"));
    // Values stay visible while the refetches run.
    assert!(store.value("1").is_some());
    assert!(store.value("2").is_some());
}

#[test]
fn resource_tags_map_to_endpoint_paths() {
    assert_eq!(Resource::Metrics.path(), "/api/metrics");
    assert_eq!(Resource::Nutrition.path(), "/api/nutrition");
    assert_eq!(Resource::Injuries.path(), "/api/injuries");
    assert_eq!(Resource::Finances.path(), "/api/finances");
}
