//! Keyed read-through cache of server responses.
//!
//! Keys are `(resource, userId-as-string)`. The state machine lives in
//! [`ResourceStore`], which is plain data so the ordering guarantees
//! (dedup, stale-while-revalidate, last-write-wins) are testable off the
//! rendering layer. [`QueryClient`] wraps one store per resource in signals
//! and the `use_*` hooks drive fetches reactively.

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::api::{self, ApiError};
use crate::models::{Finance, Injury, NutritionLog, PerformanceMetric};
use crate::session::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Metrics,
    Nutrition,
    Injuries,
    Finances,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Metrics => "/api/metrics",
            Resource::Nutrition => "/api/nutrition",
            Resource::Injuries => "/api/injuries",
            Resource::Finances => "/api/finances",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry<T> {
    value: Option<Vec<T>>,
    error: Option<ApiError>,
    generation: u64,
    fetching: bool,
    stale: bool,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Entry {
            value: None,
            error: None,
            generation: 0,
            fetching: false,
            stale: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore<T> {
    entries: HashMap<String, Entry<T>>,
}

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        ResourceStore {
            entries: HashMap::new(),
        }
    }
}

impl<T> ResourceStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, key: &str) -> Option<&Vec<T>> {
        self.entries.get(key).and_then(|e| e.value.as_ref())
    }

    pub fn error(&self, key: &str) -> Option<&ApiError> {
        self.entries.get(key).and_then(|e| e.error.as_ref())
    }

    pub fn is_fetching(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.fetching)
    }

    /// Spinners show only when there is no previous value to display.
    pub fn is_loading(&self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(entry) => entry.value.is_none() && entry.fetching,
            None => false,
        }
    }

    pub fn needs_fetch(&self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(entry) => !entry.fetching && (entry.value.is_none() || entry.stale),
            None => true,
        }
    }

    /// Starts a fetch for the key, returning the generation token the result
    /// must present. `None` while another fetch for the same key is in
    /// flight, so concurrent observers share a single request.
    pub fn begin(&mut self, key: &str) -> Option<u64> {
        let entry = self.entries.entry(key.to_string()).or_default();
        if entry.fetching {
            return None;
        }
        entry.fetching = true;
        entry.stale = false;
        Some(entry.generation)
    }

    /// Installs the fetched value atomically. A result whose token no longer
    /// matches the entry's generation belongs to an invalidated fetch and is
    /// dropped (last write on the key wins).
    pub fn complete(&mut self, key: &str, token: u64, items: Vec<T>) -> bool {
        let Some(entry) = self.entries.get_mut(key) else {
            return false;
        };
        if entry.generation != token {
            return false;
        }
        entry.value = Some(items);
        entry.error = None;
        entry.fetching = false;
        entry.stale = false;
        true
    }

    /// A failed fetch keeps the previous value visible and exposes the
    /// error; nothing retries automatically.
    pub fn fail(&mut self, key: &str, token: u64, error: ApiError) -> bool {
        let Some(entry) = self.entries.get_mut(key) else {
            return false;
        };
        if entry.generation != token {
            return false;
        }
        entry.error = Some(error);
        entry.fetching = false;
        true
    }

    /// Marks the entry stale and orphans any in-flight fetch; the next
    /// observer triggers the refetch.
    pub fn invalidate(&mut self, key: &str) {
        let entry = self.entries.entry(key.to_string()).or_default();
        entry.generation += 1;
        entry.stale = true;
        entry.fetching = false;
    }

    /// Prefix invalidation across every user key of this resource.
    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.generation += 1;
            entry.stale = true;
            entry.fetching = false;
        }
    }

    /// Session switched users: drop everything so records can never leak
    /// across users. In-flight fetches resolve against a missing entry and
    /// are discarded.
    pub fn evict_all(&mut self) {
        self.entries.clear();
    }
}

#[derive(Clone, Copy)]
pub struct QueryClient {
    pub metrics: Signal<ResourceStore<PerformanceMetric>>,
    pub nutrition: Signal<ResourceStore<NutritionLog>>,
    pub injuries: Signal<ResourceStore<Injury>>,
    pub finances: Signal<ResourceStore<Finance>>,
}

impl QueryClient {
    pub fn invalidate(&self, resource: Resource, user_id: i64) {
        let key = user_id.to_string();
        match resource {
            Resource::Metrics => {
                let mut store = self.metrics;
                store.write().invalidate(&key);
            }
            Resource::Nutrition => {
                let mut store = self.nutrition;
                store.write().invalidate(&key);
            }
            Resource::Injuries => {
                let mut store = self.injuries;
                store.write().invalidate(&key);
            }
            Resource::Finances => {
                let mut store = self.finances;
                store.write().invalidate(&key);
            }
        }
    }

    pub fn evict_all(&self) {
        let mut metrics = self.metrics;
        metrics.write().evict_all();
        let mut nutrition = self.nutrition;
        nutrition.write().evict_all();
        let mut injuries = self.injuries;
        injuries.write().evict_all();
        let mut finances = self.finances;
        finances.write().evict_all();
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}

/// Provides the process-wide query cache.
#[component]
pub fn QueryProvider(children: Element) -> Element {
    use_context_provider(|| QueryClient {
        metrics: Signal::new(ResourceStore::new()),
        nutrition: Signal::new(ResourceStore::new()),
        injuries: Signal::new(ResourceStore::new()),
        finances: Signal::new(ResourceStore::new()),
    });

    rsx! {
        {children}
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T: 'static> {
    pub data: Vec<T>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl<T> QueryResult<T> {
    fn disabled() -> Self {
        QueryResult {
            data: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

/// Shared read hook. Fetching is suppressed entirely until the session has
/// a user id; a 401 mid-fetch expires the session.
fn use_store_query<T, F, Fetch>(store: Signal<ResourceStore<T>>, fetch: Fetch) -> QueryResult<T>
where
    T: Clone + PartialEq + 'static,
    F: std::future::Future<Output = Result<Vec<T>, ApiError>> + 'static,
    Fetch: Fn(i64) -> F + Copy + 'static,
{
    let session = use_session();
    let mut store = store;

    use_effect(move || {
        let Some(user_id) = session.user_id() else {
            return;
        };
        let key = user_id.to_string();
        if !store.read().needs_fetch(&key) {
            return;
        }
        let Some(token) = store.write().begin(&key) else {
            return;
        };
        spawn(async move {
            match fetch(user_id).await {
                Ok(items) => {
                    store.write().complete(&key, token, items);
                }
                Err(ApiError::Unauthorized) => {
                    store.write().fail(&key, token, ApiError::Unauthorized);
                    session.expire();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "fetch failed");
                    store.write().fail(&key, token, err);
                }
            }
        });
    });

    let Some(user_id) = session.user_id() else {
        return QueryResult::disabled();
    };
    let key = user_id.to_string();
    let store_read = store.read();
    let data = store_read.value(&key).cloned();
    let error = store_read.error(&key).cloned();
    QueryResult {
        // Loading only while there is neither a previous value nor a
        // failure to show; stale refetches keep rendering the old value.
        is_loading: data.is_none() && error.is_none(),
        data: data.unwrap_or_default(),
        error,
    }
}

pub fn use_metrics() -> QueryResult<PerformanceMetric> {
    let client = use_query_client();
    use_store_query(client.metrics, api::metrics)
}

pub fn use_nutrition() -> QueryResult<NutritionLog> {
    let client = use_query_client();
    use_store_query(client.nutrition, api::nutrition)
}

pub fn use_injuries() -> QueryResult<Injury> {
    let client = use_query_client();
    use_store_query(client.injuries, api::injuries)
}

pub fn use_finances() -> QueryResult<Finance> {
    let client = use_query_client();
    use_store_query(client.finances, api::finances)
}
