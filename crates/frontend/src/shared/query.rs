//! Query cache and list data hooks.
//!
//! Results are cached per `(resource, query string)` for [`STALE_TIME_MS`].
//! Callers asking for a key that is already being fetched wait for that
//! request instead of sending their own. A failed fetch is retried once
//! after [`RETRY_DELAY_MS`], except when the API answered 401.

use contracts::shared::list_filters::ListFilters;
use contracts::shared::pagination::ListResponse;
use contracts::domain::sales_orders::Lookup;
use futures::channel::oneshot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::shared::http::{resource_path, use_api, ApiError};
use crate::shared::page_state::PageState;

pub const STALE_TIME_MS: f64 = 60_000.0;
pub const RETRY_COUNT: u32 = 1;
pub const RETRY_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: String,
    pub query: String,
}

impl QueryKey {
    pub fn new(resource: &str, filters: &impl Serialize) -> Result<Self, ApiError> {
        let query = serde_qs::to_string(filters).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            resource: resource.to_string(),
            query,
        })
    }

    pub fn bare(resource: &str) -> Self {
        Self {
            resource: resource.to_string(),
            query: String::new(),
        }
    }
}

type SharedValue = Arc<dyn Any + Send + Sync>;
type Waiters = Vec<oneshot::Sender<Result<SharedValue, ApiError>>>;

struct CacheEntry {
    value: SharedValue,
    fetched_at: f64,
}

/// Request cache shared by every hook. Created in `App`, cleared at logout.
#[derive(Clone)]
pub struct QueryClient {
    entries: Arc<Mutex<HashMap<QueryKey, CacheEntry>>>,
    in_flight: Arc<Mutex<HashMap<QueryKey, Waiters>>>,
    stale_time_ms: f64,
    retry: u32,
    retry_delay_ms: u32,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// How a caller takes part in fetching a key.
enum Slot {
    /// Another caller is fetching the key; wait for its result.
    Joined(oneshot::Receiver<Result<SharedValue, ApiError>>),
    /// This caller fetches and hands the result to later joiners.
    Leader(InFlight),
    /// Forced fetch running beside an in-flight one.
    Detached,
}

/// Registration of a leading fetch. Dropping it unsettled releases the
/// joiners, whose receivers then report cancellation.
struct InFlight {
    client: QueryClient,
    key: QueryKey,
    settled: bool,
}

impl InFlight {
    fn settle(mut self, result: &Result<SharedValue, ApiError>) {
        self.settled = true;
        let waiters = self.client.in_flight().remove(&self.key).unwrap_or_default();
        for waiter in waiters {
            let _ = waiter.send(result.clone());
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.settled {
            self.client.in_flight().remove(&self.key);
        }
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::with_policy(STALE_TIME_MS, RETRY_COUNT, RETRY_DELAY_MS)
    }

    pub fn with_policy(stale_time_ms: f64, retry: u32, retry_delay_ms: u32) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            stale_time_ms,
            retry,
            retry_delay_ms,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn in_flight(&self) -> MutexGuard<'_, HashMap<QueryKey, Waiters>> {
        self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cached value for `key` if it is younger than the stale time.
    pub fn get_fresh<T: Clone + 'static>(&self, key: &QueryKey, now: f64) -> Option<T> {
        let entries = self.entries();
        let entry = entries.get(key)?;
        if now - entry.fetched_at >= self.stale_time_ms {
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    pub fn put<T: Send + Sync + 'static>(&self, key: QueryKey, value: T, now: f64) {
        self.put_shared(key, Arc::new(value), now);
    }

    fn put_shared(&self, key: QueryKey, value: SharedValue, now: f64) {
        self.entries().insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn claim(&self, key: &QueryKey, force: bool) -> Slot {
        let mut in_flight = self.in_flight();
        match in_flight.get_mut(key) {
            Some(waiters) if !force => {
                let (sender, receiver) = oneshot::channel();
                waiters.push(sender);
                Slot::Joined(receiver)
            }
            Some(_) => Slot::Detached,
            None => {
                in_flight.insert(key.clone(), Vec::new());
                Slot::Leader(InFlight {
                    client: self.clone(),
                    key: key.clone(),
                    settled: false,
                })
            }
        }
    }

    /// Serve `key` from cache, join a request already fetching it, or run
    /// `fetcher` (with retry) and cache the result. `force` skips both the
    /// cache and joining.
    pub async fn fetch<T, F, Fut>(&self, key: &QueryKey, force: bool, fetcher: F) -> Result<T, ApiError>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if !force {
            if let Some(hit) = self.get_fresh::<T>(key, now_ms()) {
                log::debug!("query: cache hit {}?{}", key.resource, key.query);
                return Ok(hit);
            }
        }

        let leader = match self.claim(key, force) {
            Slot::Joined(receiver) => {
                log::debug!("query: joining in-flight {}?{}", key.resource, key.query);
                match receiver.await {
                    Ok(result) => return downcast(key, result),
                    Err(_) => {
                        log::debug!("query: in-flight {} went away, fetching", key.resource);
                        None
                    }
                }
            }
            Slot::Leader(in_flight) => Some(in_flight),
            Slot::Detached => None,
        };

        let result = with_retry(self.retry, self.retry_delay_ms, fetcher)
            .await
            .map(|value| Arc::new(value) as SharedValue);
        if let Ok(value) = &result {
            self.put_shared(key.clone(), value.clone(), now_ms());
        }
        if let Some(in_flight) = leader {
            in_flight.settle(&result);
        }
        downcast(key, result)
    }
}

fn downcast<T: Clone + 'static>(key: &QueryKey, result: Result<SharedValue, ApiError>) -> Result<T, ApiError> {
    result.and_then(|value| {
        value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| ApiError::Decode(format!("unexpected value type cached for {}", key.resource)))
    })
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

/// Whether attempt number `attempt` (0-based) may be followed by another.
pub fn should_retry(error: &ApiError, attempt: u32, retries: u32) -> bool {
    attempt < retries && error.is_retryable()
}

async fn with_retry<T, F, Fut>(retries: u32, delay_ms: u32, fetcher: F) -> Result<T, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 0;
    loop {
        match fetcher().await {
            Ok(value) => return Ok(value),
            Err(e) if should_retry(&e, attempt, retries) => {
                log::warn!("query: attempt {} failed ({}), retrying", attempt + 1, e);
                attempt += 1;
                if delay_ms > 0 {
                    gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                }
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided")
}

/// Reactive state of one list query.
pub struct ListQuery<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<ListResponse<T>>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub refetch: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for ListQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListQuery<T> {}

impl<T: Clone + Send + Sync + 'static> ListQuery<T> {
    pub fn page_state(&self) -> PageState {
        PageState::derive(
            self.is_loading.get(),
            self.error.get(),
            self.data.with(|d| d.as_ref().map(|d| d.items().len())),
        )
    }

    pub fn items(&self) -> Vec<T> {
        self.data
            .with(|d| d.as_ref().map(|d| d.items().to_vec()).unwrap_or_default())
    }

    pub fn total(&self) -> u64 {
        self.data.with(|d| d.as_ref().map(|d| d.total()).unwrap_or(0))
    }

    pub fn last_page(&self) -> u32 {
        self.data.with(|d| d.as_ref().map(|d| d.last_page()).unwrap_or(1))
    }
}

/// Fetch `GET /api/{resource}?{filters}` whenever `filters` changes.
///
/// Only the latest request of this hook may write its state; results that
/// arrive after a newer request started, or after unmount, are dropped.
pub fn use_list_query<F, T>(resource: &'static str, filters: Signal<F>) -> ListQuery<T>
where
    F: Serialize + Clone + Send + Sync + 'static,
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let api = StoredValue::new(use_api());
    let client = StoredValue::new(use_query_client());
    let data = RwSignal::new(None::<ListResponse<T>>);
    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let generation = StoredValue::new(0u64);

    let load = move |filters: F, force: bool| {
        let key = match QueryKey::new(resource, &filters) {
            Ok(key) => key,
            Err(e) => {
                error.set(Some(e.to_string()));
                is_loading.set(false);
                return;
            }
        };
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        let api = api.get_value();
        let client = client.get_value();

        is_loading.set(true);
        error.set(None);

        spawn_local(async move {
            let path = resource_path(resource);
            let query = key.query.clone();
            let result = client
                .fetch(&key, force, || {
                    let api = api.clone();
                    let path = path.clone();
                    let query = query.clone();
                    async move { api.get_json::<ListResponse<T>>(&path, &query).await }
                })
                .await;

            if generation.try_get_value() != Some(current) {
                log::debug!("query: dropping superseded result for {}", resource);
                return;
            }

            match result {
                Ok(response) => {
                    data.try_set(Some(response));
                }
                Err(ApiError::Unauthorized) => {
                    data.try_set(None);
                }
                Err(e) => {
                    log::error!("query: {} failed: {}", resource, e);
                    error.try_set(Some(e.to_string()));
                }
            }
            is_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        let current = filters.get();
        load(current, false);
    });

    let refetch = Callback::new(move |_: ()| {
        load(filters.get_untracked(), true);
    });

    ListQuery {
        data,
        is_loading,
        error,
        refetch,
    }
}

/// Dropdown options from `GET /api/{resource}?{filters}`, cached like lists.
pub fn use_options<T, F>(resource: &str, filters: &F) -> RwSignal<Vec<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    F: Serialize,
{
    match QueryKey::new(resource, filters) {
        Ok(key) => load_options(key),
        Err(e) => {
            log::error!("query: options for {} not requested: {}", resource, e);
            RwSignal::new(Vec::new())
        }
    }
}

/// Sales-order dropdown options from `GET /api/sales-orders/{lookup}`.
pub fn use_lookup<T>(lookup: Lookup) -> RwSignal<Vec<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    load_options(QueryKey::bare(&lookup.resource()))
}

fn load_options<T>(key: QueryKey) -> RwSignal<Vec<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let api = use_api();
    let client = use_query_client();
    let options = RwSignal::new(Vec::<T>::new());

    spawn_local(async move {
        let path = resource_path(&key.resource);
        let result = client
            .fetch(&key, false, || {
                let api = api.clone();
                let path = path.clone();
                let query = key.query.clone();
                async move { api.get_json::<ListResponse<T>>(&path, &query).await }
            })
            .await;
        match result {
            Ok(response) => {
                options.try_set(response.into_items());
            }
            Err(e) => log::warn!("query: options for {} failed: {}", key.resource, e),
        }
    });

    options
}

/// Store `next` only when it differs, so equal filters never refetch.
pub fn commit_filters<F>(filters: RwSignal<F>, next: F)
where
    F: ListFilters + Send + Sync + 'static,
{
    if filters.with_untracked(|current| *current != next) {
        filters.set(next);
    }
}

/// Derive the next filters from the current ones and commit them.
pub fn edit_filters<F>(filters: RwSignal<F>, edit: impl FnOnce(&F) -> F)
where
    F: ListFilters + Send + Sync + 'static,
{
    let next = filters.with_untracked(edit);
    commit_filters(filters, next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::suppliers::SupplierFilters;
    use contracts::shared::list_filters::ListFilters;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    fn test_client() -> QueryClient {
        QueryClient::with_policy(STALE_TIME_MS, RETRY_COUNT, 0)
    }

    /// Pending on the first poll, ready on the second.
    #[derive(Default)]
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    #[test]
    fn test_fresh_hit_skips_fetcher() {
        let client = test_client();
        let key = QueryKey::bare("suppliers");
        client.put(key.clone(), vec![7u32], now_ms());
        let calls = Cell::new(0);

        let result = block_on(client.fetch(&key, false, || {
            calls.set(calls.get() + 1);
            async { Ok::<_, ApiError>(vec![8u32]) }
        }));

        assert_eq!(result, Ok(vec![7]));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_forced_fetch_bypasses_fresh_entry() {
        let client = test_client();
        let key = QueryKey::bare("suppliers");
        client.put(key.clone(), vec![7u32], now_ms());
        let calls = Cell::new(0);

        let result = block_on(client.fetch(&key, true, || {
            calls.set(calls.get() + 1);
            async { Ok::<_, ApiError>(vec![8u32]) }
        }));

        assert_eq!(result, Ok(vec![8]));
        assert_eq!(calls.get(), 1);
        assert_eq!(client.get_fresh::<Vec<u32>>(&key, now_ms()), Some(vec![8]));
    }

    #[test]
    fn test_failed_fetch_is_retried_once() {
        let client = test_client();
        let key = QueryKey::bare("sales");
        let calls = Cell::new(0);

        let result = block_on(client.fetch(&key, false, || {
            calls.set(calls.get() + 1);
            async { Err::<Vec<u32>, _>(ApiError::Network("offline".to_string())) }
        }));

        assert_eq!(result, Err(ApiError::Network("offline".to_string())));
        assert_eq!(calls.get(), 2);
        assert!(client.is_empty());
    }

    #[test]
    fn test_retry_recovers_from_one_failure() {
        let client = test_client();
        let key = QueryKey::bare("sales");
        let calls = Cell::new(0);

        let result = block_on(client.fetch(&key, false, || {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move {
                if attempt == 1 {
                    Err(ApiError::Network("reset".to_string()))
                } else {
                    Ok(vec![1u32])
                }
            }
        }));

        assert_eq!(result, Ok(vec![1]));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_unauthorized_is_not_retried() {
        let client = test_client();
        let key = QueryKey::bare("sales");
        let calls = Cell::new(0);

        let result = block_on(client.fetch(&key, false, || {
            calls.set(calls.get() + 1);
            async { Err::<Vec<u32>, _>(ApiError::Unauthorized) }
        }));

        assert_eq!(result, Err(ApiError::Unauthorized));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_concurrent_requests_share_one_fetch() {
        let client = test_client();
        let key = QueryKey::new("suppliers", &SupplierFilters::default()).unwrap();
        let calls = Cell::new(0);
        let fetcher = || {
            calls.set(calls.get() + 1);
            async {
                YieldOnce::default().await;
                Ok::<_, ApiError>(vec![3u32, 4])
            }
        };

        let (first, second) = block_on(async {
            futures::join!(
                client.fetch(&key, false, fetcher),
                client.fetch(&key, false, fetcher)
            )
        });

        assert_eq!(first, Ok(vec![3, 4]));
        assert_eq!(second, Ok(vec![3, 4]));
        assert_eq!(calls.get(), 1);
        assert!(client.in_flight().is_empty());
    }

    #[test]
    fn test_joined_request_sees_the_failure() {
        let client = test_client();
        let key = QueryKey::bare("sales");
        let calls = Cell::new(0);
        let fetcher = || {
            calls.set(calls.get() + 1);
            async {
                YieldOnce::default().await;
                Err::<Vec<u32>, _>(ApiError::Unauthorized)
            }
        };

        let (first, second) = block_on(async {
            futures::join!(
                client.fetch(&key, false, fetcher),
                client.fetch(&key, false, fetcher)
            )
        });

        assert_eq!(first, Err(ApiError::Unauthorized));
        assert_eq!(second, Err(ApiError::Unauthorized));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_dropped_leader_releases_key() {
        let client = test_client();
        let key = QueryKey::bare("sales");
        match client.claim(&key, false) {
            Slot::Leader(in_flight) => drop(in_flight),
            _ => panic!("first claim must lead"),
        }
        assert!(client.in_flight().is_empty());
        assert!(matches!(client.claim(&key, false), Slot::Leader(_)));
    }

    #[test]
    fn test_fresh_entry_is_served_within_stale_time() {
        let client = QueryClient::new();
        let key = QueryKey::bare("suppliers");
        client.put(key.clone(), vec![1u32, 2, 3], 1_000.0);
        assert_eq!(client.get_fresh::<Vec<u32>>(&key, 1_000.0 + 59_999.0), Some(vec![1, 2, 3]));
        assert_eq!(client.get_fresh::<Vec<u32>>(&key, 1_000.0 + 60_000.0), None);
    }

    #[test]
    fn test_type_mismatch_is_a_miss() {
        let client = QueryClient::new();
        let key = QueryKey::bare("sales");
        client.put(key.clone(), "text".to_string(), 0.0);
        assert_eq!(client.get_fresh::<Vec<u32>>(&key, 1.0), None);
    }

    #[test]
    fn test_keys_include_filters() {
        let first = QueryKey::new("suppliers", &SupplierFilters::default()).unwrap();
        let mut filters = SupplierFilters::default();
        filters.params.page = 2;
        let second = QueryKey::new("suppliers", &filters).unwrap();
        assert_ne!(first, second);
        assert!(second.query.contains("page=2"));
        assert!(!second.query.contains("search"));
    }

    #[test]
    fn test_clear_empties_cache() {
        let client = QueryClient::new();
        client.put(QueryKey::bare("suppliers"), 1u8, 0.0);
        client.put(QueryKey::bare("sales"), 3u8, 0.0);
        assert_eq!(client.len(), 2);
        client.clear();
        assert!(client.is_empty());
    }

    #[test]
    fn test_retry_policy() {
        let network = ApiError::Network("offline".to_string());
        assert!(should_retry(&network, 0, RETRY_COUNT));
        assert!(!should_retry(&network, 1, RETRY_COUNT));
        assert!(!should_retry(&ApiError::Unauthorized, 0, RETRY_COUNT));
    }
}
