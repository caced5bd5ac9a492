use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::cache::{CacheEvent, QueryCache, QueryKey};
use super::errors::{ClientError, ClientResult};
use super::http::ApiClient;

/// How a query is cached and refreshed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub key: QueryKey,
    /// Cached data younger than this is served without a request
    pub stale_time: Duration,
    /// Poll period while the query is watched
    pub refetch_interval: Option<Duration>,
    /// Keep polling while the watcher is not focused
    pub refetch_in_background: bool,
    /// Disabled queries never fetch
    pub enabled: bool,
}

impl QueryOptions {
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            stale_time: Duration::ZERO,
            refetch_interval: None,
            refetch_in_background: false,
            enabled: true,
        }
    }

    pub fn stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    pub fn refetch_interval(mut self, every: Duration) -> Self {
        self.refetch_interval = Some(every);
        self
    }

    pub fn in_background(mut self, enabled: bool) -> Self {
        self.refetch_in_background = enabled;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// What a watched query currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Query is disabled
    Idle,
    /// First fetch has not finished
    Loading,
    Success(T),
    /// Last fetch failed with this message
    Error(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Observer of a polling query
///
/// Dropping the handle stops the polling task.
pub struct QueryHandle<T> {
    state: watch::Receiver<QueryState<T>>,
    focus: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl<T: Clone> QueryHandle<T> {
    /// Current state
    pub fn state(&self) -> QueryState<T> {
        self.state.borrow().clone()
    }

    /// Waits for the next state change
    ///
    /// Returns `None` once the polling task has stopped. Disabled queries
    /// never change.
    pub async fn changed(&mut self) -> Option<QueryState<T>> {
        self.state.changed().await.ok()?;
        Some(self.state())
    }

    /// Waits until the query is no longer loading
    pub async fn settled(&mut self) -> QueryState<T> {
        let settled = match self.state.wait_for(|state| !state.is_loading()).await {
            Ok(state) => Some(state.clone()),
            Err(_) => None,
        };
        settled.unwrap_or_else(|| self.state())
    }

    /// Tells the query whether its view is in the foreground
    ///
    /// Queries without background polling skip refetches while unfocused.
    pub fn set_focused(&self, focused: bool) {
        self.focus.send_replace(focused);
    }
}

impl<T> Drop for QueryHandle<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Cached, polling access to the simulator
#[derive(Debug, Clone)]
pub struct QueryClient {
    api: ApiClient,
    cache: Arc<QueryCache>,
}

impl QueryClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cache: Arc::new(QueryCache::new()),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Returns cached data while fresh, otherwise fetches and caches it
    pub async fn fetch<T, F, Fut>(&self, options: &QueryOptions, fetcher: F) -> ClientResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        if !options.enabled {
            return Err(ClientError::Disabled(options.key.to_string()));
        }

        if self.cache.is_fresh(&options.key, options.stale_time) {
            if let Some(data) = self.cache.get(&options.key) {
                tracing::debug!(key = %options.key, "cache hit");
                return Ok(data);
            }
        }

        self.refetch(options, fetcher).await
    }

    /// Fetches regardless of freshness and caches the result
    pub async fn refetch<T, F, Fut>(&self, options: &QueryOptions, fetcher: F) -> ClientResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        if !options.enabled {
            return Err(ClientError::Disabled(options.key.to_string()));
        }

        let data = fetcher(self.api.clone()).await?;
        self.cache.set(&options.key, &data)?;
        Ok(data)
    }

    /// Marks every query under `prefix` stale; watchers refetch at once
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        self.cache.invalidate(prefix)
    }

    /// Starts observing a query
    ///
    /// The first load honours the stale time; later loads happen every
    /// `refetch_interval`, when the key is invalidated, or never when there
    /// is no interval. Direct cache writes to the key are published as they
    /// happen.
    pub fn watch<T, F, Fut>(&self, options: QueryOptions, fetcher: F) -> QueryHandle<T>
    where
        T: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
        F: Fn(ApiClient) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<T>> + Send + 'static,
    {
        let (focus, focus_rx) = watch::channel(true);

        if !options.enabled {
            let (_, state) = watch::channel(QueryState::Idle);
            return QueryHandle {
                state,
                focus,
                task: None,
            };
        }

        let initial = match self.cache.get::<T>(&options.key) {
            Some(data) => QueryState::Success(data),
            None => QueryState::Loading,
        };
        let (tx, state) = watch::channel(initial);

        // Subscribe before spawning so no write between now and the first
        // poll is missed
        let events = self.cache.subscribe();
        let client = self.clone();
        let task = tokio::spawn(async move {
            client.poll(options, fetcher, tx, focus_rx, events).await;
        });

        QueryHandle {
            state,
            focus,
            task: Some(task),
        }
    }

    async fn poll<T, F, Fut>(
        self,
        options: QueryOptions,
        fetcher: F,
        tx: watch::Sender<QueryState<T>>,
        focus: watch::Receiver<bool>,
        mut events: broadcast::Receiver<CacheEvent>,
    ) where
        T: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
        F: Fn(ApiClient) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<T>> + Send + 'static,
    {
        let mut force = false;

        loop {
            let next = self.load(&options, &fetcher, force).await;
            publish(&tx, next);
            force = true;

            let mut deadline = options.refetch_interval.map(|every| Instant::now() + every);
            loop {
                tokio::select! {
                    _ = tx.closed() => return,
                    _ = until(deadline) => {
                        if options.refetch_in_background || *focus.borrow() {
                            break;
                        }
                        tracing::trace!(key = %options.key, "unfocused, skipping refetch");
                        deadline = options.refetch_interval.map(|every| Instant::now() + every);
                    }
                    event = events.recv() => match event {
                        Ok(CacheEvent::Updated(key)) if key == options.key => {
                            if let Some(data) = self.cache.get::<T>(&key) {
                                publish(&tx, QueryState::Success(data));
                            }
                        }
                        Ok(CacheEvent::Invalidated(prefix)) if options.key.starts_with(&prefix) => break,
                        Ok(_) => {}
                        Err(broadcast::error::RecvError::Lagged(_)) => break,
                        Err(broadcast::error::RecvError::Closed) => return,
                    }
                }
            }
        }
    }

    async fn load<T, F, Fut>(&self, options: &QueryOptions, fetcher: &F, force: bool) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(ApiClient) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let result = if force {
            self.refetch(options, |api| fetcher(api)).await
        } else {
            self.fetch(options, |api| fetcher(api)).await
        };

        match result {
            Ok(data) => QueryState::Success(data),
            Err(e) => {
                tracing::warn!(key = %options.key, error = %e, "query failed");
                QueryState::Error(e.to_string())
            }
        }
    }
}

fn publish<T: PartialEq>(tx: &watch::Sender<QueryState<T>>, next: QueryState<T>) {
    tx.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}

async fn until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn client() -> QueryClient {
        // Never contacted: the fetchers below ignore the API client
        QueryClient::new(ApiClient::new("http://127.0.0.1:9"))
    }

    fn counting_fetcher(
        calls: Arc<AtomicUsize>,
    ) -> impl Fn(ApiClient) -> std::future::Ready<ClientResult<usize>> + Send + Sync + 'static {
        move |_| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(Ok(n))
        }
    }

    #[tokio::test]
    async fn fetch_serves_fresh_cache() {
        let client = client();
        let calls = Arc::new(AtomicUsize::new(0));
        let options = QueryOptions::new(QueryKey::from(["count"])).stale_time(Duration::from_secs(60));

        let first = client.fetch(&options, counting_fetcher(calls.clone())).await.unwrap();
        let second = client.fetch(&options, counting_fetcher(calls.clone())).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fetch_after_invalidate_hits_fetcher() {
        let client = client();
        let calls = Arc::new(AtomicUsize::new(0));
        let options = QueryOptions::new(QueryKey::from(["count"])).stale_time(Duration::from_secs(60));

        client.fetch(&options, counting_fetcher(calls.clone())).await.unwrap();
        client.invalidate(&QueryKey::from(["count"]));
        let again = client.fetch(&options, counting_fetcher(calls.clone())).await.unwrap();

        assert_eq!(again, 2);
    }

    #[tokio::test]
    async fn disabled_query_never_fetches() {
        let client = client();
        let calls = Arc::new(AtomicUsize::new(0));
        let options = QueryOptions::new(QueryKey::from(["tasks", ""])).enabled(false);

        let result = client.fetch(&options, counting_fetcher(calls.clone())).await;
        let handle = client.watch(options, counting_fetcher(calls.clone()));

        assert!(matches!(result, Err(ClientError::Disabled(_))));
        assert_eq!(handle.state(), QueryState::Idle);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn disabled_query_settles_idle() {
        let client = client();
        let calls = Arc::new(AtomicUsize::new(0));
        let options = QueryOptions::new(QueryKey::from(["tasks", ""])).enabled(false);

        let mut handle = client.watch(options, counting_fetcher(calls.clone()));

        assert_eq!(handle.settled().await, QueryState::Idle);
        assert_eq!(handle.changed().await, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_fetch_is_published_as_error() {
        let client = client();
        let options = QueryOptions::new(QueryKey::from(["broken"]));

        let mut handle = client.watch(options, |_| {
            std::future::ready(Err::<u32, _>(ClientError::Status {
                status: 500,
                message: "Failed to fetch agents".to_string(),
            }))
        });

        let state = handle.settled().await;
        assert_eq!(state.error(), Some("Failed to fetch agents (HTTP 500)"));
    }

    #[tokio::test(start_paused = true)]
    async fn watch_polls_on_interval() {
        let client = client();
        let calls = Arc::new(AtomicUsize::new(0));
        let options = QueryOptions::new(QueryKey::from(["count"]))
            .refetch_interval(Duration::from_secs(5))
            .in_background(true);

        let mut handle = client.watch(options, counting_fetcher(calls.clone()));

        assert_eq!(handle.settled().await, QueryState::Success(1));
        assert_eq!(handle.changed().await, Some(QueryState::Success(2)));
        assert_eq!(handle.changed().await, Some(QueryState::Success(3)));
    }

    #[tokio::test(start_paused = true)]
    async fn unfocused_query_skips_refetch() {
        let client = client();
        let calls = Arc::new(AtomicUsize::new(0));
        let options = QueryOptions::new(QueryKey::from(["count"]))
            .refetch_interval(Duration::from_secs(5));

        let mut handle = client.watch(options, counting_fetcher(calls.clone()));
        assert_eq!(handle.settled().await, QueryState::Success(1));

        handle.set_focused(false);
        tokio::time::sleep(Duration::from_secs(21)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        handle.set_focused(true);
        assert_eq!(handle.changed().await, Some(QueryState::Success(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn cache_writes_reach_watchers() {
        let client = client();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = QueryKey::from(["count"]);
        let options = QueryOptions::new(key.clone()).refetch_interval(Duration::from_secs(60));

        let mut handle = client.watch(options, counting_fetcher(calls.clone()));
        assert_eq!(handle.settled().await, QueryState::Success(1));

        client.cache().set(&key, &41usize).unwrap();

        assert_eq!(handle.changed().await, Some(QueryState::Success(41)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn invalidation_triggers_refetch() {
        let client = client();
        let calls = Arc::new(AtomicUsize::new(0));
        let options = QueryOptions::new(QueryKey::from(["tasks", "all"]))
            .refetch_interval(Duration::from_secs(60));

        let mut handle = client.watch(options, counting_fetcher(calls.clone()));
        assert_eq!(handle.settled().await, QueryState::Success(1));

        client.invalidate(&QueryKey::from(["tasks"]));

        assert_eq!(handle.changed().await, Some(QueryState::Success(2)));
    }

    #[tokio::test]
    async fn dropping_handle_stops_polling() {
        let client = client();
        let calls = Arc::new(AtomicUsize::new(0));
        let options = QueryOptions::new(QueryKey::from(["count"]))
            .refetch_interval(Duration::from_millis(10))
            .in_background(true);

        let mut handle = client.watch(options, counting_fetcher(calls.clone()));
        handle.settled().await;
        drop(handle);

        let seen = calls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(calls.load(Ordering::SeqCst), seen);
    }

    #[tokio::test]
    async fn watch_starts_from_cached_data() {
        let client = client();
        let key = QueryKey::from(["count"]);
        client.cache().set(&key, &7usize).unwrap();

        let handle = client.watch(
            QueryOptions::new(key).stale_time(Duration::from_secs(60)),
            counting_fetcher(Arc::new(AtomicUsize::new(0))),
        );

        assert_eq!(handle.state(), QueryState::Success(7));
    }
}
