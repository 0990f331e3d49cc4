// ============================================================================
// LIST STATE - filtered / paginated list controller
// ============================================================================
// One instance per list view (events, publications, members, resources).
// Plain Rc<RefCell> state so it stays testable without a mounted UI; the
// Yew layer wires it up in hooks/use_filtered_list.rs.
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::services::error::ApiError;
use crate::utils::query::encode_query_value;

/// Snapshot of the inputs a fetch was issued with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based, both in the UI and on the wire
    pub page: u32,
    pub page_size: u32,
    /// Debounced search term; case-insensitive substring match server-side
    pub search: String,
    /// Exact-match constraints, combined with logical AND
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn query_string(&self) -> String {
        let mut parts = vec![
            format!("page={}", self.page),
            format!("limit={}", self.page_size),
        ];
        if !self.search.is_empty() {
            parts.push(format!("search={}", encode_query_value(&self.search)));
        }
        for (key, value) in &self.filters {
            parts.push(format!("{}={}", key, encode_query_value(value)));
        }
        parts.join("&")
    }
}

pub struct PageResult<T> {
    pub items: Vec<T>,
    /// Exact total where the backend provides one (member directory);
    /// pagination never depends on it.
    pub total: Option<u64>,
}

/// Seam to the remote data source (REST backend or CMS query API)
#[async_trait(?Send)]
pub trait PageFetcher<T> {
    async fn fetch_page(&self, query: &ListQuery) -> Result<PageResult<T>, ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
    Empty,
    Errored,
}

struct ListInner<T> {
    items: Vec<T>,
    page: u32,
    filters: BTreeMap<String, String>,
    search: String,
    has_more: bool,
    total: Option<u64>,
    phase: ListPhase,
    error: Option<String>,
    /// Ticket of the newest fetch; completions with an older ticket are
    /// discarded so ordering is last-request-wins.
    latest_ticket: u64,
}

pub struct ListController<T> {
    inner: Rc<RefCell<ListInner<T>>>,
    fetcher: Rc<dyn PageFetcher<T>>,
    page_size: u32,
    on_change: Rc<RefCell<Option<Box<dyn Fn()>>>>,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            fetcher: Rc::clone(&self.fetcher),
            page_size: self.page_size,
            on_change: Rc::clone(&self.on_change),
        }
    }
}

impl<T: Clone + 'static> ListController<T> {
    pub fn new(fetcher: Rc<dyn PageFetcher<T>>, page_size: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListInner {
                items: Vec::new(),
                page: 1,
                filters: BTreeMap::new(),
                search: String::new(),
                has_more: false,
                total: None,
                phase: ListPhase::Idle,
                error: None,
                latest_ticket: 0,
            })),
            fetcher,
            page_size,
            on_change: Rc::new(RefCell::new(None)),
        }
    }

    /// Register the UI notifier (called on every state transition)
    pub fn set_on_change(&self, f: impl Fn() + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(f));
    }

    pub fn items(&self) -> Vec<T> {
        self.inner.borrow().items.clone()
    }

    pub fn page(&self) -> u32 {
        self.inner.borrow().page
    }

    pub fn has_more(&self) -> bool {
        self.inner.borrow().has_more
    }

    pub fn total(&self) -> Option<u64> {
        self.inner.borrow().total
    }

    pub fn phase(&self) -> ListPhase {
        self.inner.borrow().phase
    }

    pub fn loading(&self) -> bool {
        self.inner.borrow().phase == ListPhase::Loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.borrow().error.clone()
    }

    pub fn search_term(&self) -> String {
        self.inner.borrow().search.clone()
    }

    pub fn filter(&self, key: &str) -> Option<String> {
        self.inner.borrow().filters.get(key).cloned()
    }

    /// Initial fetch on mount
    pub async fn load(&self) {
        self.refresh().await;
    }

    /// Explicit page change: uses the current filters/search as-is
    pub async fn set_page(&self, page: u32) {
        if page == 0 || page == self.inner.borrow().page {
            return;
        }
        self.inner.borrow_mut().page = page;
        self.refresh().await;
    }

    /// Filter change: resets the page to 1 BEFORE the fetch is issued, so
    /// the in-flight request never carries a page from the previous filter
    /// context.
    pub async fn set_filter(&self, key: &str, value: Option<String>) {
        {
            let mut inner = self.inner.borrow_mut();
            let changed = match &value {
                Some(v) => inner.filters.get(key) != Some(v),
                None => inner.filters.contains_key(key),
            };
            if !changed {
                return;
            }
            match value {
                Some(v) => {
                    inner.filters.insert(key.to_string(), v);
                }
                None => {
                    inner.filters.remove(key);
                }
            }
            inner.page = 1;
        }
        self.refresh().await;
    }

    /// Debounced search commit. Only the debounced value participates in
    /// the "did the search change" comparison; an unchanged value is a
    /// no-op so a burst that ends where it started issues no fetch.
    pub async fn commit_search(&self, term: &str) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.search == term {
                return;
            }
            inner.search = term.to_string();
            inner.page = 1;
        }
        self.refresh().await;
    }

    async fn refresh(&self) {
        let (ticket, query) = {
            let mut inner = self.inner.borrow_mut();
            inner.latest_ticket += 1;
            inner.phase = ListPhase::Loading;
            inner.error = None;
            (
                inner.latest_ticket,
                ListQuery {
                    page: inner.page,
                    page_size: self.page_size,
                    search: inner.search.clone(),
                    filters: inner.filters.clone(),
                },
            )
        };
        self.notify();

        let result = self.fetcher.fetch_page(&query).await;

        {
            let mut inner = self.inner.borrow_mut();
            if inner.latest_ticket != ticket {
                // A newer request owns the state now; this response is stale.
                return;
            }
            match result {
                Ok(page) => {
                    inner.has_more = page.items.len() as u32 == query.page_size;
                    inner.total = page.total;
                    inner.phase = if page.items.is_empty() {
                        ListPhase::Empty
                    } else {
                        ListPhase::Loaded
                    };
                    inner.items = page.items;
                }
                Err(e) => {
                    // Keep the stale items; the view shows an inline error.
                    inner.phase = ListPhase::Errored;
                    inner.error = Some(e.to_string());
                }
            }
        }
        self.notify();
    }

    fn notify(&self) {
        if let Some(f) = self.on_change.borrow().as_ref() {
            f();
        }
    }
}

/// Holds the raw search input between keystrokes. The Yew hook re-arms a
/// timer on every `input`; when the quiet period elapses it takes the
/// pending value and commits it, so a burst of keystrokes collapses into
/// one commit carrying the final string.
#[derive(Clone, Default)]
pub struct DebouncedSearch {
    pending: Rc<RefCell<Option<String>>>,
}

impl DebouncedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self, raw: &str) {
        *self.pending.borrow_mut() = Some(raw.to_string());
    }

    pub fn take_pending(&self) -> Option<String> {
        self.pending.borrow_mut().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;

    use chrono::{TimeZone, Utc};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    use crate::models::Event;

    fn event(id: &str, title: &str, year: i32) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            summary: String::new(),
            location: "London".to_string(),
            starts_at: Utc.with_ymd_and_hms(year, 6, 1, 9, 0, 0).unwrap(),
            registration_url: None,
        }
    }

    /// Fake CMS: applies search / filter / pagination semantics over a
    /// seeded set, and records every query it was asked for.
    struct SeedFetcher {
        seed: Vec<Event>,
        queries: RefCell<Vec<ListQuery>>,
    }

    impl SeedFetcher {
        fn new(seed: Vec<Event>) -> Self {
            Self {
                seed,
                queries: RefCell::new(Vec::new()),
            }
        }

        fn last_query(&self) -> ListQuery {
            self.queries.borrow().last().cloned().expect("no fetch issued")
        }

        fn fetch_count(&self) -> usize {
            self.queries.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl PageFetcher<Event> for SeedFetcher {
        async fn fetch_page(&self, query: &ListQuery) -> Result<PageResult<Event>, ApiError> {
            self.queries.borrow_mut().push(query.clone());
            let needle = query.search.to_lowercase();
            let matching: Vec<Event> = self
                .seed
                .iter()
                .filter(|e| needle.is_empty() || e.title.to_lowercase().contains(&needle))
                .filter(|e| match query.filters.get("year") {
                    Some(year) => e.year().to_string() == *year,
                    None => true,
                })
                .cloned()
                .collect();
            let start = ((query.page - 1) * query.page_size) as usize;
            let items = matching
                .into_iter()
                .skip(start)
                .take(query.page_size as usize)
                .collect();
            Ok(PageResult { items, total: None })
        }
    }

    fn eight_events() -> Vec<Event> {
        let mut seed: Vec<Event> = (1..=7)
            .map(|i| event(&format!("e-{}", i), &format!("Congress session {}", i), 2024))
            .collect();
        seed.push(event("e-8", "Winter school", 2023));
        seed
    }

    #[test]
    fn filter_change_resets_page_to_one() {
        let fetcher = Rc::new(SeedFetcher::new(eight_events()));
        let controller = ListController::new(fetcher.clone() as Rc<dyn PageFetcher<Event>>, 2);
        block_on(controller.load());
        block_on(controller.set_page(3));
        assert_eq!(fetcher.last_query().page, 3);

        block_on(controller.set_filter("year", Some("2023".to_string())));
        let query = fetcher.last_query();
        assert_eq!(query.page, 1, "filter change must reset the page before fetching");
        assert_eq!(query.filters.get("year").map(String::as_str), Some("2023"));
        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn unchanged_filter_value_is_a_no_op() {
        let fetcher = Rc::new(SeedFetcher::new(eight_events()));
        let controller = ListController::new(fetcher.clone() as Rc<dyn PageFetcher<Event>>, 6);
        block_on(controller.set_filter("year", Some("2024".to_string())));
        let issued = fetcher.fetch_count();
        block_on(controller.set_filter("year", Some("2024".to_string())));
        assert_eq!(fetcher.fetch_count(), issued);
    }

    #[test]
    fn debounce_collapses_a_burst_into_one_fetch() {
        let fetcher = Rc::new(SeedFetcher::new(eight_events()));
        let controller = ListController::new(fetcher.clone() as Rc<dyn PageFetcher<Event>>, 6);

        // Five keystrokes inside the quiet period: the timer only fires once,
        // so only the final value is taken and committed.
        let debouncer = DebouncedSearch::new();
        for raw in ["w", "wi", "win", "wint", "winter"] {
            debouncer.input(raw);
        }
        let committed = debouncer.take_pending().expect("pending value");
        assert_eq!(committed, "winter");
        block_on(controller.commit_search(&committed));

        assert_eq!(fetcher.fetch_count(), 1);
        assert_eq!(fetcher.last_query().search, "winter");
        assert!(debouncer.take_pending().is_none());

        // Committing the same value again must not refetch
        block_on(controller.commit_search("winter"));
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[test]
    fn has_more_tracks_full_pages() {
        let fetcher = Rc::new(SeedFetcher::new(eight_events()));
        let controller = ListController::new(fetcher.clone() as Rc<dyn PageFetcher<Event>>, 6);

        block_on(controller.load());
        assert_eq!(controller.items().len(), 6);
        assert!(controller.has_more(), "a full page implies more pages likely exist");

        block_on(controller.set_page(2));
        assert_eq!(controller.items().len(), 2);
        assert!(!controller.has_more());

        // Zero results: Empty phase, has_more false
        block_on(controller.commit_search("no such event"));
        assert!(controller.items().is_empty());
        assert!(!controller.has_more());
        assert_eq!(controller.phase(), ListPhase::Empty);
    }

    #[test]
    fn events_scenario_filter_from_deep_page() {
        let fetcher = Rc::new(SeedFetcher::new(eight_events()));
        let controller = ListController::new(fetcher.clone() as Rc<dyn PageFetcher<Event>>, 6);

        block_on(controller.load());
        assert_eq!(controller.items().len(), 6);
        assert!(controller.has_more());

        block_on(controller.set_page(2));
        assert_eq!(controller.items().len(), 2);
        assert!(!controller.has_more());

        // Year filter matching exactly one event, applied while on page 2
        block_on(controller.set_filter("year", Some("2023".to_string())));
        assert_eq!(fetcher.last_query().page, 1);
        let items = controller.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "e-8");
        assert!(!controller.has_more());
    }

    #[test]
    fn failed_fetch_keeps_stale_items_and_sets_error() {
        struct FlakyFetcher {
            fail: RefCell<bool>,
        }

        #[async_trait(?Send)]
        impl PageFetcher<Event> for FlakyFetcher {
            async fn fetch_page(&self, _query: &ListQuery) -> Result<PageResult<Event>, ApiError> {
                if *self.fail.borrow() {
                    Err(ApiError::Network("connection refused".to_string()))
                } else {
                    Ok(PageResult {
                        items: vec![event("e-1", "Spring meeting", 2024)],
                        total: None,
                    })
                }
            }
        }

        let fetcher = Rc::new(FlakyFetcher {
            fail: RefCell::new(false),
        });
        let controller = ListController::new(fetcher.clone() as Rc<dyn PageFetcher<Event>>, 6);
        block_on(controller.load());
        assert_eq!(controller.items().len(), 1);

        *fetcher.fail.borrow_mut() = true;
        block_on(controller.commit_search("spring"));
        assert_eq!(controller.phase(), ListPhase::Errored);
        assert!(controller.error().is_some());
        assert_eq!(controller.items().len(), 1, "stale items survive a failed refresh");
    }

    /// Completions resolve through externally-held gates so the test picks
    /// the arrival order.
    struct GatedFetcher {
        gates: RefCell<VecDeque<oneshot::Receiver<PageResult<Event>>>>,
    }

    #[async_trait(?Send)]
    impl PageFetcher<Event> for GatedFetcher {
        async fn fetch_page(&self, _query: &ListQuery) -> Result<PageResult<Event>, ApiError> {
            let gate = self
                .gates
                .borrow_mut()
                .pop_front()
                .expect("no gate armed for this fetch");
            Ok(gate.await.expect("gate sender dropped"))
        }
    }

    #[test]
    fn stale_response_arriving_late_is_discarded() {
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        let fetcher = Rc::new(GatedFetcher {
            gates: RefCell::new(VecDeque::from([rx_a, rx_b])),
        });
        let controller = ListController::new(fetcher as Rc<dyn PageFetcher<Event>>, 6);

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        // Fetch A (triggered first), then fetch B for different inputs
        let c = controller.clone();
        spawner
            .spawn_local(async move { c.commit_search("alpha").await })
            .unwrap();
        pool.run_until_stalled();
        let c = controller.clone();
        spawner
            .spawn_local(async move { c.commit_search("beta").await })
            .unwrap();
        pool.run_until_stalled();

        // B's response arrives first and wins
        tx_b.send(PageResult {
            items: vec![event("e-b", "Beta symposium", 2024)],
            total: None,
        })
        .map_err(|_| ())
        .unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.items()[0].id, "e-b");

        // A's response arrives late and must not clobber B's
        tx_a.send(PageResult {
            items: vec![event("e-a", "Alpha symposium", 2024)],
            total: None,
        })
        .map_err(|_| ())
        .unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.items().len(), 1);
        assert_eq!(controller.items()[0].id, "e-b");
    }

    #[test]
    fn query_string_orders_page_limit_search_filters() {
        let mut filters = BTreeMap::new();
        filters.insert("year".to_string(), "2024".to_string());
        let query = ListQuery {
            page: 2,
            page_size: 6,
            search: "congress".to_string(),
            filters,
        };
        assert_eq!(query.query_string(), "page=2&limit=6&search=congress&year=2024");

        let bare = ListQuery {
            page: 1,
            page_size: 12,
            search: String::new(),
            filters: BTreeMap::new(),
        };
        assert_eq!(bare.query_string(), "page=1&limit=12");
    }

    #[test]
    fn query_string_escapes_separator_characters_in_values() {
        let mut filters = BTreeMap::new();
        filters.insert("category".to_string(), "q&a".to_string());
        let query = ListQuery {
            page: 1,
            page_size: 6,
            search: "ear, nose & throat".to_string(),
            filters,
        };
        // An `&` or `=` inside a value must never read as a new parameter
        assert_eq!(
            query.query_string(),
            "page=1&limit=6&search=ear%2C%20nose%20%26%20throat&category=q%26a"
        );
    }
}
