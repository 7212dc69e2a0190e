//! Feed view
//!
//! Owns the read path for one collection: fetch, normalize, and keep the
//! result as a full-list replace. A load either succeeds, fails, or is still
//! in flight; an empty list and a failed load are distinct states.
//!
//! Loads are tagged with a generation number. A result is applied only if it
//! belongs to the most recent load and the view is still alive, so a slow
//! response can never overwrite a newer one or land on a torn-down view.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::Normalizer;
use crate::domain::entities::{Collection, FeedItem, NormalizedDisplayItem};
use crate::domain::ports::{Clock, FeedSource};
use crate::error::FeedError;

/// What the view currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum FeedState {
    /// No load has completed yet
    Loading,
    /// Latest load succeeded; the list may be empty
    Loaded(Vec<NormalizedDisplayItem>),
    /// Latest load failed, with a user-facing reason
    Failed(String),
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FeedState::Failed(_))
    }

    /// Loaded items, empty unless the state is `Loaded`
    pub fn items(&self) -> &[NormalizedDisplayItem] {
        match self {
            FeedState::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Result of a finished fetch, waiting to be applied to its view
#[derive(Debug)]
pub struct LoadOutcome {
    generation: u64,
    result: Result<Vec<FeedItem>, FeedError>,
}

impl LoadOutcome {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A fetch that was started by a view but runs on its own.
///
/// Owns everything it needs, so it can be spawned onto a task.
pub struct PendingLoad<S> {
    source: Arc<S>,
    collection: Collection,
    generation: u64,
}

impl<S: FeedSource> PendingLoad<S> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub async fn run(self) -> LoadOutcome {
        let result = self.source.fetch(self.collection).await;
        LoadOutcome {
            generation: self.generation,
            result,
        }
    }
}

pub struct FeedView<S, C>
where
    S: FeedSource,
    C: Clock,
{
    source: Arc<S>,
    clock: Arc<C>,
    collection: Collection,
    normalizer: Normalizer,
    state: FeedState,
    generation: u64,
    torn_down: bool,
}

impl<S, C> FeedView<S, C>
where
    S: FeedSource,
    C: Clock,
{
    pub fn new(
        source: Arc<S>,
        clock: Arc<C>,
        collection: Collection,
        normalizer: Normalizer,
    ) -> Self {
        Self {
            source,
            clock,
            collection,
            normalizer,
            state: FeedState::Loading,
            generation: 0,
            torn_down: false,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Fetch the collection and apply the result.
    ///
    /// Dropping the returned future cancels the fetch. A torn-down view does
    /// not fetch at all.
    pub async fn refresh(&mut self) -> &FeedState {
        if self.torn_down {
            debug!(collection = %self.collection, "Refresh skipped on torn-down view");
            return &self.state;
        }

        let pending = self.begin_load();
        let outcome = pending.run().await;
        self.apply(outcome);
        &self.state
    }

    /// Start a new load. Any load started earlier becomes stale.
    ///
    /// The current list stays visible until the new result is applied.
    pub fn begin_load(&mut self) -> PendingLoad<S> {
        self.generation += 1;
        debug!(collection = %self.collection, generation = self.generation, "Load started");

        PendingLoad {
            source: Arc::clone(&self.source),
            collection: self.collection,
            generation: self.generation,
        }
    }

    /// Install a finished load.
    ///
    /// Returns `false` when the outcome was discarded because a newer load was
    /// started or the view was torn down.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if self.torn_down {
            debug!(
                collection = %self.collection,
                generation = outcome.generation,
                "Discarding result for torn-down view"
            );
            return false;
        }

        if outcome.generation != self.generation {
            debug!(
                collection = %self.collection,
                generation = outcome.generation,
                latest = self.generation,
                "Discarding superseded result"
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(items) => {
                let now = self.clock.now();
                FeedState::Loaded(self.normalizer.normalize_all(&items, now))
            }
            Err(e) => {
                warn!(collection = %self.collection, error = %e, "Failed to load collection");
                FeedState::Failed(e.reason())
            }
        };
        true
    }

    /// End the view. Results that arrive afterwards are dropped.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_now, test_feed_item, FixedClock, InMemoryFeedSource};
    use chrono::Duration;

    fn create_view(
        source: InMemoryFeedSource,
        collection: Collection,
    ) -> FeedView<InMemoryFeedSource, FixedClock> {
        FeedView::new(
            Arc::new(source),
            Arc::new(FixedClock::at(fixed_now())),
            collection,
            Normalizer::default(),
        )
    }

    fn notice(id: &str, body: &str) -> FeedItem {
        let mut item = test_feed_item();
        item.id = id.to_string();
        item.body = body.to_string();
        item
    }

    #[test]
    fn starts_loading() {
        let view = create_view(InMemoryFeedSource::new(), Collection::Jobs);

        assert!(view.state().is_loading());
        assert!(view.state().items().is_empty());
        assert_eq!(view.collection(), Collection::Jobs);
    }

    #[tokio::test]
    async fn refresh_loads_normalized_items() {
        let mut item = notice("n1", "This is important");
        item.created_at = Some(fixed_now() - Duration::days(3));
        let source = InMemoryFeedSource::new().with_items(Collection::Notices, vec![item]);
        let mut view = create_view(source, Collection::Notices);

        let state = view.refresh().await;

        let items = state.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "n1");
        assert_eq!(items[0].age_days, Some(3));
        assert!(items[0].important);
    }

    #[tokio::test]
    async fn refresh_empty_collection_is_loaded_not_failed() {
        let source = InMemoryFeedSource::new().with_items(Collection::Jobs, vec![]);
        let mut view = create_view(source, Collection::Jobs);

        view.refresh().await;

        assert_eq!(view.state(), &FeedState::Loaded(vec![]));
    }

    #[tokio::test]
    async fn refresh_failure_is_surfaced() {
        let source = InMemoryFeedSource::new().with_failure(Collection::Jobs, 502);
        let mut view = create_view(source, Collection::Jobs);

        view.refresh().await;

        assert_eq!(
            view.state(),
            &FeedState::Failed("the server answered with status 502".to_string())
        );
    }

    #[tokio::test]
    async fn refresh_replaces_whole_list() {
        let source = InMemoryFeedSource::new().with_items(
            Collection::Notices,
            vec![notice("a", "first"), notice("b", "second")],
        );
        let source = Arc::new(source);
        let mut view = FeedView::new(
            Arc::clone(&source),
            Arc::new(FixedClock::at(fixed_now())),
            Collection::Notices,
            Normalizer::default(),
        );
        view.refresh().await;

        source.set_items(Collection::Notices, vec![notice("c", "third")]);
        view.refresh().await;

        let ids: Vec<&str> = view.state().items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn list_stays_visible_while_reloading() {
        let source =
            InMemoryFeedSource::new().with_items(Collection::Notices, vec![notice("a", "first")]);
        let mut view = create_view(source, Collection::Notices);
        view.refresh().await;

        let _pending = view.begin_load();

        assert_eq!(view.state().items().len(), 1);
    }

    #[tokio::test]
    async fn stale_result_is_discarded() {
        let source = Arc::new(
            InMemoryFeedSource::new().with_items(Collection::Notices, vec![notice("old", "old")]),
        );
        let mut view = FeedView::new(
            Arc::clone(&source),
            Arc::new(FixedClock::at(fixed_now())),
            Collection::Notices,
            Normalizer::default(),
        );

        let first = view.begin_load();
        let first_outcome = first.run().await;

        source.set_items(Collection::Notices, vec![notice("new", "new")]);
        let second = view.begin_load();
        let second_outcome = second.run().await;

        assert!(view.apply(second_outcome));
        assert!(!view.apply(first_outcome));

        let ids: Vec<&str> = view.state().items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["new"]);
    }

    #[tokio::test]
    async fn late_result_after_teardown_is_discarded() {
        let source =
            InMemoryFeedSource::new().with_items(Collection::Jobs, vec![notice("j1", "job")]);
        let mut view = create_view(source, Collection::Jobs);

        let pending = view.begin_load();
        let outcome = tokio::spawn(pending.run()).await.unwrap();
        view.teardown();

        assert!(!view.apply(outcome));
        assert!(view.state().is_loading());
        assert!(view.is_torn_down());
    }

    #[tokio::test]
    async fn torn_down_view_does_not_fetch() {
        let source = Arc::new(InMemoryFeedSource::new().with_items(Collection::Jobs, vec![]));
        let mut view = FeedView::new(
            Arc::clone(&source),
            Arc::new(FixedClock::at(fixed_now())),
            Collection::Jobs,
            Normalizer::default(),
        );
        view.teardown();

        view.refresh().await;

        assert_eq!(source.fetch_count(), 0);
        assert!(view.state().is_loading());
    }

    #[tokio::test]
    async fn failure_after_success_replaces_list() {
        let source = Arc::new(
            InMemoryFeedSource::new().with_items(Collection::Jobs, vec![notice("j1", "job")]),
        );
        let mut view = FeedView::new(
            Arc::clone(&source),
            Arc::new(FixedClock::at(fixed_now())),
            Collection::Jobs,
            Normalizer::default(),
        );
        view.refresh().await;

        source.set_failure(Collection::Jobs, 500);
        view.refresh().await;

        assert!(view.state().is_failed());
        assert!(view.state().items().is_empty());
    }

    #[test]
    fn generations_increase() {
        let mut view = create_view(InMemoryFeedSource::new(), Collection::Jobs);

        let a = view.begin_load();
        let b = view.begin_load();

        assert!(b.generation() > a.generation());
    }

    #[test]
    fn refresh_works_from_a_blocking_context() {
        let source =
            InMemoryFeedSource::new().with_items(Collection::Notices, vec![notice("n1", "hi")]);
        let mut view = create_view(source, Collection::Notices);

        let loaded = tokio_test::block_on(view.refresh()).items().len();

        assert_eq!(loaded, 1);
    }

    #[test]
    fn state_serializes_with_tag() {
        let json = serde_json::to_value(FeedState::Failed("down".to_string())).unwrap();

        assert_eq!(json["state"], "failed");
        assert_eq!(json["data"], "down");

        let json = serde_json::to_value(FeedState::Loading).unwrap();
        assert_eq!(json["state"], "loading");
    }
}
