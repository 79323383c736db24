use std::{
    borrow::Cow,
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

use crate::{DEFAULT_PAGING_SEARCH_PARAM, QueryExecutor, SearchParamsSource, read_page};

/// A query whose descriptor depends on the page stored in the url.
///
/// ```
/// use leptos_paging::{PaginatedQuery, StaticLocation, paginated_query};
///
/// let query = PaginatedQuery::new(|page| ("posts", page))
///     .with_prefetch(|page| vec![("posts", page + 1)])
///     .with_paging_search_param("p");
///
/// let location = StaticLocation::new("/posts", "p=4");
/// let executor = |(key, page): (&str, u64)| format!("{key}:{page}");
/// assert_eq!(paginated_query(&location, &executor, &query), "posts:4");
/// ```
pub struct PaginatedQuery<D> {
    query: Arc<dyn Fn(u64) -> D + Send + Sync>,
    prefetch: Option<Arc<dyn Fn(u64) -> Vec<D> + Send + Sync>>,
    paging_search_param: Cow<'static, str>,
}

impl<D> Clone for PaginatedQuery<D> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            prefetch: self.prefetch.clone(),
            paging_search_param: self.paging_search_param.clone(),
        }
    }
}

impl<D> Debug for PaginatedQuery<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatedQuery")
            .field("has_prefetch", &self.prefetch.is_some())
            .field("paging_search_param", &self.paging_search_param)
            .finish()
    }
}

impl<D> PaginatedQuery<D> {
    /// Create from a function building the primary descriptor for a given page.
    pub fn new(query: impl Fn(u64) -> D + Send + Sync + 'static) -> Self {
        Self {
            query: Arc::new(query),
            prefetch: None,
            paging_search_param: Cow::Borrowed(DEFAULT_PAGING_SEARCH_PARAM),
        }
    }

    /// Set a function building descriptors to fetch alongside the primary one, e.g. the neighbouring pages.
    ///
    /// Their results are never handed back, they only warm the executor.
    ///
    /// Default: no prefetching
    pub fn with_prefetch(mut self, prefetch: impl Fn(u64) -> Vec<D> + Send + Sync + 'static) -> Self {
        self.prefetch = Some(Arc::new(prefetch));
        self
    }

    /// Set the query parameter the page is read from.
    ///
    /// Default: `"page"`
    pub fn with_paging_search_param(mut self, param: impl Into<Cow<'static, str>>) -> Self {
        self.paging_search_param = param.into();
        self
    }

    /// The query parameter the page is read from.
    pub fn paging_search_param(&self) -> &str {
        &self.paging_search_param
    }

    /// The primary descriptor for `page`.
    pub fn query(&self, page: u64) -> D {
        (self.query)(page)
    }

    /// The prefetch descriptors for `page`.
    pub fn prefetch(&self, page: u64) -> Vec<D> {
        self.prefetch
            .as_ref()
            .map(|prefetch| prefetch(page))
            .unwrap_or_default()
    }
}

/// Run a [`PaginatedQuery`] for the page currently in the url.
///
/// The page is resolved once, then the prefetch descriptors are handed to
/// [`QueryExecutor::run_all`] (results dropped) and the primary descriptor to
/// [`QueryExecutor::run`], whose output is returned as-is.
pub fn paginated_query<D, E>(
    source: &(impl SearchParamsSource + ?Sized),
    executor: &E,
    query: &PaginatedQuery<D>,
) -> E::Output
where
    E: QueryExecutor<D> + ?Sized,
{
    let page = read_page(source, query.paging_search_param());

    let prefetch = query.prefetch(page);
    tracing::trace!(
        page,
        prefetch_count = prefetch.len(),
        param = query.paging_search_param(),
        "running paginated query"
    );
    let _ = executor.run_all(prefetch);

    executor.run(query.query(page))
}

#[cfg(test)]
mod test {
    use std::{future::Future, pin::Pin};

    use parking_lot::Mutex;
    use rstest::*;

    use super::*;
    use crate::StaticLocation;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Descriptor {
        key: &'static str,
        page: u64,
    }

    #[derive(Default)]
    struct RecordingExecutor {
        runs: Mutex<Vec<Descriptor>>,
        batches: Mutex<Vec<Vec<Descriptor>>>,
    }

    impl QueryExecutor<Descriptor> for RecordingExecutor {
        type Output = Result<String, String>;

        fn run(&self, descriptor: Descriptor) -> Self::Output {
            self.runs.lock().push(descriptor.clone());
            if descriptor.page > 100 {
                Err(format!("no page {}", descriptor.page))
            } else {
                Ok(format!("{}:{}", descriptor.key, descriptor.page))
            }
        }

        fn run_all(&self, descriptors: Vec<Descriptor>) -> Vec<Self::Output> {
            self.batches.lock().push(descriptors);
            vec![]
        }
    }

    fn posts_query() -> PaginatedQuery<Descriptor> {
        PaginatedQuery::new(|page| Descriptor { key: "posts", page }).with_prefetch(|page| {
            vec![
                Descriptor { key: "posts", page: page + 1 },
                Descriptor { key: "authors", page },
            ]
        })
    }

    #[rstest]
    #[case("page=2", 2)]
    #[case("", 1)]
    #[case("page=invalid", 1)]
    #[case("filter=test&page=7", 7)]
    fn test_query_and_prefetch_share_page(#[case] query: &str, #[case] page: u64) {
        let location = StaticLocation::new("/test", query);
        let executor = RecordingExecutor::default();

        let result = paginated_query(&location, &executor, &posts_query());

        assert_eq!(result, Ok(format!("posts:{page}")));
        assert_eq!(*executor.runs.lock(), vec![Descriptor { key: "posts", page }]);
        assert_eq!(
            *executor.batches.lock(),
            vec![vec![
                Descriptor { key: "posts", page: page + 1 },
                Descriptor { key: "authors", page },
            ]]
        );
    }

    /// Without a prefetch fn an empty batch is still handed over.
    #[rstest]
    fn test_default_prefetch_is_empty() {
        let location = StaticLocation::new("/test", "page=3");
        let executor = RecordingExecutor::default();
        let query = PaginatedQuery::new(|page| Descriptor { key: "posts", page });

        assert_eq!(query.paging_search_param(), "page");
        assert!(query.prefetch(3).is_empty());
        assert_eq!(paginated_query(&location, &executor, &query), Ok("posts:3".to_string()));
        assert_eq!(*executor.batches.lock(), vec![Vec::<Descriptor>::new()]);
    }

    #[rstest]
    fn test_custom_param() {
        let location = StaticLocation::new("/test", "page=9&customPage=5");
        let executor = RecordingExecutor::default();
        let query = posts_query().with_paging_search_param("customPage");

        assert_eq!(paginated_query(&location, &executor, &query), Ok("posts:5".to_string()));
    }

    #[rstest]
    fn test_errors_are_propagated() {
        let location = StaticLocation::new("/test", "page=101");
        let executor = RecordingExecutor::default();

        assert_eq!(
            paginated_query(&location, &executor, &posts_query()),
            Err("no page 101".to_string())
        );
    }

    type BoxedFetch = Pin<Box<dyn Future<Output = Result<Vec<u64>, String>>>>;

    /// The executor decides what running means, here a future the caller awaits.
    #[rstest]
    #[tokio::test]
    async fn test_async_executor() {
        let prefetched = Mutex::new(vec![]);
        let executor = |page: u64| -> BoxedFetch {
            prefetched.lock().push(page);
            Box::pin(async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
                Ok(((page - 1) * 3..page * 3).collect())
            })
        };
        let query = PaginatedQuery::new(|page| page).with_prefetch(|page| vec![page + 1, page + 2]);
        let location = StaticLocation::new("/items", "page=2");

        let items = paginated_query(&location, &executor, &query).await;

        assert_eq!(items, Ok(vec![3, 4, 5]));
        assert_eq!(*prefetched.lock(), vec![3, 4, 2]);
    }
}
