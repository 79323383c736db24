use crate::{PathSource, SearchParams, SearchParamsSource, read_page};

/// Options passed along with a paging navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Whether the navigation should reset the scroll position.
    pub scroll: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self { scroll: true }
    }
}

/// Performs navigation to a url, e.g. a router push.
pub trait Navigator {
    /// Navigate to `url`, `options.scroll == false` must leave the scroll position alone.
    fn go(&self, url: &str, options: NavigateOptions);
}

impl<F> Navigator for F
where
    F: Fn(&str, NavigateOptions),
{
    fn go(&self, url: &str, options: NavigateOptions) {
        self(url, options)
    }
}

fn to_url(path: &str, params: &SearchParams) -> String {
    format!("{path}?{params}")
}

/// The url of the page after `page`, every other parameter left as is.
pub fn next_url(path: &str, params: &SearchParams, param: &str, page: u64) -> String {
    let mut next = params.clone();
    next.set(param, page.saturating_add(1).to_string());
    to_url(path, &next)
}

/// The url of the page before `page`, every other parameter left as is.
///
/// On the first page there is nothing before it, the paging parameter is
/// left exactly as it is rather than written as `0` or removed.
pub fn prev_url(path: &str, params: &SearchParams, param: &str, page: u64) -> String {
    let mut prev = params.clone();
    let prev_page = page.saturating_sub(1);
    if prev_page > 0 {
        prev.set(param, prev_page.to_string());
    }
    to_url(path, &prev)
}

/// Urls and actions for moving one page forward or back.
///
/// Built fresh from the current location by [`paging_controls`], hold on to it only as long as that location is current.
#[derive(Debug, Clone)]
pub struct PagingControls<N> {
    page: u64,
    next_url: String,
    prev_url: String,
    navigator: N,
}

impl<N: Navigator> PagingControls<N> {
    /// The page the urls were computed from.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// The url of the next page.
    pub fn next_url(&self) -> &str {
        &self.next_url
    }

    /// The url of the previous page, the current url when already on the first page.
    pub fn prev_url(&self) -> &str {
        &self.prev_url
    }

    /// Navigate to [`PagingControls::next_url`] without resetting scroll.
    pub fn next(&self) {
        self.go(&self.next_url);
    }

    /// Navigate to [`PagingControls::prev_url`] without resetting scroll.
    pub fn prev(&self) {
        self.go(&self.prev_url);
    }

    fn go(&self, url: &str) {
        tracing::debug!(url, page = self.page, "paging navigation");
        self.navigator.go(url, NavigateOptions { scroll: false });
    }
}

/// Compute the paging urls for the current location.
///
/// `param` is the name of the paging parameter, usually [`crate::DEFAULT_PAGING_SEARCH_PARAM`].
pub fn paging_controls<L, N>(location: &L, navigator: N, param: &str) -> PagingControls<N>
where
    L: SearchParamsSource + PathSource + ?Sized,
    N: Navigator,
{
    let page = read_page(location, param);
    let path = location.current_path();
    let params = location.search_params();

    PagingControls {
        page,
        next_url: next_url(&path, &params, param, page),
        prev_url: prev_url(&path, &params, param, page),
        navigator,
    }
}
