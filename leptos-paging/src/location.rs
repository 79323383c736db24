use crate::SearchParams;

/// Read access to the current location's query parameters.
///
/// Implementations must hand back a consistent snapshot for the duration of a single paging call.
pub trait SearchParamsSource {
    /// The raw value of the first parameter named `name`, if present.
    fn get(&self, name: &str) -> Option<String>;

    /// The full current query string, without the leading `?`.
    fn serialize(&self) -> String;

    /// An owned copy of the current parameters, safe to modify.
    fn search_params(&self) -> SearchParams {
        SearchParams::parse(&self.serialize())
    }
}

/// Read access to the current location's path.
pub trait PathSource {
    /// The current path, without any query string.
    fn current_path(&self) -> String;
}

impl<T: SearchParamsSource + ?Sized> SearchParamsSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn serialize(&self) -> String {
        (**self).serialize()
    }

    fn search_params(&self) -> SearchParams {
        (**self).search_params()
    }
}

impl<T: PathSource + ?Sized> PathSource for &T {
    fn current_path(&self) -> String {
        (**self).current_path()
    }
}

/// A fixed location, useful outside of a router (e.g. on the server from a request uri) and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLocation {
    path: String,
    params: SearchParams,
}

impl StaticLocation {
    /// Create from a path and a query string, the query string may include its leading `?`.
    pub fn new(path: impl Into<String>, query: &str) -> Self {
        Self {
            path: path.into(),
            params: SearchParams::parse(query),
        }
    }

    /// Split a `path?query` string, e.g. a request uri or a computed paging url.
    pub fn from_url(url: &str) -> Self {
        match url.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(url, ""),
        }
    }

    /// Create from a path and an already parsed set of parameters.
    pub fn with_params(path: impl Into<String>, params: SearchParams) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// The parameters of this location.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }
}

impl SearchParamsSource for StaticLocation {
    fn get(&self, name: &str) -> Option<String> {
        self.params.get(name).map(str::to_string)
    }

    fn serialize(&self) -> String {
        self.params.to_string()
    }

    fn search_params(&self) -> SearchParams {
        self.params.clone()
    }
}

impl PathSource for StaticLocation {
    fn current_path(&self) -> String {
        self.path.clone()
    }
}
