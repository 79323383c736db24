/// Executes page-parametrized fetch descriptors.
///
/// This is the seam to whatever query cache actually runs the fetches,
/// e.g. a `leptos-fetch` `QueryClient` creating resources from `(scope, key)` descriptors.
/// Whatever [`QueryExecutor::Output`] carries (data, loading state, errors) is handed back to the caller untouched.
pub trait QueryExecutor<D> {
    /// The result of running a single descriptor.
    type Output;

    /// Run a single descriptor and return its result.
    fn run(&self, descriptor: D) -> Self::Output;

    /// Run a batch of descriptors.
    ///
    /// By default each descriptor is passed to [`QueryExecutor::run`] in order.
    fn run_all(&self, descriptors: Vec<D>) -> Vec<Self::Output> {
        descriptors
            .into_iter()
            .map(|descriptor| self.run(descriptor))
            .collect()
    }
}

impl<D, O, F> QueryExecutor<D> for F
where
    F: Fn(D) -> O,
{
    type Output = O;

    fn run(&self, descriptor: D) -> O {
        self(descriptor)
    }
}
