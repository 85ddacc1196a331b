/// Receives solver events as the iteration proceeds.
///
/// Observers let callers monitor a solver without changing its API, enabling
/// logging, tracing of convergence history, or collecting statistics for
/// benchmarks. Each solver defines its own event type carrying the state of
/// one iteration.
///
/// Observers are passive: they cannot alter the iteration, so a solver's
/// result is the same whether or not it is observed.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes a solver event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
