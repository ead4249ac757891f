//! Network availability probing.

/// Answers "is a network transport available right now?".
///
/// Implementations must query the platform on every call and report
/// `false` when the query itself fails.
pub trait ConnectivityProbe {
    fn is_available(&self) -> bool;
}

impl<F> ConnectivityProbe for F
where
    F: Fn() -> bool,
{
    fn is_available(&self) -> bool {
        self()
    }
}
