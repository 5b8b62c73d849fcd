//! The structural capability every combinator is written against.

use std::future::Future;

/// A deferred value with two settlement channels.
///
/// Anything that eventually produces a `Result<Ok, Error>` qualifies through
/// the blanket implementation: futures built by this crate, handwritten
/// `Future` impls, and async blocks all interoperate without wrapping, in
/// both directions. The settle-once and read-many guarantees are those of
/// [`Future`] itself; this trait only names the two channels so combinators
/// can speak about them separately.
pub trait FutureLike: Future<Output = Result<Self::Ok, Self::Error>> {
    /// The fulfillment channel's payload.
    type Ok;
    /// The rejection channel's payload.
    type Error;
}

impl<F, T, E> FutureLike for F
where
    F: Future<Output = Result<T, E>> + ?Sized,
{
    type Ok = T;
    type Error = E;
}

/// Compile-time witness that a value is a [`FutureLike`].
///
/// Whether a value supports the two-channel continuation contract is a fact
/// the compiler already knows, so the check is a bound rather than a runtime
/// inspection: `is` is the identity function, restricted to values that
/// satisfy the capability.
///
/// ```
/// use twofold_core::{is, of};
///
/// let future = is(of::<_, ()>(7));
/// # drop(future);
/// ```
///
/// A plain value is not a deferred one:
///
/// ```compile_fail
/// let _ = twofold_core::is(8);
/// ```
///
/// Neither is a struct that merely carries a field named `then`:
///
/// ```compile_fail
/// struct NotThenable {
///     then: bool,
/// }
/// let _ = twofold_core::is(NotThenable { then: true });
/// ```
#[must_use]
pub fn is<F: FutureLike>(future: F) -> F {
    future
}
