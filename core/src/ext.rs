//! Method-chaining shape of the transform combinators.

use std::convert::Infallible;
use std::future::Future;

use twofold_types::Outcome;

use crate::{FutureLike, transform};

/// Chainable adapters for any [`FutureLike`].
///
/// Every method delegates to the free function of the same name in this
/// crate; chaining is the composition-friendly call shape, the free
/// functions the direct one, and the two are interchangeable.
///
/// ```
/// use twofold_core::{FutureLikeExt, of};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let shouted = of::<_, ()>("ok").map(str::to_uppercase).await;
/// assert_eq!(shouted, Ok("OK".to_string()));
/// # });
/// ```
pub trait FutureLikeExt: FutureLike {
    /// Transform the fulfillment value. See [`crate::map`].
    fn map<K, C>(self, callback: C) -> impl Future<Output = Result<K, Self::Error>>
    where
        Self: Sized,
        C: FnOnce(Self::Ok) -> K,
    {
        transform::map(self, callback)
    }

    /// Chain a future-producing callback on the fulfillment channel.
    /// See [`crate::and_then`].
    fn and_then<N, C>(self, callback: C) -> impl Future<Output = Result<N::Ok, Self::Error>>
    where
        Self: Sized,
        N: FutureLike<Error = Self::Error>,
        C: FnOnce(Self::Ok) -> N,
    {
        transform::and_then(self, callback)
    }

    /// Transform the rejection reason. See [`crate::map_err`].
    fn map_err<E2, C>(self, callback: C) -> impl Future<Output = Result<Self::Ok, E2>>
    where
        Self: Sized,
        C: FnOnce(Self::Error) -> E2,
    {
        transform::map_err(self, callback)
    }

    /// Convert a rejection into a fulfillment. See [`crate::recover`].
    fn recover<C>(self, callback: C) -> impl Future<Output = Result<Self::Ok, Infallible>>
    where
        Self: Sized,
        C: FnOnce(Self::Error) -> Self::Ok,
    {
        transform::recover(self, callback)
    }

    /// Chain a future-producing callback on the rejection channel.
    /// See [`crate::or_else`].
    fn or_else<N, C>(self, callback: C) -> impl Future<Output = Result<Self::Ok, N::Error>>
    where
        Self: Sized,
        N: FutureLike<Ok = Self::Ok>,
        C: FnOnce(Self::Error) -> N,
    {
        transform::or_else(self, callback)
    }

    /// Run a cleanup callback after settlement. See [`crate::after`].
    fn after<C>(self, callback: C) -> impl Future<Output = Result<Self::Ok, Self::Error>>
    where
        Self: Sized,
        C: FnOnce(),
    {
        transform::after(self, callback)
    }

    /// Run an asynchronous, fallible cleanup after settlement.
    /// See [`crate::after_with`].
    fn after_with<N, C>(self, callback: C) -> impl Future<Output = Result<Self::Ok, Self::Error>>
    where
        Self: Sized,
        N: FutureLike<Error = Self::Error>,
        C: FnOnce() -> N,
    {
        transform::after_with(self, callback)
    }

    /// Apply a deferred function to this future's value.
    /// See [`crate::apply`].
    fn apply<Ff, G, K>(self, function: Ff) -> impl Future<Output = Result<K, Self::Error>>
    where
        Self: Sized,
        Ff: FutureLike<Ok = G, Error = Self::Error>,
        G: FnOnce(Self::Ok) -> K,
    {
        transform::apply(self, function)
    }

    /// Capture the settlement as a data record instead of control flow.
    fn into_outcome(self) -> impl Future<Output = Outcome<Self::Ok, Self::Error>>
    where
        Self: Sized,
    {
        async move { Outcome::from(self.await) }
    }
}

impl<F> FutureLikeExt for F where F: FutureLike {}

#[cfg(test)]
mod tests {
    use twofold_types::Outcome;

    use super::FutureLikeExt;
    use crate::{fail, map, of};

    #[tokio::test]
    async fn methods_chain_across_both_channels() {
        let settled = of::<_, &str>(1)
            .map(|n| n + 1)
            .and_then(|n| of(n * 2))
            .map_err(|_: &str| "unreachable")
            .await;
        assert_eq!(settled, Ok(4));

        let settled = fail::<usize, _>("boom")
            .map(|n: usize| n + 1)
            .or_else(|reason: &str| of::<_, ()>(reason.len()))
            .await;
        assert_eq!(settled, Ok(4));
    }

    #[tokio::test]
    async fn method_and_free_call_shapes_agree() {
        let via_method = of::<_, ()>(1).map(|n| n + 1).await;
        let via_function = map(of::<_, ()>(1), |n| n + 1).await;
        assert_eq!(via_method, via_function);
    }

    #[tokio::test]
    async fn into_outcome_reifies_the_settlement() {
        assert_eq!(of::<_, ()>(1).into_outcome().await, Outcome::Ok(1));
        assert_eq!(fail::<i32, _>("no").into_outcome().await, Outcome::Err("no"));
    }

    #[tokio::test]
    async fn cleanup_hooks_chain() {
        let mut calls = 0;
        let settled = of::<_, i32>(1)
            .after(|| calls += 1)
            .after_with(|| of(10))
            .await;
        assert_eq!(settled, Ok(1));
        assert_eq!(calls, 1);
    }
}
