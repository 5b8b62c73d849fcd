//! Single-channel transformations and the settlement hook.
//!
//! Each operation touches exactly one channel and lets the other pass
//! through untouched — the untargeted channel's callback is never invoked.
//! Where a callback may produce either a plain value or another deferred
//! one, the two cases are separate, typed entry points: the value form under
//! the operation's own name (`map`, `recover`) and the future-adopting form
//! under the ecosystem's conventional name (`and_then`, `or_else`).

use std::convert::Infallible;

use futures_util::future;

use crate::FutureLike;

/// Transform the fulfillment value; rejection passes through unchanged.
pub async fn map<F, K, C>(future: F, callback: C) -> Result<K, F::Error>
where
    F: FutureLike,
    C: FnOnce(F::Ok) -> K,
{
    future.await.map(callback)
}

/// Transform the fulfillment value into another future and adopt its
/// outcome; rejection passes through unchanged.
pub async fn and_then<F, N, C>(future: F, callback: C) -> Result<N::Ok, F::Error>
where
    F: FutureLike,
    N: FutureLike<Error = F::Error>,
    C: FnOnce(F::Ok) -> N,
{
    match future.await {
        Ok(value) => callback(value).await,
        Err(error) => Err(error),
    }
}

/// Transform the rejection reason; fulfillment passes through unchanged.
///
/// The callback's result always lands back in the rejection channel. The
/// deferred-callback variant (a callback whose own future's eventual value
/// becomes the new reason) composes as `or_else` + `failed`.
pub async fn map_err<F, E2, C>(future: F, callback: C) -> Result<F::Ok, E2>
where
    F: FutureLike,
    C: FnOnce(F::Error) -> E2,
{
    future.await.map_err(callback)
}

/// Convert a rejection into a fulfillment; fulfillment passes through
/// unchanged.
///
/// The result's error type is [`Infallible`]: after `recover`, the future
/// cannot reject. Use [`or_else`] when the handler itself may reject.
pub async fn recover<F, C>(future: F, callback: C) -> Result<F::Ok, Infallible>
where
    F: FutureLike,
    C: FnOnce(F::Error) -> F::Ok,
{
    Ok(future.await.unwrap_or_else(callback))
}

/// Convert a rejection into another future and adopt its outcome;
/// fulfillment passes through unchanged.
pub async fn or_else<F, N, C>(future: F, callback: C) -> Result<F::Ok, N::Error>
where
    F: FutureLike,
    N: FutureLike<Ok = F::Ok>,
    C: FnOnce(F::Error) -> N,
{
    match future.await {
        Ok(value) => Ok(value),
        Err(error) => callback(error).await,
    }
}

/// Run a cleanup callback once the future settles, on either channel.
///
/// The settlement itself — value or error — is preserved and delivered after
/// the callback returns.
pub async fn after<F, C>(future: F, callback: C) -> Result<F::Ok, F::Error>
where
    F: FutureLike,
    C: FnOnce(),
{
    let settlement = future.await;
    callback();
    settlement
}

/// Run an asynchronous, fallible cleanup callback once the future settles.
///
/// The original settlement is delivered only after the callback's future
/// settles. A fulfilling cleanup never replaces the original outcome — its
/// value is discarded; a rejecting cleanup supersedes the original outcome
/// with its own error.
pub async fn after_with<F, N, C>(future: F, callback: C) -> Result<F::Ok, F::Error>
where
    F: FutureLike,
    N: FutureLike<Error = F::Error>,
    C: FnOnce() -> N,
{
    let settlement = future.await;
    match callback().await {
        Ok(_) => settlement,
        Err(error) => Err(error),
    }
}

/// Apply a deferred function to a deferred value.
///
/// Both inputs are awaited together; if either rejects, the earliest
/// positioned rejection wins (the value future sits before the function
/// future), matching `merge`'s first-failure-by-position rule.
pub async fn apply<Fv, Ff, G, K>(value: Fv, function: Ff) -> Result<K, Fv::Error>
where
    Fv: FutureLike,
    Ff: FutureLike<Ok = G, Error = Fv::Error>,
    G: FnOnce(Fv::Ok) -> K,
{
    let (value, function) = future::join(value, function).await;
    let value = value?;
    let function = function?;
    Ok(function(value))
}
