//! Combinators over ordered lists of futures.
//!
//! Every function here takes `impl IntoIterator<Item = F>`: arrays, `Vec`s,
//! and iterators all qualify through the one compile-time capability, which
//! is also the boundary that distinguishes "a list of futures" from a lone
//! array-like value. Input lists are homogeneous in the future type; mixed
//! lists are expressed by boxing each entry (`FutureExt::boxed`).

use futures_util::future::{join_all, pending, select_all};
use futures_util::stream::{FuturesUnordered, StreamExt};
use twofold_types::{AggregateError, Outcome};

use crate::FutureLike;

/// Await every input; all must fulfill.
///
/// Fulfills with the values in input order, regardless of settlement order.
/// If any input rejects, rejects with the reason of the earliest-*positioned*
/// rejecting input — position, not wall-clock, decides, so every input is
/// driven to settlement before the verdict and no input is cancelled. An
/// empty list fulfills with an empty `Vec`.
///
/// A type with indexed access and a length but no iterator is an array-like
/// value, not a list of futures, and is not expanded:
///
/// ```compile_fail
/// struct ArrayLike {
///     length: usize,
/// }
///
/// let _ = twofold_core::merge(ArrayLike { length: 3 });
/// ```
pub async fn merge<I, F>(futures: I) -> Result<Vec<F::Ok>, F::Error>
where
    I: IntoIterator<Item = F>,
    F: FutureLike,
{
    join_all(futures).await.into_iter().collect()
}

/// Race the inputs; the wall-clock-earliest settlement wins, on either
/// channel.
///
/// Losing inputs are dropped, and dropping a future cancels it — a deliberate
/// deviation from hosts without cancellation, where losers run to completion
/// unobserved. An empty race never settles.
pub async fn first<I, F>(futures: I) -> Result<F::Ok, F::Error>
where
    I: IntoIterator<Item = F>,
    F: FutureLike,
{
    let entrants: Vec<_> = futures.into_iter().map(Box::pin).collect();
    if entrants.is_empty() {
        return pending().await;
    }
    let (settlement, _index, _losers) = select_all(entrants).await;
    settlement
}

/// Race the inputs for the first *fulfillment*.
///
/// Rejections are tolerated while at least one input is still running; the
/// first input to fulfill wins and the rest are dropped. Only when every
/// input has rejected does `one_of` reject, with every reason collected in
/// input order. An empty list rejects immediately with an empty
/// [`AggregateError`]: no candidate could succeed.
pub async fn one_of<I, F>(futures: I) -> Result<F::Ok, AggregateError<F::Error>>
where
    I: IntoIterator<Item = F>,
    F: FutureLike,
{
    let mut entrants: FuturesUnordered<_> = futures
        .into_iter()
        .enumerate()
        .map(|(index, future)| async move { (index, future.await) })
        .collect();

    let mut reasons: Vec<Option<F::Error>> = Vec::new();
    reasons.resize_with(entrants.len(), || None);

    while let Some((index, settlement)) = entrants.next().await {
        match settlement {
            Ok(value) => return Ok(value),
            Err(error) => reasons[index] = Some(error),
        }
    }

    Err(AggregateError::new(reasons.into_iter().flatten().collect()))
}

/// Await every input and report how each one settled.
///
/// Never rejects at its own level: per-input failures are data, not
/// control flow. The records come back in input order.
pub async fn settle<I, F>(futures: I) -> Vec<Outcome<F::Ok, F::Error>>
where
    I: IntoIterator<Item = F>,
    F: FutureLike,
{
    let recorded = futures
        .into_iter()
        .map(|future| async move { Outcome::from(future.await) });
    join_all(recorded).await
}
