//! Constructors: lifting values, errors, and callbacks into futures.

use std::convert::Infallible;

use futures_channel::oneshot;
use futures_util::future;
use tracing::debug;

use crate::FutureLike;

/// Wrap a plain value into an immediately-fulfilled future.
///
/// A [`FutureLike`] needs no lifting — it already is its own deferred
/// result — so `of` exists for the plain-value case only. Never panics.
///
/// The rejection channel's type is free; annotate it at the call site when
/// nothing else pins it down, e.g. `of::<_, io::Error>(7)`.
pub fn of<T, E>(value: T) -> impl FutureLike<Ok = T, Error = E> {
    future::ok(value)
}

/// Wrap a plain value into an immediately-rejected future.
///
/// This is the plain-value half of the fail/failed pair; [`failed`] is the
/// half that consumes another future.
pub fn fail<T, E>(error: E) -> impl FutureLike<Ok = T, Error = E> {
    future::err(error)
}

/// Demote a future's settlement into the rejection channel.
///
/// Awaits `future`; a fulfillment value becomes the rejection reason (via
/// `Into`, which covers the same-type case for free), and an existing
/// rejection propagates unchanged. The result can no longer fulfill, which
/// its `Ok` type records.
pub async fn failed<F>(future: F) -> Result<Infallible, F::Error>
where
    F: FutureLike,
    F::Ok: Into<F::Error>,
{
    match future.await {
        Ok(value) => Err(value.into()),
        Err(error) => Err(error),
    }
}

/// Completion handle passed to a [`make`] executor.
///
/// Settling consumes the handle, so the settle-once invariant is enforced by
/// ownership: there is no second call to guard against at runtime. Dropping
/// the handle without settling leaves the associated future pending forever,
/// mirroring an executor that never invokes either completion callback.
pub struct Completer<T, E> {
    tx: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Completer<T, E> {
    /// Settle the associated future as fulfilled.
    pub fn fulfill(self, value: T) {
        // Send only fails when the future was dropped; nobody is listening.
        let _ = self.tx.send(Ok(value));
    }

    /// Settle the associated future as rejected.
    pub fn reject(self, error: E) {
        let _ = self.tx.send(Err(error));
    }
}

/// Construct a future from an executor callback.
///
/// `executor` runs synchronously, before `make` returns, and receives the
/// [`Completer`] for the returned future. The completer may be settled
/// inside the executor or moved into a task, a thread, or a callback and
/// settled later; continuations attached to the returned future observe the
/// settlement exactly once, whenever it happens.
pub fn make<T, E, X>(executor: X) -> impl FutureLike<Ok = T, Error = E>
where
    X: FnOnce(Completer<T, E>),
{
    let (tx, rx) = oneshot::channel();
    executor(Completer { tx });
    async move {
        match rx.await {
            Ok(outcome) => outcome,
            Err(oneshot::Canceled) => {
                debug!("completer dropped without settling; future stays pending");
                future::pending().await
            }
        }
    }
}

/// Run a callback immediately in a protected context.
///
/// `Err` is the typed rendition of a synchronous throw: whichever way the
/// callback goes, the outcome surfaces only through the returned future and
/// never as an escaping exception. Captured state replaces the positional
/// parameter list of callback-based hosts.
pub fn spawn<T, E, X>(callback: X) -> impl FutureLike<Ok = T, Error = E>
where
    X: FnOnce() -> Result<T, E>,
{
    future::ready(callback())
}

/// Run a future-producing callback immediately and adopt its outcome.
///
/// The flattening form of [`spawn`]: the callback is invoked eagerly, and
/// the future it returns becomes the result.
pub fn spawn_with<F, X>(callback: X) -> F
where
    F: FutureLike,
    X: FnOnce() -> F,
{
    callback()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::{Completer, fail, failed, make, of, spawn, spawn_with};

    #[tokio::test]
    async fn of_fulfills_with_the_value() {
        assert_eq!(of::<_, ()>(8).await, Ok(8));
    }

    #[tokio::test]
    async fn fail_rejects_with_the_value() {
        assert_eq!(fail::<(), _>("foo").await, Err("foo"));
    }

    #[tokio::test]
    async fn failed_demotes_a_fulfillment_into_a_rejection() {
        assert_eq!(failed(of::<_, i32>(8)).await, Err(8));
    }

    #[tokio::test]
    async fn failed_passes_an_existing_rejection_through() {
        assert_eq!(failed(fail::<&str, _>("mark")).await, Err("mark"));
    }

    #[tokio::test]
    async fn make_fulfills_through_the_completer() {
        let future = make(|completer: Completer<_, ()>| completer.fulfill(9));
        assert_eq!(future.await, Ok(9));
    }

    #[tokio::test]
    async fn make_rejects_through_the_completer() {
        let future = make(|completer: Completer<(), _>| completer.reject(9));
        assert_eq!(future.await, Err(9));
    }

    #[tokio::test]
    async fn make_can_settle_from_another_task() {
        let future = make(|completer: Completer<&str, ()>| {
            tokio::spawn(async move {
                completer.fulfill("later");
            });
        });
        assert_eq!(future.await, Ok("later"));
    }

    #[tokio::test(start_paused = true)]
    async fn make_stays_pending_when_the_completer_is_dropped() {
        let future = make(|completer: Completer<(), ()>| drop(completer));
        let verdict = timeout(Duration::from_millis(50), future).await;
        assert!(verdict.is_err(), "an unsettled future must stay pending");
    }

    #[tokio::test]
    async fn spawn_captures_the_callback_result() {
        assert_eq!(spawn(|| Ok::<_, &str>(7)).await, Ok(7));
        assert_eq!(spawn(|| Err::<i32, _>("foo")).await, Err("foo"));
    }

    #[test]
    fn spawn_runs_the_callback_eagerly() {
        let mut ran = false;
        let future = spawn(|| {
            ran = true;
            Ok::<_, ()>(7)
        });
        drop(future);
        assert!(ran, "spawn must invoke its callback before returning");
    }

    #[tokio::test]
    async fn spawn_with_adopts_the_returned_future() {
        assert_eq!(spawn_with(|| of::<_, ()>(3)).await, Ok(3));
        assert_eq!(spawn_with(|| fail::<i32, _>(3)).await, Err(3));
    }
}
