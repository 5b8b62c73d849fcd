//! Typed two-channel future combinators.
//!
//! A thin, allocation-light layer over plain [`std::future::Future`]s whose
//! output is a `Result`: the fulfillment and rejection channels are tracked
//! as separate types through every transformation, and anything that already
//! produces a `Result` — an async block, a handwritten future, another
//! library's client — composes here without wrapping.
//!
//! The crate brings no runtime and no scheduler of its own. Combinators
//! build futures; whoever polls them decides when work happens.
//!
//! - **Construct**: [`of`], [`fail`], [`failed`], [`make`], [`spawn`],
//!   [`spawn_with`]
//! - **Transform**: [`map`]/[`and_then`], [`map_err`], [`recover`]/
//!   [`or_else`], [`after`]/[`after_with`], [`apply`]
//! - **Combine**: [`merge`], [`first`], [`one_of`], [`settle`]
//! - **Compose**: [`FutureLikeExt`] for the chainable method shape
//!
//! ```
//! use twofold_core::{FutureLikeExt, merge, of};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let batch = merge([of::<_, ()>(1), of(2), of(3)]).map(|values| values.len());
//! assert_eq!(batch.await, Ok(3));
//! # });
//! ```

mod combine;
mod create;
mod ext;
mod future_like;
mod transform;

pub use combine::{first, merge, one_of, settle};
pub use create::{Completer, fail, failed, make, of, spawn, spawn_with};
pub use ext::FutureLikeExt;
pub use future_like::{FutureLike, is};
pub use transform::{after, after_with, and_then, apply, map, map_err, or_else, recover};

// Re-export the domain types so downstream code needs a single dependency.
pub use twofold_types::{AggregateError, Outcome};
