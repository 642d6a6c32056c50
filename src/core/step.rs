// tandem/src/core/step.rs

//! Boxed-future type aliases for the two kinds of pipeline stages: middleware
//! steps and the terminal handler.

use crate::core::locals::Locals;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// The boxed future returned by a registered stage.
pub type StepFuture<T, Err> = Pin<Box<dyn Future<Output = Result<T, Err>> + Send>>;

/// Type alias for a registered middleware step.
///
/// A step is an asynchronous function that receives the validated input
/// (shared behind an `Arc`) and a snapshot of the locals accumulated by
/// earlier steps. It returns:
///  - `Ok(Some(contribution))` — named values to shallow-merge into the
///    accumulator (later steps overwrite earlier ones on key collisions);
///  - `Ok(None)` — no contribution, the accumulator is left untouched;
///  - `Err(e)` — aborts the invocation; no later step or handler runs.
///
/// Steps never mutate the accumulator in place. The snapshot they receive is
/// theirs to inspect; new values only enter the pipeline through the returned
/// contribution.
pub type Middleware<In, Err> =
  Box<dyn Fn(Arc<In>, Locals) -> StepFuture<Option<Locals>, Err> + Send + Sync>;

/// Type alias for the terminal handler of an action.
///
/// Receives the validated input and the fully accumulated locals, and
/// produces the invocation's result.
pub type HandlerFn<In, Out, Err> =
  Box<dyn Fn(Arc<In>, Locals) -> StepFuture<Out, Err> + Send + Sync>;
