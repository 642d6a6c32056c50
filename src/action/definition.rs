// tandem/src/action/definition.rs

//! Contains the frozen `Action<In, Out, Err>` struct: the executable produced
//! by the terminal builder call. Execution lives in `execution.rs`.

use crate::action::builder::ActionBuilder;
use crate::core::step::{HandlerFn, Middleware};
use crate::core::validate::Validator;
use crate::error::TandemError;
use std::sync::Arc;

/// The pipeline descriptor captured by an [`Action`]: the configuration
/// accumulated across builder calls, frozen at `handler` time and never
/// mutated afterwards.
pub(crate) struct ActionInner<In, Out, Err>
where
  In: 'static + Send + Sync,
{
  pub(crate) validator: Option<Arc<dyn Validator<In>>>,
  pub(crate) middleware: Vec<Middleware<In, Err>>,
  pub(crate) handler: HandlerFn<In, Out, Err>,
}

/// An executable action: validate once, run the middleware chain in
/// declaration order, then the handler.
///
/// An `Action` is stateless across invocations. It holds nothing but the
/// frozen pipeline descriptor (behind an `Arc`), so it is cheap to clone and
/// safe to invoke from any number of tasks concurrently; every invocation
/// gets its own fresh locals accumulator.
pub struct Action<In, Out, Err = TandemError>
where
  In: 'static + Send + Sync,
  Err: std::error::Error + From<TandemError> + Send + Sync + 'static,
{
  pub(crate) inner: Arc<ActionInner<In, Out, Err>>,
}

impl<In, Out, Err> Action<In, Out, Err>
where
  In: 'static + Send + Sync,
  Err: std::error::Error + From<TandemError> + Send + Sync + 'static,
{
  /// Entry point for the fluent API; equivalent to [`ActionBuilder::new`].
  pub fn builder() -> ActionBuilder<In, Err> {
    ActionBuilder::new()
  }

  pub(crate) fn from_inner(inner: ActionInner<In, Out, Err>) -> Self {
    Self {
      inner: Arc::new(inner),
    }
  }

  /// Number of middleware steps in the frozen chain.
  pub fn num_middleware(&self) -> usize {
    self.inner.middleware.len()
  }

  /// Whether a validator was registered for this action.
  pub fn has_validator(&self) -> bool {
    self.inner.validator.is_some()
  }
}

// Manual Clone: the descriptor is shared, no bounds on In/Out beyond the
// struct's own.
impl<In, Out, Err> Clone for Action<In, Out, Err>
where
  In: 'static + Send + Sync,
  Err: std::error::Error + From<TandemError> + Send + Sync + 'static,
{
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<In, Out, Err> std::fmt::Debug for Action<In, Out, Err>
where
  In: 'static + Send + Sync,
  Err: std::error::Error + From<TandemError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Action")
      .field("has_validator", &self.has_validator())
      .field("num_middleware", &self.num_middleware())
      .finish()
  }
}
