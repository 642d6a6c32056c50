// tandem/src/action/builder.rs

//! Contains the `ActionBuilder<In, Err>` struct: the fluent surface for
//! declaring an action's validator, middleware chain, and terminal handler.
//! Each chaining call consumes the builder and yields the next stage of the
//! same logical build; `handler` freezes it into an [`Action`].

use crate::action::definition::{Action, ActionInner};
use crate::core::locals::Locals;
use crate::core::step::{HandlerFn, Middleware};
use crate::core::validate::Validator;
use crate::error::TandemError;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, Level};

/// Builder for an [`Action`], generic over the input type `In` and the error
/// type `Err` that its stages return.
///
/// `In` must be `'static + Send + Sync`; it is shared across stages behind an
/// `Arc`, so it does not need to be `Clone`.
/// `Err` must be `std::error::Error + Send + Sync + 'static` and additionally
/// `From<crate::error::TandemError>` so the runtime can surface validation
/// failures through it. It defaults to `TandemError` for pipelines that do
/// not carry a custom error enum.
pub struct ActionBuilder<In, Err = TandemError>
where
  In: 'static + Send + Sync,
  Err: std::error::Error + From<TandemError> + Send + Sync + 'static,
{
  pub(crate) validator: Option<Arc<dyn Validator<In>>>,
  pub(crate) middleware: Vec<Middleware<In, Err>>,
}

impl<In, Err> ActionBuilder<In, Err>
where
  In: 'static + Send + Sync,
  Err: std::error::Error + From<TandemError> + Send + Sync + 'static,
{
  /// Creates a builder with no validator and an empty middleware chain.
  pub fn new() -> Self {
    Self {
      validator: None,
      middleware: Vec::new(),
    }
  }

  /// Registers the input validator for this pipeline.
  ///
  /// Calling `input` is optional. If it is called more than once, only the
  /// most recent validator takes effect (last one set wins). The validator is
  /// not invoked here; it runs once per invocation, against the raw input,
  /// before any middleware.
  ///
  /// Any `Fn(In) -> Result<In, anyhow::Error>` closure qualifies as a
  /// validator via the blanket impl on [`Validator`].
  pub fn input<V>(mut self, validator: V) -> Self
  where
    V: Validator<In> + 'static,
  {
    if self.validator.is_some() {
      event!(Level::DEBUG, "Replacing previously registered validator; the last one set wins.");
    }
    self.validator = Some(Arc::new(validator));
    self
  }

  /// Appends one middleware step to the chain.
  ///
  /// The step receives the validated input and a snapshot of the locals
  /// contributed by earlier steps, and may return a contribution of its own
  /// (see [`Middleware`] for the full contract). Steps execute strictly in
  /// registration order; nothing runs at registration time.
  ///
  /// The step's error type `UserErr` must be convertible into the pipeline's
  /// `Err`.
  pub fn step<F, Fut, UserErr>(mut self, step_fn: F) -> Self
  where
    F: Fn(Arc<In>, Locals) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Option<Locals>, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    let wrapped: Middleware<In, Err> = Box::new(move |input, locals| {
      let user_fut = step_fn(input, locals);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    self.middleware.push(wrapped);
    event!(Level::TRACE, num_middleware = self.middleware.len(), "Middleware step appended.");
    self
  }

  /// Terminal operation: registers the handler and freezes the pipeline into
  /// an executable [`Action`].
  ///
  /// The handler receives the validated input and the fully accumulated
  /// locals, after every middleware step has completed. Its result (or error)
  /// becomes the result (or error) of the whole invocation.
  pub fn handler<F, Fut, Out, UserErr>(self, handler_fn: F) -> Action<In, Out, Err>
  where
    F: Fn(Arc<In>, Locals) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Out, UserErr>> + Send + 'static,
    Out: 'static + Send,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    let wrapped: HandlerFn<In, Out, Err> = Box::new(move |input, locals| {
      let user_fut = handler_fn(input, locals);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });

    event!(
      Level::DEBUG,
      num_middleware = self.middleware.len(),
      has_validator = self.validator.is_some(),
      "Action pipeline frozen."
    );

    Action::from_inner(ActionInner {
      validator: self.validator,
      middleware: self.middleware,
      handler: wrapped,
    })
  }
}

impl<In, Err> Default for ActionBuilder<In, Err>
where
  In: 'static + Send + Sync,
  Err: std::error::Error + From<TandemError> + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<In, Err> std::fmt::Debug for ActionBuilder<In, Err>
where
  In: 'static + Send + Sync,
  Err: std::error::Error + From<TandemError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ActionBuilder")
      .field("has_validator", &self.validator.is_some())
      .field("num_middleware", &self.middleware.len())
      .finish()
  }
}
