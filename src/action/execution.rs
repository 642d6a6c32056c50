// tandem/src/action/execution.rs

//! Contains the `Action::run()` method: the per-invocation algorithm that
//! validates the raw input, folds middleware contributions into the locals
//! accumulator in declaration order, and finishes with the handler.

use crate::action::definition::Action;
use crate::core::locals::Locals;
use crate::error::TandemError;
use std::sync::Arc;
use tracing::{event, instrument, span, Instrument, Level};

impl<In, Out, Err> Action<In, Out, Err>
where
  In: 'static + Send + Sync,
  Out: 'static + Send,
  Err: std::error::Error + From<TandemError> + Send + Sync + 'static,
{
  /// Executes the action against a single raw input.
  ///
  /// The invocation proceeds in three stages:
  ///  1. If a validator was registered, the raw input is parsed through it.
  ///     Rejection surfaces as [`TandemError::InvalidInput`] (converted into
  ///     `Err`) and nothing else runs. With no validator, the raw input is
  ///     used exactly as passed.
  ///  2. Middleware steps run strictly one at a time, in registration order,
  ///     each receiving the shared input and a snapshot of the locals so far.
  ///     A non-empty contribution is shallow-merged into the accumulator
  ///     (later keys overwrite earlier ones); no contribution, or an empty
  ///     one, leaves the accumulator untouched. A step error aborts the
  ///     invocation before any later step or the handler, unmodified.
  ///  3. The handler receives the input and the final accumulator; its result
  ///     is the result of the whole invocation.
  ///
  /// The accumulator is created fresh for every call, so concurrent
  /// invocations of the same (or a cloned) action never observe each other.
  /// Dropping the returned future stops the invocation at the next await
  /// point; tandem implements no timeouts or retries of its own.
  #[instrument(
        name = "Action::run",
        skip_all,
        fields(
            action_input_type = %std::any::type_name::<In>(),
            action_error_type = %std::any::type_name::<Err>(),
            num_middleware = self.inner.middleware.len(),
            has_validator = self.inner.validator.is_some(),
        ),
        err(Display)
    )]
  pub async fn run(&self, raw: In) -> Result<Out, Err> {
    event!(Level::DEBUG, "Action invocation starting.");

    let input = match &self.inner.validator {
      Some(validator) => match validator.parse(raw) {
        Ok(parsed) => parsed,
        Err(issues) => {
          event!(Level::ERROR, error = %issues, "Validator rejected the raw input.");
          return Err(Err::from(TandemError::InvalidInput { source: issues }));
        }
      },
      // No validator registered: the input flows through untouched, with no
      // checking of any kind.
      None => raw,
    };
    let input = Arc::new(input);

    // Fresh accumulator per invocation. Nothing is shared between calls.
    let mut locals = Locals::new();

    for (step_idx, step_fn) in self.inner.middleware.iter().enumerate() {
      let step_span = span!(Level::INFO, "middleware_step_execution", step_index = step_idx);
      step_span.in_scope(|| event!(Level::DEBUG, "Invoking middleware step."));

      // The step future is instrumented rather than run under an entered
      // guard; a guard held across `.await` would make this future !Send.
      let step_result = step_fn(input.clone(), locals.clone())
        .instrument(step_span.clone())
        .await;

      let _step_span_guard = step_span.enter();
      match step_result {
        Ok(Some(contribution)) => {
          // Present-but-empty counts as no contribution; merge only when the
          // contribution actually carries keys. Deliberate contract, see the
          // crate docs on the no-contribution boundary.
          if contribution.is_empty() {
            event!(Level::TRACE, "Step returned an empty contribution, accumulator unchanged.");
          } else {
            event!(
              Level::TRACE,
              contributed_keys = contribution.len(),
              "Merging step contribution into locals."
            );
            locals.merge(contribution);
          }
        }
        Ok(None) => {
          event!(Level::TRACE, "Step produced no contribution, accumulator unchanged.");
        }
        Err(e) => {
          // No recovery: skip all remaining steps and the handler.
          event!(Level::ERROR, error = %e, "Middleware step failed.");
          return Err(e);
        }
      }
    }

    event!(
      Level::DEBUG,
      locals_len = locals.len(),
      "Middleware chain completed, invoking handler."
    );

    match (self.inner.handler)(input, locals).await {
      Ok(out) => {
        event!(Level::DEBUG, "Action invocation completed successfully.");
        Ok(out)
      }
      Err(e) => {
        event!(Level::ERROR, error = %e, "Handler failed.");
        Err(e)
      }
    }
  }
}
