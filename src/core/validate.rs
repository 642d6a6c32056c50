// tandem/src/core/validate.rs

//! The `Validator` capability trait: the action runtime's only contact with
//! input validation.
//!
//! Tandem does not implement validation itself. Whatever checks or coerces a
//! raw value is injected by the caller through this trait; the runtime treats
//! it as an opaque parse capability and never inspects schema semantics.

use anyhow::Error as AnyhowError;

/// An external capability that checks and/or transforms a raw input value
/// into the value accepted by downstream stages.
///
/// `parse` either returns the (possibly transformed) input or rejects it with
/// a descriptive error. Rejections surface to the action's caller as
/// [`TandemError::InvalidInput`](crate::error::TandemError::InvalidInput) with
/// the validator's diagnostics as the unmodified error source.
///
/// Any `Fn(In) -> Result<In, anyhow::Error>` closure is a `Validator` via the
/// blanket impl below, so ad-hoc schemas need no wrapper type.
pub trait Validator<In>: Send + Sync {
  fn parse(&self, input: In) -> Result<In, AnyhowError>;
}

impl<In, F> Validator<In> for F
where
  F: Fn(In) -> Result<In, AnyhowError> + Send + Sync,
{
  fn parse(&self, input: In) -> Result<In, AnyhowError> {
    self(input)
  }
}
