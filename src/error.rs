// tandem/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TandemError {
  /// The registered validator rejected the raw input. The validator's own
  /// diagnostic payload (field paths, messages) travels unmodified as the
  /// source of this variant.
  #[error("Input validation failed. Source: {source}")]
  InvalidInput {
    #[source]
    source: AnyhowError,
  },

  #[error("Middleware step {step_index} failed. Source: {source}")]
  Middleware {
    step_index: usize,
    #[source]
    source: AnyhowError,
  },

  #[error("Handler failed. Source: {source}")]
  Handler {
    #[source]
    source: AnyhowError,
  },
}

// This is the key conversion tandem provides for external errors: a step or
// handler bubbling an anyhow::Error up through `?` lands in the Handler
// variant rather than getting double-wrapped.
impl From<AnyhowError> for TandemError {
  fn from(err: AnyhowError) -> Self {
    TandemError::Handler { source: err }
  }
}

pub type TandemResult<T, E = TandemError> = std::result::Result<T, E>;
