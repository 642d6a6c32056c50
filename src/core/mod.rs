pub mod locals;
pub mod step;
pub mod validate;

// Re-export key types for easier access from other tandem modules (and lib.rs)
pub use locals::{LocalValue, Locals};
pub use step::{HandlerFn, Middleware, StepFuture};
pub use validate::Validator;
