// src/lib.rs

//! Tandem: an ASYNC, type-safe action builder for Rust.
//!
//! Tandem assembles a single-request "action" out of three composable stages,
//! declared through a fluent builder:
//!  - One optional input validator, injected by the caller and invoked once
//!    per request against the raw input.
//!  - An ordered chain of middleware steps, each contributing named values
//!    ("locals") visible to every later step and to the handler.
//!  - A terminal handler that receives the validated input and the fully
//!    accumulated locals and produces the invocation's result.
//!
//! ```rust,ignore
//! use tandem::{ActionBuilder, Locals, TandemError};
//!
//! let action = ActionBuilder::<Request>::new()
//!   .input(|raw: Request| check_request(raw))
//!   .step(|_input, _locals| async move {
//!     Ok::<_, TandemError>(Some(Locals::new().with("count", 1_i64)))
//!   })
//!   .handler(|input, locals| async move {
//!     Ok::<_, TandemError>(respond(&input, &locals))
//!   });
//!
//! let result = action.run(request).await?;
//! ```
//!
//! Execution is a straight-through pipeline: validation failure, a step
//! error, or a handler error each terminate the invocation immediately and
//! surface to the caller with no retry and no partial result. Concurrent
//! invocations of the same action are fully independent; every call starts
//! from an empty locals accumulator.

// Declare modules according to the planned structure
pub mod action;
pub mod core;
pub mod error;

// --- Re-exports for the Public API ---

// The fluent builder and the frozen executable it produces
pub use crate::action::builder::ActionBuilder;
pub use crate::action::definition::Action;

// Core vocabulary types users interact with in every step and handler
pub use crate::core::locals::{LocalValue, Locals};
pub use crate::core::step::{HandlerFn, Middleware, StepFuture};
pub use crate::core::validate::Validator;

pub use crate::error::{TandemError, TandemResult};
