// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use anyhow::anyhow;
use serde_json::Value;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tandem::{TandemError, Validator};
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)] // Clone, PartialEq, Eq for assertions
pub enum TestError {
  #[error("Tandem framework error: {0:?}")] // Stored as String for Eq comparison
  Tandem(String),

  #[error("Test step failed: {0}")]
  Step(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<TandemError> for TestError {
  fn from(te: TandemError) -> Self {
    // Simple conversion for testing; good enough for Eq assertions.
    TestError::Tandem(format!("{:?}", te))
  }
}

// --- Common Validators over JSON-shaped inputs ---

/// A schema requiring `{ name: string }`; accepts the value unchanged.
pub fn name_schema() -> impl Validator<Value> {
  |raw: Value| -> Result<Value, anyhow::Error> {
    match raw.get("name") {
      Some(v) if v.is_string() => Ok(raw),
      Some(v) => Err(anyhow!("invalid type at $.name: expected string, got {}", v)),
      None => Err(anyhow!("missing required field $.name")),
    }
  }
}

/// A coercing schema: requires `{ name: string }` and trims surrounding
/// whitespace off the name, demonstrating validate-and-transform.
pub fn trimming_name_schema() -> impl Validator<Value> {
  |mut raw: Value| -> Result<Value, anyhow::Error> {
    let trimmed = match raw.get("name") {
      Some(Value::String(s)) => s.trim().to_string(),
      _ => return Err(anyhow!("missing or non-string field $.name")),
    };
    raw["name"] = Value::String(trimmed);
    Ok(raw)
  }
}

/// A schema that rejects every input.
pub fn rejecting_schema() -> impl Validator<Value> {
  |_raw: Value| -> Result<Value, anyhow::Error> { Err(anyhow!("rejects everything")) }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counters for checking execution counts ---
pub static STEP_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static HANDLER_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  STEP_EXEC_COUNTER.store(0, Ordering::SeqCst);
  HANDLER_EXEC_COUNTER.store(0, Ordering::SeqCst);
}
