// tests/validation_tests.rs
mod common; // Reference the common module

use common::*;
use serde_json::{json, Value};
use serial_test::serial;
use std::sync::atomic::Ordering;
use tandem::{ActionBuilder, Locals, TandemError};

#[tokio::test]
#[serial]
async fn test_rejection_short_circuits_the_whole_pipeline() {
  setup_tracing();
  reset_counters();

  // Default error type so the InvalidInput variant can be matched directly.
  let action = ActionBuilder::<Value>::new()
    .input(name_schema())
    .step(|_input, _locals| async move {
      STEP_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      Ok::<_, TandemError>(Some(Locals::new().with("ran", true)))
    })
    .handler(|_input, _locals| async move {
      HANDLER_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      Ok::<_, TandemError>(())
    });

  // `name` is a number, the schema requires a string.
  let err = action.run(json!({"name": 123})).await.unwrap_err();

  match err {
    TandemError::InvalidInput { source } => {
      // The validator's own diagnostics survive unmodified.
      assert!(source.to_string().contains("$.name"), "diagnostics: {source}");
    }
    other => panic!("expected InvalidInput, got: {other:?}"),
  }
  assert_eq!(STEP_EXEC_COUNTER.load(Ordering::SeqCst), 0);
  assert_eq!(HANDLER_EXEC_COUNTER.load(Ordering::SeqCst), 0);
}

#[tokio::test]
#[serial]
async fn test_missing_field_is_rejected_with_its_own_diagnostics() {
  setup_tracing();
  reset_counters();

  let action = ActionBuilder::<Value>::new()
    .input(name_schema())
    .handler(|_input, _locals| async move {
      HANDLER_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      Ok::<_, TandemError>(())
    });

  let err = action.run(json!({"other": "value"})).await.unwrap_err();

  match err {
    TandemError::InvalidInput { source } => {
      assert!(source.to_string().contains("missing required field"));
    }
    other => panic!("expected InvalidInput, got: {other:?}"),
  }
  assert_eq!(HANDLER_EXEC_COUNTER.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_validator_may_transform_the_input() {
  setup_tracing();

  let action = ActionBuilder::<Value>::new()
    .input(trimming_name_schema())
    .handler(|input: std::sync::Arc<Value>, _locals| async move {
      Ok::<_, TandemError>(input["name"].as_str().unwrap_or_default().to_string())
    });

  // Downstream stages receive the coerced value, not the raw one.
  let out = action.run(json!({"name": "  padded  "})).await.unwrap();
  assert_eq!(out, "padded");
}

#[tokio::test]
async fn test_last_registered_validator_wins() {
  setup_tracing();

  // The first validator rejects everything; registering a second one must
  // replace it entirely.
  let action = ActionBuilder::<Value>::new()
    .input(rejecting_schema())
    .input(name_schema())
    .handler(|_input, _locals| async move { Ok::<_, TandemError>(()) });

  assert!(action.run(json!({"name": "a"})).await.is_ok());
}

#[tokio::test]
async fn test_validation_runs_once_per_invocation() {
  setup_tracing();
  use std::sync::atomic::AtomicUsize;
  use std::sync::Arc;

  let parse_count = Arc::new(AtomicUsize::new(0));
  let counting = {
    let parse_count = parse_count.clone();
    move |raw: Value| -> Result<Value, anyhow::Error> {
      parse_count.fetch_add(1, Ordering::SeqCst);
      Ok(raw)
    }
  };

  let action = ActionBuilder::<Value>::new()
    .input(counting)
    .step(|_input, _locals| async move { Ok::<_, TandemError>(None) })
    .step(|_input, _locals| async move { Ok::<_, TandemError>(None) })
    .handler(|_input, _locals| async move { Ok::<_, TandemError>(()) });

  action.run(json!({})).await.unwrap();
  assert_eq!(parse_count.load(Ordering::SeqCst), 1);

  action.run(json!({})).await.unwrap();
  assert_eq!(parse_count.load(Ordering::SeqCst), 2);
}
