// tandem/demos/validated_action.rs

use anyhow::anyhow;
use serde_json::{json, Value};
use std::sync::Arc;
use tandem::{ActionBuilder, Locals, TandemError};
use tracing::{info, warn};

/// A hand-rolled schema over JSON values: requires `{ name: string }` and
/// trims the name. Any `Fn(In) -> Result<In, anyhow::Error>` is a validator.
fn greet_schema(mut raw: Value) -> Result<Value, anyhow::Error> {
  let trimmed = match raw.get("name") {
    Some(Value::String(s)) => s.trim().to_string(),
    Some(other) => return Err(anyhow!("invalid type at $.name: expected string, got {other}")),
    None => return Err(anyhow!("missing required field $.name")),
  };
  raw["name"] = Value::String(trimmed);
  Ok(raw)
}

#[tokio::main]
async fn main() -> Result<(), TandemError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Validated Action Example ---");

  let action = ActionBuilder::<Value>::new()
    .input(greet_schema)
    .step(|input: Arc<Value>, _locals| async move {
      let name_len = input["name"].as_str().map(str::len).unwrap_or(0);
      Ok::<_, TandemError>(Some(Locals::new().with("name_len", name_len)))
    })
    .handler(|input: Arc<Value>, locals: Locals| async move {
      let name = input["name"].as_str().unwrap_or_default();
      let name_len = locals.get::<usize>("name_len").copied().unwrap_or(0);
      Ok::<_, TandemError>(format!("Hello, {name} ({name_len} chars)"))
    });

  // Valid input: the validator also coerces (trims) before anything else runs.
  let out = action.run(json!({"name": "  world  "})).await?;
  info!("accepted: {out}");

  // Invalid input: rejected before any middleware or the handler runs, with
  // the validator's own diagnostics attached.
  match action.run(json!({"name": 123})).await {
    Ok(_) => unreachable!("schema rejects non-string names"),
    Err(e) => warn!("rejected as expected: {e}"),
  }

  Ok(())
}
