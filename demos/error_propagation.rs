// tandem/demos/error_propagation.rs

use std::sync::Arc;
use tandem::{ActionBuilder, Locals, TandemError};
use tracing::{error, info};

// A custom application error. The only requirement tandem imposes is
// From<TandemError>, so validation failures can surface through it.
#[derive(Debug, thiserror::Error)]
enum AppError {
  #[error("Tandem: {0}")]
  Tandem(#[from] TandemError),

  #[error("quota exceeded for user {user}")]
  QuotaExceeded { user: String },
}

#[derive(Debug)]
struct Request {
  user: String,
  over_quota: bool,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Error Propagation Example ---");

  let action = ActionBuilder::<Request, AppError>::new()
    .step(|input: Arc<Request>, _locals| async move {
      // A failing step aborts the invocation: no later step, no handler,
      // and the error reaches the caller unmodified.
      if input.over_quota {
        return Err(AppError::QuotaExceeded {
          user: input.user.clone(),
        });
      }
      Ok(Some(Locals::new().with("authorized", true)))
    })
    .step(|_input, _locals| async move {
      info!("second step only runs when the first one succeeds");
      Ok::<_, AppError>(None)
    })
    .handler(|input: Arc<Request>, locals: Locals| async move {
      let authorized = locals.get::<bool>("authorized").copied().unwrap_or(false);
      Ok::<_, AppError>(format!("user={} authorized={authorized}", input.user))
    });

  match action
    .run(Request {
      user: "alice".to_string(),
      over_quota: false,
    })
    .await
  {
    Ok(out) => info!("ok: {out}"),
    Err(e) => error!("unexpected: {e}"),
  }

  match action
    .run(Request {
      user: "bob".to_string(),
      over_quota: true,
    })
    .await
  {
    Ok(out) => info!("unexpected: {out}"),
    Err(e) => error!("failed as expected: {e}"),
  }
}
