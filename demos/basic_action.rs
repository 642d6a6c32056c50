// tandem/demos/basic_action.rs

use std::sync::Arc;
use tandem::{ActionBuilder, Locals, TandemError};
use tracing::info;

// 1. Define the input type for the action
#[derive(Debug)]
struct GreetRequest {
  name: String,
}

// 2. For simplicity, this example uses TandemError directly for its stages.
//    In real applications, you'd typically define a custom error:
//    #[derive(Debug, thiserror::Error)]
//    enum MyError { #[error("Tandem: {0}")] Tandem(#[from] TandemError), /* ... */ }

#[tokio::main]
async fn main() -> Result<(), TandemError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Action Example ---");

  // 3. Assemble the action: two middleware steps, then a handler.
  let action = ActionBuilder::<GreetRequest>::new()
    .step(|input: Arc<GreetRequest>, _locals| async move {
      info!("step 1: resolving salutation for '{}'", input.name);
      Ok::<_, TandemError>(Some(Locals::new().with("salutation", "Hello".to_string())))
    })
    .step(|_input, locals: Locals| async move {
      // Later steps see everything contributed so far.
      let salutation = locals.get::<String>("salutation").cloned().unwrap_or_default();
      info!("step 2: saw salutation '{salutation}', contributing punctuation");
      Ok::<_, TandemError>(Some(Locals::new().with("punctuation", '!')))
    })
    .handler(|input: Arc<GreetRequest>, locals: Locals| async move {
      let salutation = locals.get::<String>("salutation").cloned().unwrap_or_default();
      let punctuation = locals.get::<char>("punctuation").copied().unwrap_or('.');
      Ok::<_, TandemError>(format!("{salutation}, {}{punctuation}", input.name))
    });

  // 4. Invoke it per-request; the action is reusable and stateless.
  let greeting = action
    .run(GreetRequest {
      name: "world".to_string(),
    })
    .await?;
  info!("handler produced: {greeting}");

  let greeting = action
    .run(GreetRequest {
      name: "tandem".to_string(),
    })
    .await?;
  info!("handler produced: {greeting}");

  Ok(())
}
