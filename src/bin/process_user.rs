//! Hook testing fixture - typed record processing demo.
//!
//! Drives the validation-and-timestamp service with the demo record and
//! reports the outcome. A validation failure terminates the run with a
//! non-zero exit code.

use serde_json::json;

use hook_fixtures::logging;
use hook_fixtures::services::process_user;

fn main() {
    logging::init();

    tracing::info!("Testing activity logger 1");
    tracing::info!("Testing activity logger 2");
    tracing::info!("Testing activity logger 3");

    let user = json!({
        "name": "John Doe",
        "age": 30,
        "email": "john@example.com",
    });

    match process_user(&user) {
        Ok(result) => {
            tracing::info!(result = %result, "User processed");
            tracing::info!("Processing complete");
        }
        Err(e) => {
            tracing::error!("Processing failed: {}", e);
            std::process::exit(1);
        }
    }
}
