//! Lifecycle example binary
//!
//! Follows a simulated request through `Ready → Executing → Success`, then a
//! failing one through `Executing → Error`, and finally resets the event.

use std::time::Duration;

use ajax_event::{AjaxEvent, BaseMessages};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stand-in for a network call.
async fn load_report(id: u32) -> anyhow::Result<String> {
    tokio::time::sleep(Duration::from_millis(50)).await;
    if id % 2 == 0 {
        Ok(format!("report #{id}: 12 rows"))
    } else {
        anyhow::bail!("report #{id} is locked")
    }
}

async fn run_request(event: &mut AjaxEvent<String, anyhow::Error>, id: u32) {
    tracing::info!(id, "Starting request");
    event.reset_to_executing();
    describe(event);

    match load_report(id).await {
        Ok(report) => event.resolve(Some(report), Some("ok")),
        Err(e) => event.reject(e, Some("try again later")),
    };
    describe(event);
}

fn describe(event: &AjaxEvent<String, anyhow::Error>) {
    println!("  status:  {}", event.status());
    if event.has_message() {
        println!("  message: {}", event.message());
    }
    if let Some(data) = event.data() {
        println!("  data:    {data}");
    }
    if let Some(error) = event.error() {
        println!("  error:   {error}");
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifecycle=debug,ajax_event=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== AjaxEvent Lifecycle Example ===\n");

    let config = BaseMessages::new()
        .with_success("Report loaded: ")
        .with_error("Report failed: ");
    let mut event = AjaxEvent::with_base_messages(config);

    println!("Initial state:");
    describe(&event);

    println!("\n>>> Request for report 4");
    run_request(&mut event, 4).await;

    println!("\n>>> Request for report 5");
    run_request(&mut event, 5).await;

    println!("\n>>> Reset");
    event.reset_to_ready();
    describe(&event);

    println!("\n=== Lifecycle Demonstration Complete ===");
}
