//! Look an order up against a running backend
//!
//! ```sh
//! KONVEKSI_API_URL=http://localhost:5000 cargo run --example order_lookup -- K99-20250217-001
//! ```

use std::sync::Arc;

use konveksi_client::views::LookupState;
use konveksi_client::{ClientConfig, NetworkHttpClient, OrderLookupView};
use shared::util::format_datetime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "konveksi_client=info".into()),
        )
        .init();

    let identifier = std::env::args().nth(1).unwrap_or_default();
    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Looking up order");

    let client = Arc::new(NetworkHttpClient::from_config(&config)?);
    let mut view = OrderLookupView::new(client);
    view.set_input(identifier);
    view.submit().await;

    if let Some(hint) = view.hint() {
        println!("{}", hint);
        return Ok(());
    }

    match view.state() {
        LookupState::Found(detail) => {
            let order = &detail.order;
            println!("{}  {}", order.order_code, order.status.label());
            println!("Pelanggan : {}", order.customer_name);
            println!("Dibuat    : {}", format_datetime(Some(&order.created_at)));
            if detail.progress.is_empty() {
                println!("Belum ada progress.");
            }
            for entry in &detail.progress {
                println!(
                    "- {}  {}  {}",
                    format_datetime(Some(&entry.created_at)),
                    entry.status.as_deref().unwrap_or("-"),
                    entry.description.as_deref().unwrap_or(""),
                );
            }
        }
        other => {
            if let Some(msg) = other.error_message() {
                println!("{}", msg);
            }
        }
    }
    Ok(())
}
