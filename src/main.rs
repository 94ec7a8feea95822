/*
 * Responsibility
 * - start the tokio runtime
 * - call app::run() (no logic lives here)
 */
use anyhow::Result;

use smart_market_api::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
