use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    repair_advisor::cli::run().await
}
