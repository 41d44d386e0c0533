use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cratemap_lib::main().await
}
