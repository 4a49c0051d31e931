use anyhow::{Context, Result};

use crate::client::DataProvider;

pub async fn run(client: &dyn DataProvider, route: &str) -> Result<()> {
    let body = fetch_body(client, route).await?;
    print!("{}", body);
    Ok(())
}

async fn fetch_body(client: &dyn DataProvider, route: &str) -> Result<String> {
    client
        .get_data(route)
        .await
        .with_context(|| format!("Failed to fetch {}", route))
}
