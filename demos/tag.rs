#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result};
use instagram::{Client, Config};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let tag = std::env::args().nth(1).context("usage: tag NAME")?;

    // public endpoints only need the client ID
    let client = Client::new(Config::from_env()?)?;
    println!("{:#}", client.get_tag(&tag).await?);
    println!("{:#}", client.get_tag_media(&tag, Some(5)).await?);

    Ok(())
}
