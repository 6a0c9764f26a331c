#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result};
use instagram::{Client, Config, UserId};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let action = std::env::args()
        .nth(1)
        .context("usage: follow ACTION USER_ID")?;
    let user = UserId(
        std::env::args()
            .nth(2)
            .context("usage: follow ACTION USER_ID")?,
    );

    let mut client = Client::new(Config::from_env()?)?;
    client.set_access_token(std::env::var("INSTAGRAM_ACCESS_TOKEN")?);
    let response = client.modify_relationship(&action, user).await?;
    println!("{:#}", response);

    Ok(())
}
