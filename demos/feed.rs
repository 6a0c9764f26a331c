#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::Result;
use instagram::{Client, Config};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut client = Client::new(Config::from_env()?)?;
    client.set_access_token(std::env::var("INSTAGRAM_ACCESS_TOKEN")?);
    if client.api_secret().is_some() {
        client.set_signed_header(true)?;
    }

    let feed = client.get_user_feed(Some(10)).await?;
    println!("{:#}", feed);
    println!("rate limit remaining: {:?}", client.rate_limit());

    Ok(())
}
