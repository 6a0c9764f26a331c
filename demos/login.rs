#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result};
use instagram::{Client, Config, Scope};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut client = Client::new(Config::from_env()?)?;

    let code = match std::env::args().nth(1) {
        Some(code) => code,
        None => {
            println!(
                "open this URL, then run again with the code from the redirect:\n{}",
                client.login_url([Scope::Basic, Scope::PublicContent, Scope::Relationships])?
            );
            return Ok(());
        }
    };

    let token = client
        .authorize(&code)
        .await
        .context("failed to exchange code")?;
    println!("INSTAGRAM_ACCESS_TOKEN={}", token.access_token);
    println!("{:#?}", client.get_user("self").await?);

    Ok(())
}
