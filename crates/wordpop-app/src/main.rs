use atty::Stream;
use tracing_subscriber::EnvFilter;

mod cli;
mod controller;
mod demo;
mod events;
mod io;
mod settings;
mod state;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(atty::is(Stream::Stderr))
        .with_writer(std::io::stderr)
        .init();

    cli::run().await
}
