use clap::Parser;
use color_eyre::Result;
use dakasa::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dakasa::run(Cli::parse()).await
}
