use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdindex::commands::generate;

#[derive(Parser)]
#[command(name = "mdindex")]
#[command(about = "Generate an index.json of Markdown articles sorted by creation date", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    generate::execute()
}
