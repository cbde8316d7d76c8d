//! solr-provision - create the Solr collections for the metadata graph store

use clap::Parser;

use solr_provision::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let code = cli.run().await;
    std::process::exit(code);
}
