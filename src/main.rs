mod commands;
mod extract;
mod naming;
mod output;
mod registry;

use clap::Parser;
use commands::FetchCommand;

/// Default public registry; override for private registries or tests
const DEFAULT_REGISTRY_URL: &str = "https://registry.terraform.io";

#[derive(Parser)]
#[command(name = "tfid")]
#[command(about = "Discover import ID formats for existing Terraform resources", long_about = None)]
#[command(version)]
struct Cli {
    /// Provider name (e.g. "google")
    provider: String,

    /// Provider version, matched exactly (e.g. "3.67.0")
    #[arg(id = "provider_version", value_name = "VERSION")]
    version: String,

    /// Terraform resource name (e.g. "google_storage_bucket")
    resource: String,

    /// Registry base URL
    #[arg(long, env = "TFID_REGISTRY_URL", default_value = DEFAULT_REGISTRY_URL)]
    registry: String,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = FetchCommand::execute(
        &cli.provider,
        &cli.version,
        &cli.resource,
        &cli.registry,
        cli.insecure,
    ) {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
