mod deployment;
mod helpers;
mod settings;
mod vercel;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use deployment::find_source_root;
use helpers::tree_materializer::materialize_tree;
use settings::Settings;
use vercel::{DeploymentFiles, VercelClient};

/// Fetch source code from a Vercel deployment.
#[derive(Parser, Debug)]
#[command(name = "fetch", version)]
struct Cli {
    /// Deployment URL or id (`dpl_...`)
    deployment: String,

    /// Destination directory (defaults to the deployment reference)
    destination: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Credential check happens before any network call.
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let destination = cli
        .destination
        .unwrap_or_else(|| PathBuf::from(&cli.deployment));

    let client = VercelClient::new(&settings)?;
    let deployment_id = client.resolve_deployment_id(&cli.deployment).await?;

    let entries = client.list_files(&deployment_id).await?;
    let Some(source_root) = find_source_root(&entries) else {
        eprintln!("Error: Source directory 'src' not found in deployment.");
        std::process::exit(1);
    };

    let files = DeploymentFiles::new(&client, &deployment_id);
    materialize_tree(&files, source_root, &destination).await?;

    println!("Source code fetched and saved to {}", destination.display());

    Ok(())
}
