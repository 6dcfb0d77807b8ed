use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use bootstrap_kubeconfig::{generate_kubeconfig, BootstrapTokenString};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Print a kubeconfig that authenticates with a bootstrap token.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// API server address written into the cluster entry
    #[clap(long)]
    join_url: String,
    /// File holding the cluster CA certificate
    #[clap(long)]
    ca_cert: PathBuf,
    /// User the token authenticates as
    #[clap(long)]
    user: String,
    /// Bootstrap token in `<id>.<secret>` form
    #[clap(long)]
    token: BootstrapTokenString,
    /// Write to this file instead of stdout; it must not exist yet
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn write_new(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .context("Opening kube config")?;

    Ok(file.write_all(data)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let ca_cert = fs::read(&args.ca_cert)
        .with_context(|| format!("Reading CA certificate {}", args.ca_cert.display()))?;

    let kubeconfig = generate_kubeconfig(&args.join_url, &ca_cert, &args.user, &args.token)
        .context("Generating kube config")?;

    match &args.output {
        Some(path) => {
            write_new(path, &kubeconfig)?;
            info!(path = %path.display(), "wrote kubeconfig");
        }
        None => io::stdout().write_all(&kubeconfig)?,
    }

    Ok(())
}
