/*
[INPUT]:  CLI arguments, optional YAML configuration file, private key
[OUTPUT]: Sign-in view printed to the terminal
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or commands
*/

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use console::style;
use tracing::info;
use tracing_subscriber::EnvFilter;

use walletgate_adapter::{AuthClient, LocalWalletBridge, SignInFlow, SignInView, WalletBridge};
use walletgate_cli::{CliConfig, render_view};

#[derive(Parser, Debug)]
#[command(name = "walletgate", version, about = "Sign in to a walletgate server with a wallet key")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Overrides `server_url` from the config file
    #[arg(long = "server", value_name = "URL")]
    server_url: Option<String>,
    /// Hex private key acting as the wallet; without it no wallet is present
    #[arg(long = "private-key", env = "WALLETGATE_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show whether a usable wallet is present
    Status,
    /// Run the sign-in handshake
    Login,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };
    if let Some(server_url) = args.server_url {
        config.server_url = server_url;
    }
    info!(server_url = %config.server_url, "configuration loaded");

    let client = AuthClient::with_config(config.client_config(), &config.server_url)
        .context("create auth client")?;
    let bridge = args
        .private_key
        .as_deref()
        .map(LocalWalletBridge::new)
        .transpose()
        .context("load wallet key")?
        .map(|bridge| Arc::new(bridge) as Arc<dyn WalletBridge>);
    let flow = SignInFlow::with_config(client, bridge, config.flow_config());

    match args.command {
        Command::Status => {
            print_view(&flow.view());
            Ok(())
        }
        Command::Login => {
            if let view @ SignInView::InstallWallet { .. } = flow.view() {
                print_view(&view);
                bail!("no usable wallet");
            }

            let result = flow.login().await;
            print_view(&flow.view());
            result.map(|_| ()).context("sign-in")
        }
    }
}

fn print_view(view: &SignInView) {
    let mut lines = render_view(view).into_iter();
    if let Some(headline) = lines.next() {
        println!("{}", style(headline).bold());
    }
    for line in lines {
        println!("{}", style(line).dim());
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<CliConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
