//! Pixelix device client

mod config;
mod constants;
mod device;
mod files;
mod logger;
mod output;

use clap::{Parser, Subcommand};
use common::api::ROOT_DIR;
use config::CliConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixelix")]
#[command(about = "Command line client for the Pixelix REST API")]
struct Cli {
    /// Device URL (default: PIXELIX_HOST env var, then http://192.168.4.1)
    #[arg(long, global = true)]
    host: Option<String>,
    /// Request timeout in seconds (default: PIXELIX_TIMEOUT env var, then 10)
    #[arg(long, global = true)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a directory on the device
    Ls {
        /// Directory to list
        #[arg(default_value = ROOT_DIR)]
        dir: String,
        /// Only list this page (all pages are listed when omitted)
        #[arg(short, long)]
        page: Option<u32>,
    },
    /// Print a file from the device
    Cat {
        /// Path on the device
        path: String,
        /// Save to this local file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Upload a local text file
    Put {
        /// Local file
        local: PathBuf,
        /// Path on the device (default: "/" + local file name)
        #[arg(short, long)]
        remote: Option<String>,
    },
    /// Remove a file from the device
    Rm {
        /// Path on the device
        path: String,
    },
    /// Show the plugin instances in the display slots
    Slots,
    /// Show the sensors
    Sensors,
    /// List the setting keys
    Settings,
    /// Show one setting
    Get {
        key: String,
    },
    /// Change one setting
    Set {
        key: String,
        /// true/false, a number, or text
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let config = CliConfig::resolve(cli.host, cli.timeout)?;
    log::debug!("Using device at {}", config.host);
    let client = config.build_client()?;

    match cli.command {
        Commands::Ls { dir, page } => files::list(&client, &dir, page).await?,
        Commands::Cat { path, output } => files::cat(&client, &path, output.as_deref()).await?,
        Commands::Put { local, remote } => files::put(&client, &local, remote.as_deref()).await?,
        Commands::Rm { path } => files::remove(&client, &path).await?,
        Commands::Slots => device::slots(&client).await?,
        Commands::Sensors => device::sensors(&client).await?,
        Commands::Settings => device::setting_keys(&client).await?,
        Commands::Get { key } => device::get_setting(&client, &key).await?,
        Commands::Set { key, value } => device::set_setting(&client, &key, &value).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_client::SettingValue;

    #[test]
    fn test_ls_defaults_to_root_and_all_pages() {
        let cli = Cli::try_parse_from(["pixelix", "ls"]).unwrap();
        match cli.command {
            Commands::Ls { dir, page } => {
                assert_eq!(dir, "/");
                assert_eq!(page, None);
            }
            _ => panic!("expected ls"),
        }
    }

    #[test]
    fn test_global_host_after_subcommand() {
        let cli =
            Cli::try_parse_from(["pixelix", "set", "brightness", "80", "--host", "http://10.0.0.2"])
                .unwrap();
        assert_eq!(cli.host.as_deref(), Some("http://10.0.0.2"));
        assert!(matches!(cli.command, Commands::Set { ref key, ref value } if key == "brightness" && value == "80"));
    }

    #[test]
    fn test_set_negative_value() {
        let cli = Cli::try_parse_from(["pixelix", "set", "timezone_offset", "-5"]).unwrap();
        match cli.command {
            Commands::Set { key, value } => {
                assert_eq!(key, "timezone_offset");
                assert_eq!(value, "-5");
                assert_eq!(value.parse::<SettingValue>(), Ok(SettingValue::Int(-5)));
            }
            _ => panic!("expected set"),
        }

        let cli = Cli::try_parse_from(["pixelix", "set", "offset", "-2.5"]).unwrap();
        assert!(matches!(cli.command, Commands::Set { ref value, .. } if value == "-2.5"));
    }

    #[test]
    fn test_set_requires_value() {
        assert!(Cli::try_parse_from(["pixelix", "set", "brightness"]).is_err());
    }
}
