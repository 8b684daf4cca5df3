use crate::constants::{
    DEFAULT_HOST, DEFAULT_PAGE_SIZE, DEFAULT_PORT, HOST_ENV, PAGE_SIZE_ENV, PORT_ENV,
};
use clap::{Arg, ArgMatches, Command};
use tracing::error;

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Entries per directory listing page
    pub page_size: usize,
}

impl SimConfig {
    pub fn load() -> Result<Self, std::io::Error> {
        Self::from_matches(&command().get_matches(), |name| std::env::var(name).ok())
    }

    /// Priority: command-line args > environment variables > defaults
    fn from_matches(
        matches: &ArgMatches,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, std::io::Error> {
        let host = lookup(matches, "host", &env, HOST_ENV, DEFAULT_HOST);

        let port_str = lookup(matches, "port", &env, PORT_ENV, DEFAULT_PORT);
        let port = port_str
            .parse()
            .map_err(|_| invalid_input(format!("Invalid port number: {}", port_str)))?;

        let page_size_str = lookup(matches, "page-size", &env, PAGE_SIZE_ENV, DEFAULT_PAGE_SIZE);
        let page_size = match page_size_str.parse::<usize>() {
            Ok(size) if size > 0 => size,
            _ => {
                return Err(invalid_input(format!(
                    "Invalid page size: {}. Must be a positive number",
                    page_size_str
                )))
            }
        };

        Ok(SimConfig {
            host,
            port,
            page_size,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn command() -> Command {
    Command::new("device-sim")
        .about("Simulator of the Pixelix device REST API")
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Bind host (default: 0.0.0.0, or SIM_HOST env var)"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .help("Bind port (default: 8080, or SIM_PORT env var)"),
        )
        .arg(
            Arg::new("page-size")
                .long("page-size")
                .value_name("N")
                .help("Entries per directory listing page (default: 5, or SIM_PAGE_SIZE env var)"),
        )
}

fn lookup(
    matches: &ArgMatches,
    arg: &str,
    env: &impl Fn(&str) -> Option<String>,
    env_name: &str,
    default: &str,
) -> String {
    matches
        .get_one::<String>(arg)
        .cloned()
        .or_else(|| env(env_name))
        .unwrap_or_else(|| default.to_string())
}

fn invalid_input(msg: String) -> std::io::Error {
    error!("{}", msg);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, msg)
}
