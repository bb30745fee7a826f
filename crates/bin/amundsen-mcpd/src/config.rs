use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use amundsen_core::client::DEFAULT_BASE_URL;
use amundsen_core::transport::DEFAULT_REQUEST_TIMEOUT;
use amundsen_mcp::server::DEFAULT_MCP_HTTP_ADDR;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = DEFAULT_REQUEST_TIMEOUT.as_secs();
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "amundsen-mcpd", version, about = "Amundsen metadata MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "AMUNDSEN_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[arg(
        long,
        env = "AMUNDSEN_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    request_timeout_secs: u64,

    #[arg(
        long = "stdio",
        env = "AMUNDSEN_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "AMUNDSEN_MCP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "AMUNDSEN_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(long, env = "AMUNDSEN_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct AmundsenConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl AmundsenConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for AmundsenConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_url = args.api_url.trim().trim_end_matches('/').to_string();
        if api_url.is_empty() {
            return Err(ConfigError::MissingSetting("AMUNDSEN_API_URL"));
        }
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidSetting {
                name: "AMUNDSEN_API_URL",
                value: args.api_url,
            });
        }

        if args.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "AMUNDSEN_REQUEST_TIMEOUT_SECS",
                value: args.request_timeout_secs.to_string(),
            });
        }

        if !args.enable_stdio && !args.mcp_serve {
            return Err(ConfigError::MissingSetting(
                "AMUNDSEN_ENABLE_STDIO or AMUNDSEN_MCP_SERVE",
            ));
        }

        let log_filter = if args.log_filter.trim().is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            args.log_filter
        };

        Ok(Self {
            api_url,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            mcp_http_addr: args.mcp_http_addr,
            log_filter,
        })
    }
}
