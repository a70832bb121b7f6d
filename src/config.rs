use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, read from flags with environment fallbacks.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Order management REST service", long_about = None)]
pub struct Config {
    /// Address the HTTP listener binds to
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port the HTTP listener binds to
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Duration of the simulated order and payment processing, in milliseconds
    #[arg(long, env = "PROCESSING_DELAY_MS", default_value_t = 3000)]
    pub processing_delay_ms: u64,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}
