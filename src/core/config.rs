use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,

    // Import the snapshot file (if any) before serving requests
    pub load_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("./data"),
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3001)),
            load_on_start: false,
        }
    }
}
