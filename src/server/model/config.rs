use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddr,
    /// location of the persisted document
    pub store_path: PathBuf,
}

impl ServerConfig {
    pub fn new(addr: SocketAddr, store_path: PathBuf) -> Self {
        Self {
            addr,
            store_path,
        }
    }
}
