//! Chrome DevTools Protocol over WebSocket.

mod discovery;
mod transport;

pub use discovery::{select_target, CdpConnector, TargetInfo};
pub use transport::CdpChannel;
