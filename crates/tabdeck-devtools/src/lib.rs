//! Debugging-protocol side channel for tab surfaces.
//!
//! A surface's remote-debugging endpoint is reached through a
//! [`DebugConnector`], which yields a [`DebugChannel`]. The
//! [`Interceptor`] drives one channel per surface: it enables network
//! events and writes the bodies of image responses to a capture directory.

pub mod capture;
pub mod cdp;
pub mod channel;
pub mod error;
pub mod filter;
pub mod interceptor;

pub use cdp::{CdpChannel, CdpConnector};
pub use channel::{AttachTarget, DebugChannel, DebugConnector, DebugEvent};
pub use error::DevToolsError;
pub use interceptor::{Interceptor, InterceptorSettings, Session};
