//! Async Rust client for the tagview dashboard backend.
//!
//! Thin HTTP boundary: fetches edge catalogs, current tag values, raw
//! history payloads, and the customization store. All interpretation of
//! what comes back -- classification, widget resolution, history shape
//! sniffing -- lives in `tagview-core`; this crate only moves JSON.
//!
//! Fetches are independently retryable ([`ApiError::is_transient`]) and
//! the data they return is treated as an eventually-consistent snapshot:
//! consumers re-derive everything from scratch on each poll.

pub mod client;
pub mod error;
pub mod transport;

pub use client::DashboardClient;
pub use error::ApiError;
pub use transport::{TlsMode, TransportConfig};
