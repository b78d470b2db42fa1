//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod address_search_port;
mod clipboard_port;
mod url_opener_port;

#[cfg(test)]
pub use address_search_port::MockAddressSearchPort;
pub use address_search_port::AddressSearchPort;
#[cfg(test)]
pub use clipboard_port::MockClipboardPort;
pub use clipboard_port::ClipboardPort;
#[cfg(test)]
pub use url_opener_port::MockUrlOpenerPort;
pub use url_opener_port::UrlOpenerPort;
