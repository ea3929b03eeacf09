//! VMH record store integration - transport, client, and record mapping

mod client;
mod mapping;
mod transport;

pub use client::VmhClient;
pub use transport::{HttpVmhTransport, VmhTransport};

#[cfg(test)]
pub use transport::MockVmhTransport;
