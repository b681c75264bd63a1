use std::io;

use async_trait::async_trait;

pub mod tcp;

/// A pluggable strategy capable of dialing remote addresses over one
/// protocol/address family.
///
/// A dial cannot be cancelled once started. A caller that loses interest
/// drops the future and ignores whatever it would have produced.
#[async_trait]
pub trait Transport<A>: Send + Sync {
    async fn dial(&self, addr: &A) -> io::Result<Box<dyn Connection>>;
}

/// A duplex connection produced by a successful dial.
#[async_trait]
pub trait Connection: Send {
    /// Close the connection and wait for the acknowledgment. Transports
    /// without an explicit close handshake keep the no-op default.
    async fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
    /// Flush or discard anything still buffered so the remote peer is not
    /// left blocked on a connection nobody will read.
    async fn drain(&mut self) -> io::Result<()> {
        Ok(())
    }
}
