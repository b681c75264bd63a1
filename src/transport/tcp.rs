use std::io;
use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::transport::{Connection, Transport};

/// Dials plain `TCP` connections.
pub struct TcpTransport;

#[async_trait]
impl Transport<SocketAddr> for TcpTransport {
    async fn dial(&self, addr: &SocketAddr) -> io::Result<Box<dyn Connection>> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        Ok(Box::new(TcpConnection { stream }))
    }
}

pub struct TcpConnection {
    stream: TcpStream,
}

#[async_trait]
impl Connection for TcpConnection {
    async fn close(&mut self) -> io::Result<()> {
        self.stream.shutdown().await
    }
}
