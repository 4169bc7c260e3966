// TCP-Adapter: embassy-net Sockets hinter den Traits aus monitor-core

use embassy_net::IpListenEndpoint;
use embassy_net::tcp::TcpSocket;
use monitor_core::{Connection, ConnectionError, ListenEndpoint, ListenerError};

// ============================================================================
// Verbindung
// ============================================================================

/// Akzeptierte TCP-Verbindung
///
/// Leiht sich den Socket nur für die Dauer von `Responder::serve`.
pub struct TcpConnection<'a, 's> {
    socket: &'a mut TcpSocket<'s>,
}

impl<'a, 's> TcpConnection<'a, 's> {
    pub fn new(socket: &'a mut TcpSocket<'s>) -> Self {
        Self { socket }
    }
}

impl Connection for TcpConnection<'_, '_> {
    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, ConnectionError> {
        self.socket
            .read(buf)
            .await
            .map_err(|_| ConnectionError::ReceiveFailed)
    }

    async fn write_all(&mut self, mut data: &[u8]) -> Result<(), ConnectionError> {
        while !data.is_empty() {
            match self.socket.write(data).await {
                // 0 Bytes: Gegenstelle hat den Sendekanal geschlossen
                Ok(0) | Err(_) => return Err(ConnectionError::WriteFailed),
                Ok(n) => data = &data[n..],
            }
        }
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), ConnectionError> {
        self.socket
            .flush()
            .await
            .map_err(|_| ConnectionError::FlushFailed)
    }

    fn close(&mut self) {
        self.socket.close();
    }
}

// ============================================================================
// Endpunkt
// ============================================================================

/// Lausch-Endpunkt für die Server-Tasks
///
/// embassy-net kennt keinen separaten Listen-Socket: jede Server-Task ruft
/// `TcpSocket::accept` mit diesem Endpunkt auf.
#[derive(Debug, Default)]
pub struct TcpEndpoint {
    bound: Option<IpListenEndpoint>,
    listening: bool,
}

impl TcpEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpunkt für `TcpSocket::accept`, erst nach erfolgreichem `listen`
    pub fn listen_endpoint(&self) -> Option<IpListenEndpoint> {
        if self.listening { self.bound } else { None }
    }
}

impl ListenEndpoint for TcpEndpoint {
    fn bind(&mut self, port: u16) -> Result<(), ListenerError> {
        // accept() lehnt Port 0 mit InvalidPort ab
        if port == 0 {
            return Err(ListenerError::BindFailed);
        }
        // Alle lokalen Adressen
        self.bound = Some(IpListenEndpoint { addr: None, port });
        Ok(())
    }

    fn listen(&mut self) -> Result<(), ListenerError> {
        if self.bound.is_none() {
            return Err(ListenerError::ListenFailed);
        }
        self.listening = true;
        Ok(())
    }
}
