// HTTP Server Task - beantwortet jede Anfrage mit der Status-Seite
use defmt::{Debug2Format, info, warn};
use embassy_net::tcp::TcpSocket;
use embassy_net::{IpListenEndpoint, Stack};
use embassy_time::Duration;
use monitor_core::Responder;

use crate::SharedStatus;
use crate::config::{
    HTTP_RECEIVE_BUFFER_SIZE, HTTP_SERVER_TASKS, HTTP_SOCKET_TIMEOUT_SECS, TCP_RX_BUFFER_SIZE,
    TCP_TX_BUFFER_SIZE,
};
use crate::hal::TcpConnection;

/// HTTP Server Task - läuft parallel zur Hauptschleife
///
/// Akzeptiert Verbindungen auf `endpoint` und übergibt sie an
/// `Responder::serve`. Jede Anfrage bekommt dieselbe Seite, es gibt kein
/// Routing und keinen Request-Parser.
///
/// **Task Pool:** `HTTP_SERVER_TASKS` Instanzen, jede bedient eine
/// Verbindung gleichzeitig.
///
/// # Parameter
/// - `task_id`: Eindeutige ID für diese Server-Instanz
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `endpoint`: Ergebnis von `start_server`
/// - `status`: Geteilter Status, wird pro Antwort als Snapshot gelesen
#[embassy_executor::task(pool_size = HTTP_SERVER_TASKS)]
pub async fn http_server_task(
    task_id: usize,
    stack: &'static Stack<'static>,
    endpoint: IpListenEndpoint,
    status: &'static SharedStatus,
) {
    info!("HTTP: Server-Task {} gestartet", task_id);

    // TCP-Buffers für Socket
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];
    // Ein Receive = ein Event für den Responder
    let mut receive_buffer = [0u8; HTTP_RECEIVE_BUFFER_SIZE];

    let mut responder = Responder::new(status);

    loop {
        let mut socket = TcpSocket::new(*stack, &mut rx_buffer, &mut tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(HTTP_SOCKET_TIMEOUT_SECS)));

        if let Err(e) = socket.accept(endpoint).await {
            warn!("HTTP[{}]: Accept fehlgeschlagen: {}", task_id, Debug2Format(&e));
            continue;
        }
        info!(
            "HTTP[{}]: Verbindung von {}",
            task_id,
            Debug2Format(&socket.remote_endpoint())
        );

        let mut connection = TcpConnection::new(&mut socket);
        responder.serve(&mut connection, &mut receive_buffer).await;

        // FIN rausschicken bevor der Socket freigegeben wird
        if let Err(e) = socket.flush().await {
            warn!("HTTP[{}]: Abschluss fehlgeschlagen: {}", task_id, Debug2Format(&e));
        }
    }
}
