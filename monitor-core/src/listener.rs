//! Listener-Setup: einmalig beim Start
//!
//! Erstellen, binden, lauschen. Kein Retry und kein Ausweich-Port: ein
//! Fehler wird geloggt und zurückgegeben, der Knoten läuft dann ohne Server.

use crate::fmt::{error, info};
use crate::traits::{ListenEndpoint, ListenerError};

/// Standard-Port des HTTP-Servers
pub const HTTP_PORT: u16 = 80;

/// Lauschender Endpunkt (lebt bis zum Ausschalten, wird nie geschlossen)
///
/// Jede darauf akzeptierte Verbindung wird mit `Responder::serve` bedient.
#[derive(Debug)]
pub struct Listening<E> {
    endpoint: E,
    port: u16,
}

impl<E> Listening<E> {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn endpoint_mut(&mut self) -> &mut E {
        &mut self.endpoint
    }
}

/// Startet den Server auf `port`
///
/// `endpoint` ist das Ergebnis der Erstellung, `None` bedeutet
/// Erstellung fehlgeschlagen.
pub fn start_server<E: ListenEndpoint>(
    endpoint: Option<E>,
    port: u16,
) -> Result<Listening<E>, ListenerError> {
    let Some(mut endpoint) = endpoint else {
        error!("HTTP: Fehler beim Erstellen des Endpunkts");
        return Err(ListenerError::CreateFailed);
    };

    if endpoint.bind(port).is_err() {
        error!("HTTP: Fehler beim Binden an Port {}", port);
        return Err(ListenerError::BindFailed);
    }

    if endpoint.listen().is_err() {
        error!("HTTP: Fehler beim Wechsel in den Listen-Modus (Port {})", port);
        return Err(ListenerError::ListenFailed);
    }

    info!("HTTP: Server läuft auf Port {}...", port);
    Ok(Listening { endpoint, port })
}
