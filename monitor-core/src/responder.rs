//! Responder für akzeptierte Verbindungen
//!
//! Jedes Event mit Nutzdaten bekommt dieselbe Seite, egal was angefragt
//! wurde (Methode, Pfad und Header werden nicht ausgewertet). Ein
//! Close-Signal schließt die Verbindung ohne zu rendern.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::board::SharedBoard;
use crate::fmt::{info, warn};
use crate::logic::{Page, render_page};
use crate::traits::Connection;
use crate::types::{Disposition, InboundEvent};

/// Rendert den aktuellen Zustand und schreibt ihn auf die Verbindung
///
/// Der Seitenpuffer wird bei jedem Event wiederverwendet und ist nur
/// innerhalb von render + send gültig.
pub struct Responder<'a, M: RawMutex> {
    board: &'a SharedBoard<M>,
    page: Page,
}

impl<'a, M: RawMutex> Responder<'a, M> {
    pub fn new(board: &'a SharedBoard<M>) -> Self {
        Self {
            board,
            page: Page::new(),
        }
    }

    /// Verarbeitet ein einzelnes Event
    ///
    /// Schreib- und Flush-Fehler werden geloggt und nicht weitergegeben,
    /// die Verbindung räumt sich beim nächsten Close-Event selbst auf.
    pub async fn handle<C: Connection>(
        &mut self,
        connection: &mut C,
        event: InboundEvent<'_>,
    ) -> Disposition {
        if event.signals_close() {
            connection.close();
            return Disposition::Closed;
        }

        let snapshot = self.board.snapshot();
        if render_page(&snapshot, &mut self.page) {
            warn!("HTTP: Seite abgeschnitten ({} Bytes)", self.page.len());
        }

        if let Err(e) = connection.write_all(self.page.as_bytes()).await {
            warn!("HTTP: Schreiben fehlgeschlagen: {:?}", e);
            return Disposition::Responded;
        }
        if let Err(e) = connection.flush().await {
            warn!("HTTP: Flush fehlgeschlagen: {:?}", e);
        }

        Disposition::Responded
    }

    /// Receive-Handler einer akzeptierten Verbindung
    ///
    /// Ruft `handle` für jedes Empfangs-Event auf bis die Verbindung
    /// geschlossen ist. Gibt die Anzahl gesendeter Antworten zurück.
    pub async fn serve<C: Connection>(&mut self, connection: &mut C, rx_buf: &mut [u8]) -> u32 {
        let mut responses = 0;

        loop {
            let result = connection.receive(rx_buf).await;
            if let Err(e) = result {
                warn!("HTTP: Empfangen fehlgeschlagen: {:?}", e);
            }

            let event = InboundEvent::from_receive(result, rx_buf);
            match self.handle(connection, event).await {
                Disposition::Responded => responses += 1,
                Disposition::Closed => break,
            }
        }

        info!("HTTP: Verbindung geschlossen nach {} Antwort(en)", responses);
        responses
    }

    /// Inhalt des letzten Renderings
    pub fn last_page(&self) -> &str {
        &self.page
    }
}
