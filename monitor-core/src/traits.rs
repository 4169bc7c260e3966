//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für GPIO, ADC und Netzwerk
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** esp-hal `Input`, ADC1 One-Shot, embassy-net `TcpSocket`
//! - **Testing:** Mocks in `monitor-tests`

use core::future::Future;

/// Fehler-Typ für Operationen auf einer TCP-Verbindung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionError {
    ReceiveFailed,
    WriteFailed,
    FlushFailed,
}

/// Fehler-Typ für das Listener-Setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ListenerError {
    /// Endpunkt konnte nicht erstellt werden
    CreateFailed,
    /// Binden an den Port fehlgeschlagen
    BindFailed,
    /// Wechsel in den Listen-Modus fehlgeschlagen
    ListenFailed,
}

/// Trait für einen digitalen Eingang (nur lesen)
pub trait ButtonInput {
    /// `true` wenn der Pin elektrisch LOW ist
    fn is_low(&mut self) -> bool;
}

/// Trait für den analogen Temperatur-Kanal (nur lesen)
pub trait TemperatureAdc {
    /// Liest den aktuellen ADC-Rohwert (12 Bit)
    fn read_raw(&mut self) -> u16;
}

/// Trait für eine akzeptierte TCP-Verbindung
pub trait Connection {
    /// Empfängt Daten, `Ok(0)` bedeutet: Gegenstelle hat geschlossen
    fn receive(
        &mut self,
        buf: &mut [u8],
    ) -> impl Future<Output = Result<usize, ConnectionError>>;

    fn write_all(&mut self, data: &[u8]) -> impl Future<Output = Result<(), ConnectionError>>;

    /// Gepufferte Daten tatsächlich senden
    fn flush(&mut self) -> impl Future<Output = Result<(), ConnectionError>>;

    /// Lokalen Endpunkt schließen (kehrt sofort zurück)
    fn close(&mut self);
}

/// Trait für den serverseitigen Endpunkt
pub trait ListenEndpoint {
    /// An `port` auf allen lokalen Adressen binden
    fn bind(&mut self, port: u16) -> Result<(), ListenerError>;

    /// In den Listen-Modus wechseln
    fn listen(&mut self) -> Result<(), ListenerError>;
}

/// Trait für die Ereignis-Verarbeitung des Netzwerk-Stacks
///
/// Muss in jeder Iteration der Hauptschleife aufgerufen werden. Während
/// `pump()` dürfen Responder laufen.
pub trait EventPump {
    fn pump(&mut self) -> impl Future<Output = ()>;
}
