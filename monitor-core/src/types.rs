//! Core Types für den Monitoring-Knoten
//!
//! Datenstrukturen ohne Hardware-Dependencies

use heapless::String;

use crate::logic::write_truncated;

/// Maximale Länge eines Status-Textes in Bytes
pub const STATUS_TEXT_CAPACITY: usize = 50;

/// Anzahl der überwachten Taster
pub const CHANNEL_COUNT: usize = 2;

/// Begrenzter Status-Text (Überlauf wird abgeschnitten, nie ein Fehler)
pub type StatusText = String<STATUS_TEXT_CAPACITY>;

/// Kennung eines digitalen Eingangs
///
/// Intern 0-basiert (Index ins Board), in Texten 1-basiert ("Taster 1").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub u8);

impl ChannelId {
    pub const BUTTON_1: ChannelId = ChannelId(0);
    pub const BUTTON_2: ChannelId = ChannelId(1);

    /// Alle Kanäle in Abfrage-Reihenfolge
    pub const ALL: [ChannelId; CHANNEL_COUNT] = [Self::BUTTON_1, Self::BUTTON_2];

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Nummer für die Anzeige (1-basiert)
    pub const fn number(self) -> u8 {
        self.0 + 1
    }
}

/// Flanke eines Tasters (logischer Zustand hat gewechselt)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// inaktiv → aktiv (Pin auf LOW gezogen)
    Pressed,
    /// aktiv → inaktiv
    Released,
}

impl Transition {
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Pressed
        } else {
            Self::Released
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Pressed => "gedrückt",
            Transition::Released => "losgelassen",
        }
    }
}

/// Zustand eines Tasters
///
/// `status_text` beschreibt immer die letzte Flanke von `last_active` und
/// ändert sich zwischen zwei Flanken nicht.
#[derive(Clone, Debug)]
pub struct ChannelState {
    last_active: bool,
    status_text: StatusText,
}

impl ChannelState {
    /// Startzustand: inaktiv, Text "Kein Ereignis an Taster N"
    pub fn new(id: ChannelId) -> Self {
        let mut status_text = StatusText::new();
        write_truncated(
            &mut status_text,
            format_args!("Kein Ereignis an Taster {}", id.number()),
        );
        Self {
            last_active: false,
            status_text,
        }
    }

    pub fn is_active(&self) -> bool {
        self.last_active
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Vergleicht den gelesenen logischen Zustand mit dem letzten.
    ///
    /// Nur bei einem Wechsel werden Zustand und Text aktualisiert.
    pub(crate) fn observe(&mut self, id: ChannelId, active: bool) -> Option<Transition> {
        if active == self.last_active {
            return None;
        }

        self.last_active = active;
        let transition = Transition::from_active(active);
        self.status_text.clear();
        write_truncated(
            &mut self.status_text,
            format_args!("Taster {} wurde {}!", id.number(), transition.as_str()),
        );
        Some(transition)
    }
}

/// Zuletzt formatierte Temperatur
#[derive(Clone, Debug)]
pub struct TemperatureReading {
    status_text: StatusText,
}

impl TemperatureReading {
    pub fn new() -> Self {
        let mut status_text = StatusText::new();
        write_truncated(&mut status_text, format_args!("Temperatur nicht gelesen"));
        Self { status_text }
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Überschreibt den Text bedingungslos
    pub(crate) fn set_celsius(&mut self, celsius: f32) {
        self.status_text.clear();
        write_truncated(&mut self.status_text, format_args!("{:.2} °C", celsius));
    }
}

impl Default for TemperatureReading {
    fn default() -> Self {
        Self::new()
    }
}

/// Kopie aller drei Status-Texte (copy-on-read für den Renderer)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub buttons: [StatusText; CHANNEL_COUNT],
    pub temperature: StatusText,
}

/// Eingehendes Event auf einer akzeptierten Verbindung
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InboundEvent<'a> {
    /// Empfangene Nutzdaten (Inhalt wird nicht ausgewertet)
    Data(&'a [u8]),
    /// Gegenstelle hat die Verbindung geschlossen
    Closed,
}

impl<'a> InboundEvent<'a> {
    /// Bildet ein Empfangs-Ergebnis auf ein Event ab.
    ///
    /// 0 Bytes bedeutet bei TCP End-of-Stream und zählt daher als `Closed`,
    /// genau wie ein Empfangsfehler.
    pub fn from_receive<E>(result: Result<usize, E>, buf: &'a [u8]) -> Self {
        match result {
            Ok(0) | Err(_) => Self::Closed,
            Ok(n) => Self::Data(&buf[..n.min(buf.len())]),
        }
    }

    /// `Closed` und leere Nutzdaten signalisieren beide das Ende der Verbindung
    pub fn signals_close(&self) -> bool {
        match self {
            InboundEvent::Closed => true,
            InboundEvent::Data(payload) => payload.is_empty(),
        }
    }
}

/// Was der Responder mit einem Event gemacht hat
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Disposition {
    /// Seite gerendert und gesendet (Schreibfehler werden nur geloggt)
    Responded,
    /// Verbindung lokal geschlossen, nichts gesendet
    Closed,
}
