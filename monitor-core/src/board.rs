//! Gemeinsamer Zustand: Taster-Zustände und Temperatur
//!
//! Die Hauptschleife schreibt, jeder Responder liest. Beide bekommen eine
//! Referenz auf dasselbe [`SharedBoard`].
//!
//! Auf einem Executor (kooperativ, ein Kern) reicht `NoopRawMutex`: ein
//! Responder läuft nur während die Hauptschleife in `pump()` oder im Sleep
//! wartet. Mit echten Threads oder Interrupts `CriticalSectionRawMutex`
//! verwenden. Der Lock wird nie über ein `.await` gehalten.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::types::{
    CHANNEL_COUNT, ChannelId, ChannelState, StatusSnapshot, StatusText, TemperatureReading,
    Transition,
};

/// Alle Status-Felder des Knotens
#[derive(Clone, Debug)]
pub struct StatusBoard {
    channels: [ChannelState; CHANNEL_COUNT],
    temperature: TemperatureReading,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self {
            channels: ChannelId::ALL.map(ChannelState::new),
            temperature: TemperatureReading::new(),
        }
    }

    pub fn channel(&self, id: ChannelId) -> &ChannelState {
        &self.channels[id.index()]
    }

    pub fn temperature(&self) -> &TemperatureReading {
        &self.temperature
    }

    /// Übernimmt einen gelesenen logischen Tasterzustand
    pub(crate) fn observe_channel(&mut self, id: ChannelId, active: bool) -> Option<Transition> {
        self.channels[id.index()].observe(id, active)
    }

    pub(crate) fn set_temperature(&mut self, celsius: f32) {
        self.temperature.set_celsius(celsius);
    }

    /// Kopiert die drei Texte für den Renderer
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            buttons: self
                .channels
                .each_ref()
                .map(|channel| copy_text(channel.status_text())),
            temperature: copy_text(self.temperature.status_text()),
        }
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_text(text: &str) -> StatusText {
    let mut copy = StatusText::new();
    // Quelle hat dieselbe Kapazität, passt immer
    let _ = copy.push_str(text);
    copy
}

/// Explizit besessener Container für den gemeinsamen Zustand
pub struct SharedBoard<M: RawMutex> {
    inner: Mutex<M, RefCell<StatusBoard>>,
}

impl<M: RawMutex> SharedBoard<M> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(StatusBoard::new())),
        }
    }

    /// Atomare Kopie aller Status-Texte (copy-on-read)
    pub fn snapshot(&self) -> StatusSnapshot {
        self.inner.lock(|board| board.borrow().snapshot())
    }

    /// Exklusiver Schreibzugriff für die Dauer der Closure
    pub fn update<R>(&self, f: impl FnOnce(&mut StatusBoard) -> R) -> R {
        self.inner.lock(|board| f(&mut board.borrow_mut()))
    }

    /// Lesezugriff ohne Kopie
    pub fn read<R>(&self, f: impl FnOnce(&StatusBoard) -> R) -> R {
        self.inner.lock(|board| f(&board.borrow()))
    }
}

impl<M: RawMutex> Default for SharedBoard<M> {
    fn default() -> Self {
        Self::new()
    }
}
