//! Taster-Überwachung
//!
//! Flankenerkennung durch Vergleich mit dem letzten logischen Zustand.
//! Kein Entprellen: Prellen erzeugt mehrere Flanken (bekannte Einschränkung).

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::board::SharedBoard;
use crate::traits::ButtonInput;
use crate::types::{ChannelId, Transition};

/// Ein digitaler Eingang mit seiner Kennung
pub struct ButtonChannel<B> {
    id: ChannelId,
    input: B,
}

impl<B: ButtonInput> ButtonChannel<B> {
    pub fn new(id: ChannelId, input: B) -> Self {
        Self { id, input }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Liest den Pin und aktualisiert bei einem Wechsel Zustand und Text
    ///
    /// Active-low: LOW bedeutet gedrückt. Der Rückgabewert dient nur der
    /// Diagnose.
    pub fn poll_channel<M: RawMutex>(&mut self, board: &SharedBoard<M>) -> Option<Transition> {
        let active = self.input.is_low();
        board.update(|b| b.observe_channel(self.id, active))
    }
}
