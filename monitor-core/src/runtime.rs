//! Kooperative Hauptschleife
//!
//! Eine Iteration:
//! 1. Netzwerk-Events verarbeiten (`EventPump::pump`)
//! 2. Beide Taster abfragen
//! 3. Temperatur messen
//! 4. Kurz schlafen (`LOOP_INTERVAL_MS`)
//!
//! Responder laufen nur innerhalb von Schritt 1 bzw. während Schritt 4.
//! Sie sehen daher höchstens eine Iteration alten Zustand.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::board::SharedBoard;
use crate::fmt::info;
use crate::monitor::ButtonChannel;
use crate::sampler::TemperatureSampler;
use crate::traits::{ButtonInput, EventPump, TemperatureAdc};
use crate::types::{CHANNEL_COUNT, ChannelId};

/// Pause am Ende jeder Iteration (Millisekunden)
pub const LOOP_INTERVAL_MS: u32 = 100;

/// Abbruchbedingung der Hauptschleife
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunLimit {
    /// Produktion: läuft bis zum Ausschalten
    Forever,
    /// Test-Harness: genau so viele Iterationen
    Iterations(u32),
}

pub struct RuntimeLoop<'a, M: RawMutex, B, A> {
    board: &'a SharedBoard<M>,
    buttons: [ButtonChannel<B>; CHANNEL_COUNT],
    sampler: TemperatureSampler<A>,
    interval_ms: u32,
}

impl<'a, M, B, A> RuntimeLoop<'a, M, B, A>
where
    M: RawMutex,
    B: ButtonInput,
    A: TemperatureAdc,
{
    /// `buttons` in Reihenfolge Taster 1, Taster 2
    pub fn new(board: &'a SharedBoard<M>, buttons: [B; CHANNEL_COUNT], adc: A) -> Self {
        let mut index = 0;
        let buttons = buttons.map(|input| {
            let channel = ButtonChannel::new(ChannelId::ALL[index], input);
            index += 1;
            channel
        });

        Self {
            board,
            buttons,
            sampler: TemperatureSampler::new(adc),
            interval_ms: LOOP_INTERVAL_MS,
        }
    }

    pub fn board(&self) -> &'a SharedBoard<M> {
        self.board
    }

    /// Eine Iteration der Hauptschleife
    pub async fn step<P: EventPump, D: DelayNs>(&mut self, pump: &mut P, delay: &mut D) {
        pump.pump().await;

        for button in self.buttons.iter_mut() {
            if let Some(transition) = button.poll_channel(self.board) {
                info!("Taster {} {}", button.id().number(), transition.as_str());
            }
        }

        self.sampler.sample_temperature(self.board);

        delay.delay_ms(self.interval_ms).await;
    }

    /// Führt die Hauptschleife aus, gibt die Anzahl Iterationen zurück
    ///
    /// Mit `RunLimit::Forever` kehrt die Funktion nie zurück.
    pub async fn run<P: EventPump, D: DelayNs>(
        &mut self,
        pump: &mut P,
        delay: &mut D,
        limit: RunLimit,
    ) -> u32 {
        let mut iterations: u32 = 0;

        loop {
            if let RunLimit::Iterations(max) = limit {
                if iterations >= max {
                    return iterations;
                }
            }

            self.step(pump, delay).await;
            iterations = iterations.wrapping_add(1);
        }
    }
}
