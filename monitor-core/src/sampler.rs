//! Temperatur-Messung über den ADC

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::board::SharedBoard;
use crate::logic::TemperatureCalibration;
use crate::traits::TemperatureAdc;

/// Analoger Temperatur-Kanal mit Kalibrierung
pub struct TemperatureSampler<A> {
    adc: A,
    calibration: TemperatureCalibration,
}

impl<A: TemperatureAdc> TemperatureSampler<A> {
    pub fn new(adc: A) -> Self {
        Self::with_calibration(adc, TemperatureCalibration::DEFAULT)
    }

    pub fn with_calibration(adc: A, calibration: TemperatureCalibration) -> Self {
        Self { adc, calibration }
    }

    pub fn calibration(&self) -> TemperatureCalibration {
        self.calibration
    }

    /// Liest den ADC, rechnet in °C um und überschreibt den Text
    ///
    /// Überschreibt bei jedem Aufruf, auch wenn sich nichts geändert hat.
    pub fn sample_temperature<M: RawMutex>(&mut self, board: &SharedBoard<M>) -> f32 {
        let raw = self.adc.read_raw();
        let celsius = self.calibration.raw_to_celsius(raw);
        board.update(|b| b.set_temperature(celsius));
        celsius
    }
}
