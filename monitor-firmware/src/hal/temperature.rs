// Temperatursensor über ADC1 (One-Shot, 12 Bit)

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO2};
use monitor_core::TemperatureAdc;

/// Analoger Sensor an GPIO2
///
/// 11 dB Dämpfung deckt ca. 0..3,1 V ab. Die Umrechnung in °C passiert
/// in `TemperatureSampler`, hier gibt es nur den Raw-Code.
pub struct AdcTemperature<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    pin: AdcPin<GPIO2<'d>, ADC1<'d>>,
}

impl<'d> AdcTemperature<'d> {
    pub fn new(adc1: ADC1<'d>, gpio2: GPIO2<'d>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(gpio2, Attenuation::_11dB);
        let adc = Adc::new(adc1, config);
        Self { adc, pin }
    }
}

impl TemperatureAdc for AdcTemperature<'_> {
    fn read_raw(&mut self) -> u16 {
        // read_oneshot meldet WouldBlock bis die Wandlung fertig ist (wenige µs)
        loop {
            if let Ok(raw) = self.adc.read_oneshot(&mut self.pin) {
                return raw;
            }
        }
    }
}
