// Taster-Eingang über esp-hal GPIO

use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};
use monitor_core::ButtonInput;

/// Taster an einem GPIO, aktiv LOW
///
/// Der interne Pull-up hält den Pin auf HIGH solange der Taster offen ist.
pub struct GpioButton<'d> {
    input: Input<'d>,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: impl InputPin + 'd) -> Self {
        let input = Input::new(pin, InputConfig::default().with_pull(Pull::Up));
        Self { input }
    }
}

impl ButtonInput for GpioButton<'_> {
    fn is_low(&mut self) -> bool {
        self.input.is_low()
    }
}
