// Hardware Abstraction Layer (HAL) Module
//
// Verbindet die Traits aus monitor-core mit esp-hal (GPIO, ADC)
// und embassy-net (TCP).

pub mod button;
pub mod net;
pub mod temperature;

pub use button::GpioButton;
pub use net::{TcpConnection, TcpEndpoint};
pub use temperature::AdcTemperature;
