//! Monitor Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Traits für Taster, ADC und TCP-Verbindungen sowie die
//! komplette Logik des Monitoring-Knotens:
//!
//! - Taster-Überwachung (Flankenerkennung, active-low)
//! - Temperatur-Messung (lineare Kalibrierung)
//! - HTML-Seite rendern
//! - Responder für eingehende TCP-Events
//! - Listener-Setup und kooperative Hauptschleife

#![no_std]

mod fmt;

pub mod board;
pub mod listener;
pub mod logic;
pub mod monitor;
pub mod responder;
pub mod runtime;
pub mod sampler;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use board::{SharedBoard, StatusBoard};
pub use listener::{HTTP_PORT, Listening, start_server};
pub use logic::{PAGE_CAPACITY, Page, REFRESH_INTERVAL_MS, TemperatureCalibration, render_page};
pub use monitor::ButtonChannel;
pub use responder::Responder;
pub use runtime::{LOOP_INTERVAL_MS, RunLimit, RuntimeLoop};
pub use sampler::TemperatureSampler;
pub use traits::{
    ButtonInput, Connection, ConnectionError, EventPump, ListenEndpoint, ListenerError,
    TemperatureAdc,
};
pub use types::{
    CHANNEL_COUNT, ChannelId, ChannelState, Disposition, InboundEvent, STATUS_TEXT_CAPACITY,
    StatusSnapshot, StatusText, TemperatureReading, Transition,
};
