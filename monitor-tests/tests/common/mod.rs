//! Mocks für die Host-Tests
//!
//! Ersetzen GPIO, ADC, TCP-Verbindung, Endpunkt, Netzwerk-Pump und Delay.
#![allow(dead_code)]

use std::collections::VecDeque;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal_async::delay::DelayNs;
use monitor_core::{
    ButtonInput, Connection, ConnectionError, Disposition, EventPump, InboundEvent,
    ListenEndpoint, ListenerError, Responder, SharedBoard, TemperatureAdc,
};

pub type TestBoard = SharedBoard<NoopRawMutex>;

// ============================================================================
// Mock Button
// ============================================================================

/// Digitaler Eingang mit vorgegebener Folge von Pegeln
///
/// `true` = Pin ist LOW (gedrückt). Nach dem Skript bleibt der letzte Pegel.
#[derive(Default)]
pub struct MockButton {
    script: VecDeque<bool>,
    level_low: bool,
    pub reads: usize,
}

impl MockButton {
    /// Dauerhaft HIGH (nicht gedrückt, Pull-up)
    pub fn released() -> Self {
        Self::default()
    }

    pub fn scripted(levels_low: &[bool]) -> Self {
        Self {
            script: levels_low.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl ButtonInput for MockButton {
    fn is_low(&mut self) -> bool {
        if let Some(level) = self.script.pop_front() {
            self.level_low = level;
        }
        self.reads += 1;
        self.level_low
    }
}

// ============================================================================
// Mock ADC
// ============================================================================

#[derive(Default)]
pub struct MockAdc {
    script: VecDeque<u16>,
    raw: u16,
    pub reads: usize,
}

impl MockAdc {
    pub fn constant(raw: u16) -> Self {
        Self {
            raw,
            ..Self::default()
        }
    }

    pub fn scripted(raws: &[u16]) -> Self {
        Self {
            script: raws.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl TemperatureAdc for MockAdc {
    fn read_raw(&mut self) -> u16 {
        if let Some(raw) = self.script.pop_front() {
            self.raw = raw;
        }
        self.reads += 1;
        self.raw
    }
}

// ============================================================================
// Mock Connection
// ============================================================================

/// TCP-Verbindung im Speicher
///
/// `inbound` wird von `receive` abgearbeitet; ist es leer, meldet
/// `receive` End-of-Stream (`Ok(0)`).
#[derive(Default)]
pub struct MockConnection {
    pub inbound: VecDeque<Result<Vec<u8>, ConnectionError>>,
    pub written: Vec<u8>,
    pub write_calls: usize,
    pub flush_calls: usize,
    pub close_calls: usize,
    pub fail_next_write: bool,
    pub fail_next_flush: bool,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inbound(payloads: &[&[u8]]) -> Self {
        Self {
            inbound: payloads.iter().map(|p| Ok(p.to_vec())).collect(),
            ..Self::default()
        }
    }

    pub fn written_str(&self) -> &str {
        std::str::from_utf8(&self.written).unwrap()
    }

    pub fn is_closed(&self) -> bool {
        self.close_calls > 0
    }
}

impl Connection for MockConnection {
    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, ConnectionError> {
        match self.inbound.pop_front() {
            Some(Ok(payload)) => {
                let n = payload.len().min(buf.len());
                buf[..n].copy_from_slice(&payload[..n]);
                Ok(n)
            }
            Some(Err(e)) => Err(e),
            None => Ok(0),
        }
    }

    async fn write_all(&mut self, data: &[u8]) -> Result<(), ConnectionError> {
        self.write_calls += 1;
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(ConnectionError::WriteFailed);
        }
        self.written.extend_from_slice(data);
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), ConnectionError> {
        self.flush_calls += 1;
        if self.fail_next_flush {
            self.fail_next_flush = false;
            return Err(ConnectionError::FlushFailed);
        }
        Ok(())
    }

    fn close(&mut self) {
        self.close_calls += 1;
    }
}

// ============================================================================
// Mock Endpoint
// ============================================================================

#[derive(Debug, Default)]
pub struct MockEndpoint {
    pub fail_bind: bool,
    pub fail_listen: bool,
    pub bound_port: Option<u16>,
    pub listening: bool,
}

impl ListenEndpoint for MockEndpoint {
    fn bind(&mut self, port: u16) -> Result<(), ListenerError> {
        if self.fail_bind {
            return Err(ListenerError::BindFailed);
        }
        self.bound_port = Some(port);
        Ok(())
    }

    fn listen(&mut self) -> Result<(), ListenerError> {
        if self.fail_listen || self.bound_port.is_none() {
            return Err(ListenerError::ListenFailed);
        }
        self.listening = true;
        Ok(())
    }
}

// ============================================================================
// Scripted Event Pump
// ============================================================================

/// Netzwerk-Pump, die Events synchron an einen Responder ausliefert
///
/// Events werden einem Pump-Aufruf (0-basiert) zugeordnet. Eine leere
/// Payload wird als `InboundEvent::Closed` ausgeliefert.
pub struct ScriptedPump<'a> {
    pub responder: Responder<'a, NoopRawMutex>,
    pub connection: MockConnection,
    scheduled: VecDeque<(u32, Vec<u8>)>,
    pub pump_calls: u32,
    pub dispositions: Vec<Disposition>,
    /// Antwort-Seiten in Auslieferungs-Reihenfolge
    pub pages: Vec<String>,
}

impl<'a> ScriptedPump<'a> {
    pub fn new(board: &'a TestBoard) -> Self {
        Self {
            responder: Responder::new(board),
            connection: MockConnection::new(),
            scheduled: VecDeque::new(),
            pump_calls: 0,
            dispositions: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Plant ein Event für den Pump-Aufruf `at_call`
    pub fn schedule(&mut self, at_call: u32, payload: &[u8]) {
        self.scheduled.push_back((at_call, payload.to_vec()));
    }
}

impl EventPump for ScriptedPump<'_> {
    async fn pump(&mut self) {
        let call = self.pump_calls;
        self.pump_calls += 1;

        while let Some((at_call, _)) = self.scheduled.front() {
            if *at_call != call {
                break;
            }
            let Some((_, payload)) = self.scheduled.pop_front() else {
                break;
            };

            let before = self.connection.written.len();
            let event = if payload.is_empty() {
                InboundEvent::Closed
            } else {
                InboundEvent::Data(&payload)
            };
            let disposition = self.responder.handle(&mut self.connection, event).await;
            if disposition == Disposition::Responded {
                let page = String::from_utf8(self.connection.written[before..].to_vec()).unwrap();
                self.pages.push(page);
            }
            self.dispositions.push(disposition);
        }
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub sleeps_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.sleeps_ms.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn block_on<F: core::future::Future>(future: F) -> F::Output {
    embassy_futures::block_on(future)
}
