// Library-Root: Hardware-Adapter, Tasks und Konfiguration der Firmware
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use monitor_core::SharedBoard;

/// Geteilter Status-Speicher (Taster- und Temperatur-Texte)
///
/// NoopRawMutex reicht: alle Tasks laufen auf demselben Executor.
/// Hauptschleife schreibt, HTTP-Tasks lesen Snapshots.
pub type SharedStatus = SharedBoard<NoopRawMutex>;
