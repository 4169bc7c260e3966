//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use core::fmt::{self, Write};

use heapless::String;

use crate::types::StatusSnapshot;

/// Maximale Größe der HTTP-Antwort (Header + HTML) in Bytes
pub const PAGE_CAPACITY: usize = 1024;

/// Reload-Intervall der Seite im Browser (Millisekunden)
pub const REFRESH_INTERVAL_MS: u32 = 1000;

/// Puffer für eine gerenderte Antwort
pub type Page = String<PAGE_CAPACITY>;

/// Lineare Kalibrierung des Temperatursensors
///
/// `voltage = raw * (reference_voltage / max_code)`
/// `temperature = t0 - (voltage - v0) / slope`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureCalibration {
    /// ADC-Referenzspannung in Volt
    pub reference_voltage: f32,
    /// Anzahl der ADC-Codes (2^Bits)
    pub max_code: f32,
    /// Referenztemperatur in °C
    pub t0: f32,
    /// Sensorspannung bei `t0` in Volt
    pub v0: f32,
    /// Steigung in V/°C
    pub slope: f32,
}

impl TemperatureCalibration {
    /// Sensorspezifische Standardwerte (12-Bit ADC, 3,3 V Referenz)
    pub const DEFAULT: Self = Self {
        reference_voltage: 3.3,
        max_code: (1u32 << 12) as f32,
        t0: 27.0,
        v0: 0.706,
        slope: 0.001721,
    };

    /// Rechnet einen ADC-Rohwert in Volt um
    #[inline]
    pub fn raw_to_voltage(&self, raw: u16) -> f32 {
        raw as f32 * (self.reference_voltage / self.max_code)
    }

    /// Rechnet einen ADC-Rohwert in °C um
    ///
    /// Keine Bereichsprüfung: unsinnige Rohwerte liefern unsinnige Temperaturen.
    #[inline]
    pub fn raw_to_celsius(&self, raw: u16) -> f32 {
        let voltage = self.raw_to_voltage(raw);
        self.t0 - (voltage - self.v0) / self.slope
    }
}

impl Default for TemperatureCalibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `fmt::Write` Adapter, der bei vollem Puffer abschneidet statt fehlzuschlagen
struct Truncating<'a, const N: usize> {
    buf: &'a mut String<N>,
    truncated: bool,
}

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        if self.buf.push_str(s).is_ok() {
            return Ok(());
        }
        // Passt nicht komplett: zeichenweise bis zur Grenze (UTF-8 bleibt gültig)
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

/// Hängt formatierten Text an, schneidet bei Überlauf ab
///
/// Gibt `true` zurück wenn abgeschnitten wurde.
pub fn write_truncated<const N: usize>(buf: &mut String<N>, args: fmt::Arguments<'_>) -> bool {
    let mut writer = Truncating {
        buf,
        truncated: false,
    };
    // Truncating::write_str liefert nie Err, Formatierungsfehler gibt es nicht
    let _ = writer.write_fmt(args);
    writer.truncated
}

/// Rendert die komplette HTTP-Antwort aus den drei Status-Texten
///
/// Reine Funktion: gleiche Texte ergeben byte-identische Ausgabe.
/// Die Texte werden unverändert (ohne HTML-Escaping) eingebettet.
/// Der Puffer wird vorher geleert; gibt `true` zurück wenn die Antwort
/// nicht in `N` Bytes gepasst hat und abgeschnitten wurde.
pub fn render_page<const N: usize>(snapshot: &StatusSnapshot, out: &mut String<N>) -> bool {
    out.clear();
    write_truncated(
        out,
        format_args!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=UTF-8\r\n\r\n\
             <!DOCTYPE html>\
             <html>\
             <head>\
               <meta charset=\"UTF-8\">\
               <title>Monitoring von Tastern und Temperatur</title>\
             </head>\
             <body>\
               <h1>Zustand der Taster und Temperatur der Platine</h1>\
               <p>Taster 1: {}</p>\
               <p>Taster 2: {}</p>\
               <p>Temperatur: {}</p>\
               <script>\
                   setTimeout(function(){{\
                       location.reload();\
                   }},{});\
               </script>\
             </body>\
             </html>\r\n",
            snapshot.buttons[0], snapshot.buttons[1], snapshot.temperature, REFRESH_INTERVAL_MS
        ),
    )
}
