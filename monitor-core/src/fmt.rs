// Logging-Makros: defmt auf dem Target, log-Fassade auf dem Host
//
// Die Firmware aktiviert das `defmt` Feature. Host-Tests laufen ohne
// defmt-Logger und nutzen deshalb `log` (ohne Logger = no-op).

#[allow(unused_imports)]
#[cfg(feature = "defmt")]
pub(crate) use defmt::{error, info, warn};

#[allow(unused_imports)]
#[cfg(not(feature = "defmt"))]
pub(crate) use log::{error, info, warn};
