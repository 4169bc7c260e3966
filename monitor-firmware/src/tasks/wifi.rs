// WiFi Task - Verbindet einmalig mit dem WLAN und überwacht die Verbindung
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer, with_timeout};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use crate::config::{NET_POLL_INTERVAL_MS, WIFI_CONNECT_TIMEOUT_SECS, WIFI_PASSWORD, WIFI_SSID};

/// Fehler beim Verbindungsaufbau (alle fatal, kein Retry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum WifiError {
    ConfigFailed,
    StartFailed,
    ConnectFailed,
    Timeout,
}

/// Verbindet mit dem Access Point aus `.env`
///
/// Ein Versuch mit `WIFI_CONNECT_TIMEOUT_SECS` Timeout. Der Aufrufer
/// entscheidet, was bei einem Fehler passiert (main hält die Firmware an).
pub async fn connect_wifi(controller: &mut WifiController<'static>) -> Result<(), WifiError> {
    info!("WiFi: Verbinde mit '{}'...", WIFI_SSID);

    let client_config = ModeConfig::Client(
        ClientConfig::default()
            .with_ssid(WIFI_SSID.into())
            .with_password(WIFI_PASSWORD.into()),
    );

    if let Err(e) = controller.set_config(&client_config) {
        error!("WiFi: Konfiguration fehlgeschlagen: {}", Debug2Format(&e));
        return Err(WifiError::ConfigFailed);
    }

    if let Err(e) = controller.start_async().await {
        error!("WiFi: Start fehlgeschlagen: {}", Debug2Format(&e));
        return Err(WifiError::StartFailed);
    }

    let timeout = Duration::from_secs(WIFI_CONNECT_TIMEOUT_SECS);
    match with_timeout(timeout, controller.connect_async()).await {
        Ok(Ok(())) => {
            info!("WiFi: Verbunden!");
            Ok(())
        }
        Ok(Err(e)) => {
            error!("WiFi: Verbindung fehlgeschlagen: {}", Debug2Format(&e));
            Err(WifiError::ConnectFailed)
        }
        Err(_) => {
            error!(
                "WiFi: Keine Verbindung nach {}s",
                WIFI_CONNECT_TIMEOUT_SECS
            );
            Err(WifiError::Timeout)
        }
    }
}

/// WiFi Connection Task
///
/// Meldet einen Verbindungsverlust. Kein Reconnect: Taster und Temperatur
/// laufen weiter, der Server ist bis zum Neustart nicht erreichbar.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    controller.wait_for_event(WifiEvent::StaDisconnected).await;
    warn!("WiFi: Verbindung zum Access Point verloren (kein Reconnect)");
}

/// Network Task
///
/// Prozessiert Netzwerk-Pakete für den embassy-net Stack
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// DHCP Monitor Task
///
/// Wartet bis eine IP-Adresse vom DHCP-Server erhalten wurde
/// und loggt dann die Netzwerk-Konfiguration
#[embassy_executor::task]
pub async fn dhcp_task(stack: &'static Stack<'static>) {
    let poll = Duration::from_millis(NET_POLL_INTERVAL_MS);

    while !stack.is_link_up() {
        Timer::after(poll).await;
    }
    info!("WiFi: Link ist oben, warte auf IP-Adresse...");

    loop {
        if let Some(config) = stack.config_v4() {
            info!("WiFi: IP-Adresse erhalten!");
            info!("  IP:      {}", Debug2Format(&config.address.address()));
            info!("  Gateway: {}", Debug2Format(&config.gateway));
            break;
        }
        Timer::after(poll).await;
    }
}
