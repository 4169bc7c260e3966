// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use defmt::{Debug2Format, error, info, warn};
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_board_monitor::SharedStatus;
use esp_board_monitor::config::{
    BUTTON_1_GPIO_PIN, BUTTON_2_GPIO_PIN, EXTRA_HEAP_SIZE, HTTP_SERVER_TASKS, NET_SOCKET_COUNT,
    TEMPERATURE_GPIO_PIN, WIFI_HEAP_SIZE,
};
use esp_board_monitor::hal::{AdcTemperature, GpioButton, TcpEndpoint};
use esp_board_monitor::tasks::{
    connect_wifi, connection_task, dhcp_task, http_server_task, monitor_task, net_task,
};
use monitor_core::{HTTP_PORT, start_server};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Hält die Firmware an (fatale Startfehler)
///
/// Kein Reset: das Log bleibt auf der Konsole lesbar.
async fn halt() -> ! {
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

/// Main Entry Point
///
/// Initialisiert Hardware und WLAN, startet den HTTP-Server und die
/// Hauptschleife. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    // Zwei Bereiche: reclaimed RAM (64 KB) + extra (36 KB) = 100 KB total
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Monitor: Starte...");

    // WiFi Hardware initialisieren
    static RADIO_INIT: StaticCell<esp_radio::Controller> = StaticCell::new();
    let radio_init = match esp_radio::init() {
        Ok(controller) => RADIO_INIT.init(controller),
        Err(e) => {
            error!("WiFi: Radio-Init fehlgeschlagen: {}", Debug2Format(&e));
            halt().await
        }
    };

    let (mut wifi_controller, wifi_interface) =
        match esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default()) {
            Ok(wifi) => wifi,
            Err(e) => {
                error!("WiFi: Init fehlgeschlagen: {}", Debug2Format(&e));
                halt().await
            }
        };

    // Ohne WLAN kein Betrieb: ein Versuch, dann anhalten
    if let Err(e) = connect_wifi(&mut wifi_controller).await {
        error!("Monitor: WLAN nicht verfügbar ({}), halte an", e);
        halt().await;
    }

    // Netzwerk-Stack erstellen
    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Static resources für embassy-net (ein Socket pro Server-Task + DHCP)
    static RESOURCES: StaticCell<StackResources<NET_SOCKET_COUNT>> = StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    // embassy-net erstellt Stack + Runner (nutzt STA interface für Client-Modus)
    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    // Stack muss 'static sein für Tasks
    static STACK: StaticCell<Stack<'static>> = StaticCell::new();
    let stack = &*STACK.init(stack);

    // Spawn WiFi Tasks
    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(dhcp_task(stack)).unwrap();
    spawner.spawn(connection_task(wifi_controller)).unwrap();

    // Geteilter Status (Hauptschleife schreibt, HTTP-Tasks lesen)
    static STATUS: StaticCell<SharedStatus> = StaticCell::new();
    let status = &*STATUS.init(SharedStatus::new());

    // Taster: aktiv LOW mit internem Pull-up
    let buttons = [
        GpioButton::new(peripherals.GPIO5),
        GpioButton::new(peripherals.GPIO6),
    ];
    info!(
        "Taster: GPIO{} und GPIO{} als Eingang mit Pull-up konfiguriert",
        BUTTON_1_GPIO_PIN, BUTTON_2_GPIO_PIN
    );

    let temperature = AdcTemperature::new(peripherals.ADC1, peripherals.GPIO2);
    info!(
        "Temperatur: ADC1 an GPIO{} (11 dB, 12 Bit)",
        TEMPERATURE_GPIO_PIN
    );

    // HTTP Server starten (einmalig, kein Retry)
    // Fehler sind bereits geloggt, die Messung läuft trotzdem
    let endpoint = start_server(Some(TcpEndpoint::new()), HTTP_PORT)
        .ok()
        .and_then(|listening| listening.endpoint().listen_endpoint());

    match endpoint {
        Some(endpoint) => {
            // Spawn HTTP Server Tasks (parallele Verbindungen)
            for task_id in 0..HTTP_SERVER_TASKS {
                spawner
                    .spawn(http_server_task(task_id, stack, endpoint, status))
                    .unwrap();
            }
        }
        None => warn!("Monitor: Ohne HTTP-Server, nur Messung aktiv"),
    }

    // Spawn Hauptschleife
    spawner
        .spawn(monitor_task(status, buttons, temperature))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
