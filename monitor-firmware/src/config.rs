// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// Taster und Temperatursensor
// ============================================================================

/// GPIO-Pin für Taster 1 (aktiv LOW, interner Pull-up)
pub const BUTTON_1_GPIO_PIN: u8 = 5;

/// GPIO-Pin für Taster 2 (aktiv LOW, interner Pull-up)
pub const BUTTON_2_GPIO_PIN: u8 = 6;

/// GPIO-Pin des Temperatursensors (ADC1, 11 dB Dämpfung, 12 Bit)
pub const TEMPERATURE_GPIO_PIN: u8 = 2;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Maximale Wartezeit auf die WLAN-Verbindung in Sekunden
/// Kein Retry: danach hält die Firmware an
pub const WIFI_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Poll-Intervall beim Warten auf Link und DHCP-Adresse
pub const NET_POLL_INTERVAL_MS: u64 = 500;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// Anzahl paralleler Server-Tasks (je eine Verbindung gleichzeitig)
pub const HTTP_SERVER_TASKS: usize = 4;

/// Sockets im embassy-net Stack
/// Ein Socket pro Server-Task plus Reserve für DHCP
pub const NET_SOCKET_COUNT: usize = HTTP_SERVER_TASKS + 2;

/// TCP RX Buffer-Größe in Bytes
/// Für eingehende TCP-Daten vom Client
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
/// Eine komplette Seite passt hinein (PAGE_CAPACITY)
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Receive-Buffer pro Verbindung: ein Receive = ein Event
pub const HTTP_RECEIVE_BUFFER_SIZE: usize = 512;

/// Inaktivitäts-Timeout pro Verbindung in Sekunden
pub const HTTP_SOCKET_TIMEOUT_SECS: u64 = 5;
