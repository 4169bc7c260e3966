// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron auf demselben Executor.
// Hauptschleife und HTTP-Tasks teilen sich den Status über `SharedStatus`.

pub mod http;
pub mod monitor;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use http::http_server_task;
pub use monitor::{ExecutorPump, monitor_task};
pub use wifi::{WifiError, connect_wifi, connection_task, dhcp_task, net_task};
