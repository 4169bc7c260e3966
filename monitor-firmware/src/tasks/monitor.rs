// Monitor Task - kooperative Hauptschleife (Taster + Temperatur)
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::Delay;
use monitor_core::{EventPump, RunLimit, RuntimeLoop};

use crate::SharedStatus;
use crate::hal::{AdcTemperature, GpioButton};

/// Netzwerk-Pump auf der Firmware
///
/// Der Executor treibt `net_task` und die HTTP-Tasks selbst. Die Schleife
/// gibt hier nur die CPU ab, damit sie zwischen Iterationen laufen können.
pub struct ExecutorPump;

impl EventPump for ExecutorPump {
    async fn pump(&mut self) {
        embassy_futures::yield_now().await;
    }
}

pub type MonitorLoop =
    RuntimeLoop<'static, NoopRawMutex, GpioButton<'static>, AdcTemperature<'static>>;

/// Monitor Task
///
/// Läuft bis zum Ausschalten: Taster abfragen, Temperatur messen,
/// 100 ms schlafen. Schreibt in `status`, den die HTTP-Tasks lesen.
#[embassy_executor::task]
pub async fn monitor_task(
    status: &'static SharedStatus,
    buttons: [GpioButton<'static>; 2],
    temperature: AdcTemperature<'static>,
) {
    let mut runtime: MonitorLoop = RuntimeLoop::new(status, buttons, temperature);
    let mut pump = ExecutorPump;
    let mut delay = Delay;

    runtime.run(&mut pump, &mut delay, RunLimit::Forever).await;
}
