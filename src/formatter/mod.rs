use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::collector::{DeviceSnapshot, InterfaceRecord, SwitchSnapshot};
use crate::config::{OutputMode, RunConfig};

pub mod console;
pub mod html;
pub mod text;

/// Тики на сутки, час и минуту (сотые доли секунды)
pub const TICKS_PER_DAY: u64 = 8_640_000;
pub const TICKS_PER_HOUR: u64 = 360_000;
pub const TICKS_PER_MINUTE: u64 = 6_000;

/// Каталог отчетов относительно рабочей директории
pub const REPORTS_BASE: &str = "reports";

pub(crate) const DOC_HEADER: &str = "SWITCHREPORT";
pub(crate) const DOC_COLUMN_HEADER: &str = "Interface   |   Status  |   Status Duration";

/// Статус порта по коду ifOperStatus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortStatus {
    Up,
    Down,
    Unknown,
}

impl PortStatus {
    /// Различаются только 1 и 2, остальные коды протокола
    /// (testing, dormant, notPresent и прочие) схлопываются в Unknown
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => PortStatus::Up,
            2 => PortStatus::Down,
            _ => PortStatus::Unknown,
        }
    }
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortStatus::Up => write!(f, "Up"),
            PortStatus::Down => write!(f, "Down"),
            PortStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Готовая строка отчета по одному интерфейсу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub description: String,
    pub status: PortStatus,
    pub duration: String,
}

/// Прошедшие тики; ifLastChange может обогнать аптайм после переполнения
/// счетчика, тогда результат прижимается к нулю
pub fn elapsed_ticks(now_ticks: u64, change_ticks: u64) -> u64 {
    now_ticks.saturating_sub(change_ticks)
}

/// Тики в строку вида "D days H hours M minutes": последовательное
/// целочисленное деление, нулевые части не опускаются, секунды отброшены
pub fn format_time_ticks(ticks: u64) -> String {
    let days = ticks / TICKS_PER_DAY;
    let rem = ticks % TICKS_PER_DAY;
    let hours = rem / TICKS_PER_HOUR;
    let rem = rem % TICKS_PER_HOUR;
    let minutes = rem / TICKS_PER_MINUTE;

    format!("{days} days {hours} hours {minutes} minutes")
}

/// Строки отчета считаются один раз и передаются всем рендерам
pub fn build_report_lines(
    device: &DeviceSnapshot,
    interfaces: &[InterfaceRecord],
) -> Vec<ReportLine> {
    interfaces
        .iter()
        .map(|iface| ReportLine {
            description: iface.description.clone(),
            status: PortStatus::from_raw(iface.oper_status),
            duration: format_time_ticks(elapsed_ticks(
                device.uptime_ticks,
                iface.last_change_ticks,
            )),
        })
        .collect()
}

/// Метка времени для имени файла отчета
pub fn filename_timestamp() -> String {
    Local::now().format("%y%m%d%H%M").to_string()
}

/// Момент генерации отчета в стиле ctime
pub fn generated_at() -> String {
    Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Имя файла отчета из метки, адреса и имени устройства
pub fn report_filename(stamp: &str, address: &str, system_name: &str, ext: &str) -> String {
    format!("SwitchReport_{stamp}_{address}_{system_name}.{ext}")
}

/// Каталог отчетов данного типа, создается при необходимости; неудача
/// печатается и не фатальна, следом упадет и будет обработана запись файла
pub fn ensure_report_dir(base: &Path, kind: &str) -> PathBuf {
    let dir = base.join(kind);
    if !dir.exists() {
        if let Err(e) = fs::create_dir_all(&dir) {
            println!("ERROR: Unable to create directory. Check Permissions.");
            tracing::debug!(error = %e, "создание каталога отчетов не удалось");
        }
    }
    dir
}

/// Общий блок сведений об устройстве для console и text отчетов
pub fn device_info_block(address: &str, device: &DeviceSnapshot, generated: &str) -> String {
    format!(
        "\nDevice IP Address: {} \nDevice Name: {} \nDevice Up Time: {} \nReport Generated: {}\n",
        address, device.system_name, device.uptime_readable, generated
    )
}

/// Выбор рендера по режиму вывода
pub fn render(config: &RunConfig, snapshot: &SwitchSnapshot) {
    let lines = build_report_lines(&snapshot.device, &snapshot.interfaces);
    let generated = generated_at();
    let address = &config.target.address;

    match config.output {
        OutputMode::Console => {
            console::ConsoleRenderer::render(address, &snapshot.device, &lines, &generated)
        }
        OutputMode::Text => {
            text::TextRenderer::render(address, &snapshot.device, &lines, &generated)
        }
        OutputMode::Html => {
            html::HtmlRenderer::render(address, &snapshot.device, &lines, &generated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(uptime_ticks: u64) -> DeviceSnapshot {
        DeviceSnapshot {
            system_name: "core-sw1".to_string(),
            uptime_ticks,
            uptime_readable: format_time_ticks(uptime_ticks),
        }
    }

    #[test]
    fn tick_division_chain() {
        assert_eq!(format_time_ticks(0), "0 days 0 hours 0 minutes");
        assert_eq!(format_time_ticks(6_000), "0 days 0 hours 1 minutes");
        assert_eq!(format_time_ticks(360_000), "0 days 1 hours 0 minutes");
        assert_eq!(format_time_ticks(8_640_000), "1 days 0 hours 0 minutes");
        assert_eq!(format_time_ticks(8_700_000), "1 days 0 hours 10 minutes");
        assert_eq!(format_time_ticks(9_000_000), "1 days 1 hours 0 minutes");
    }

    #[test]
    fn seconds_are_discarded() {
        // 5999 тиков это 59.99 секунды, до минуты не дотягивает
        assert_eq!(format_time_ticks(5_999), "0 days 0 hours 0 minutes");
    }

    #[test]
    fn elapsed_saturates_at_zero() {
        assert_eq!(elapsed_ticks(100, 200), 0);
        assert_eq!(elapsed_ticks(200, 100), 100);
    }

    #[test]
    fn status_codes_collapse_to_three_labels() {
        assert_eq!(PortStatus::from_raw(1), PortStatus::Up);
        assert_eq!(PortStatus::from_raw(2), PortStatus::Down);
        assert_eq!(PortStatus::from_raw(0), PortStatus::Unknown);
        assert_eq!(PortStatus::from_raw(3), PortStatus::Unknown);
        assert_eq!(PortStatus::from_raw(7), PortStatus::Unknown);
        assert_eq!(PortStatus::from_raw(-1), PortStatus::Unknown);

        assert_eq!(PortStatus::Up.to_string(), "Up");
        assert_eq!(PortStatus::Down.to_string(), "Down");
        assert_eq!(PortStatus::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn report_lines_derive_status_and_duration() {
        let interfaces = vec![crate::collector::InterfaceRecord {
            index: 1,
            description: "eth0".to_string(),
            oper_status: 1,
            last_change_ticks: 300_000,
        }];

        let lines = build_report_lines(&device(9_000_000), &interfaces);
        assert_eq!(
            lines,
            vec![ReportLine {
                description: "eth0".to_string(),
                status: PortStatus::Up,
                duration: "1 days 0 hours 10 minutes".to_string(),
            }]
        );
    }

    #[test]
    fn filename_carries_stamp_address_and_name() {
        let name = report_filename("2608061215", "10.0.0.1", "core-sw1", "txt");
        assert_eq!(name, "SwitchReport_2608061215_10.0.0.1_core-sw1.txt");
    }

    #[test]
    fn timestamp_is_ten_digits() {
        let stamp = filename_timestamp();
        assert_eq!(stamp.len(), 10);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn device_block_lists_all_fields() {
        let block = device_info_block("10.0.0.1", &device(8_640_000), "Thu Aug  6 12:00:00 2026");
        assert!(block.contains("Device IP Address: 10.0.0.1 "));
        assert!(block.contains("Device Name: core-sw1 "));
        assert!(block.contains("Device Up Time: 1 days 0 hours 0 minutes "));
        assert!(block.contains("Report Generated: Thu Aug  6 12:00:00 2026"));
    }
}
