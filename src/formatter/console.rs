use super::{DOC_COLUMN_HEADER, DOC_HEADER, ReportLine, device_info_block};
use crate::collector::DeviceSnapshot;

/// Отчет в стандартный вывод
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn render(address: &str, device: &DeviceSnapshot, lines: &[ReportLine], generated: &str) {
        println!("STATUS: Compiling console based report\n");
        println!("{DOC_HEADER}");
        println!("{}", device_info_block(address, device, generated));
        println!("{DOC_COLUMN_HEADER}");

        for line in lines {
            println!("{} {} {}", line.description, line.status, line.duration);
        }
    }
}
