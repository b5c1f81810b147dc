use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{
    DOC_COLUMN_HEADER, DOC_HEADER, REPORTS_BASE, ReportLine, device_info_block, ensure_report_dir,
    filename_timestamp, report_filename,
};
use crate::collector::DeviceSnapshot;

/// Текстовый файл отчета
pub struct TextRenderer;

impl TextRenderer {
    pub fn render(address: &str, device: &DeviceSnapshot, lines: &[ReportLine], generated: &str) {
        println!("STATUS: Compiling text based report");

        let stamp = filename_timestamp();
        match Self::render_to(Path::new(REPORTS_BASE), &stamp, address, device, lines, generated) {
            Ok(path) => println!("STATUS: Report generated:\nSTATUS: {}", path.display()),
            Err(e) => {
                println!("ERROR: Unable to access and create report path and filename");
                tracing::debug!(error = %e, "запись текстового отчета не удалась");
            }
        }
    }

    /// Пишет отчет под указанным базовым каталогом; дескриптор файла
    /// освобождается областью видимости на любом исходе
    pub fn render_to(
        base: &Path,
        stamp: &str,
        address: &str,
        device: &DeviceSnapshot,
        lines: &[ReportLine],
        generated: &str,
    ) -> io::Result<PathBuf> {
        let dir = ensure_report_dir(base, "text");
        let filename = report_filename(stamp, address, &device.system_name, "txt");
        let path = dir.join(filename);

        let mut file = File::create(&path)?;
        write!(file, "{}", document(address, device, lines, generated))?;

        Ok(path)
    }
}

/// Содержимое текстового отчета, совпадает с консольным
pub fn document(
    address: &str,
    device: &DeviceSnapshot,
    lines: &[ReportLine],
    generated: &str,
) -> String {
    let mut doc = String::new();
    doc.push_str(DOC_HEADER);
    doc.push('\n');
    doc.push_str(&device_info_block(address, device, generated));
    doc.push('\n');
    doc.push_str(DOC_COLUMN_HEADER);

    for line in lines {
        doc.push_str(&format!(
            "\n{} {} {}",
            line.description, line.status, line.duration
        ));
    }

    doc
}
