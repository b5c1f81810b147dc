use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{
    PortStatus, REPORTS_BASE, ReportLine, ensure_report_dir, filename_timestamp, report_filename,
};
use crate::collector::DeviceSnapshot;

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>SWITCHREPORT :: Take control of the edge</title>
<meta charset="UTF-8">
 <style>
  table { border-collapse: collapse; border: solid thick; }
  colgroup, tbody { border: solid medium; }
  td { border: solid thin; height: 1.4em; text-align: center; padding-left: 5px; padding-right: 5px;}
  tr.rowred {background-color:#FF6347;}
 </style>
</head>
<body>
<section>
<h1>SwitchReport :: Take control of the edge</h1>
<p>Scan complete and report generated below<br />
"#;

const HTML_TABLE_HEAD: &str = r#"
</section>
<section>
 <table>
 <thead>
  <tr>
   <th> Interface
   <th> Status
   <th> Duration
 <tbody>
"#;

const HTML_FOOTER: &str = r#"
 </tbody>
 </table>
</section>
</body>
</html>
"#;

/// HTML файл отчета
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn render(address: &str, device: &DeviceSnapshot, lines: &[ReportLine], generated: &str) {
        println!("STATUS: Compiling html based report");

        let stamp = filename_timestamp();
        match Self::render_to(Path::new(REPORTS_BASE), &stamp, address, device, lines, generated) {
            Ok(path) => println!("STATUS: Report generated:\nSTATUS: {}", path.display()),
            Err(e) => {
                println!("ERROR: Unable to access and create report path and filename");
                tracing::debug!(error = %e, "запись html отчета не удалась");
            }
        }
    }

    pub fn render_to(
        base: &Path,
        stamp: &str,
        address: &str,
        device: &DeviceSnapshot,
        lines: &[ReportLine],
        generated: &str,
    ) -> io::Result<PathBuf> {
        let dir = ensure_report_dir(base, "html");
        let filename = report_filename(stamp, address, &device.system_name, "html");
        let path = dir.join(filename);

        let mut file = File::create(&path)?;
        write!(file, "{}", document(address, device, lines, generated))?;

        Ok(path)
    }
}

/// Полный HTML документ отчета
pub fn document(
    address: &str,
    device: &DeviceSnapshot,
    lines: &[ReportLine],
    generated: &str,
) -> String {
    let mut doc = String::new();
    doc.push_str(HTML_HEAD);
    doc.push_str(&format!(
        "Switch IP Address: {} <br />Switch Name: {} <br />Switch Up Time: {} <br />Report Generated: {}</p>",
        address, device.system_name, device.uptime_readable, generated
    ));
    doc.push_str(HTML_TABLE_HEAD);

    for line in lines {
        doc.push_str(&table_row(line));
        doc.push('\n');
    }

    doc.push_str(HTML_FOOTER);
    doc
}

/// Подсветка инвертирована: класс rowred носят все строки со статусом
/// кроме ровно Down, включая Up и Unknown
pub fn table_row(line: &ReportLine) -> String {
    if line.status == PortStatus::Down {
        format!(
            "<tr><td> {} <td> {} <td> {} ",
            line.description, line.status, line.duration
        )
    } else {
        format!(
            "<tr class='rowred'><td> {} <td> {} <td> {} ",
            line.description, line.status, line.duration
        )
    }
}
