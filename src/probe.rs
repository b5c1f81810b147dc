use std::process::Command;

use crate::config::QueryTarget;

/// Диагностика после пустого SNMP ответа: один эхо-запрос до устройства.
/// Результат только информационный, повторного опроса не будет
pub fn diagnose(target: &QueryTarget) -> String {
    println!("STATUS: Pinging {}...", target.address);

    if ping_once(&target.address) {
        success_message(target)
    } else {
        failure_message(&target.address)
    }
}

/// Один ICMP эхо-запрос через системную утилиту ping, вывод гасится
fn ping_once(address: &str) -> bool {
    #[cfg(windows)]
    let result = Command::new("ping")
        .args(["-n", "1", "-w", "3000", address])
        .output();

    #[cfg(not(windows))]
    let result = Command::new("ping")
        .args(["-c", "1", "-W", "3", address])
        .output();

    match result {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

fn success_message(target: &QueryTarget) -> String {
    format!(
        "ERROR: Ping test to {} successful.\n\nAre SNMP Settings correct?\n- SNMP Community String: {}\n- SNMP Version: {}",
        target.address, target.community, target.version
    )
}

fn failure_message(address: &str) -> String {
    format!("ERROR: Ping test to {address} failed, Host unreachable.")
}
