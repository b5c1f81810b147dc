/// Общие сведения об устройстве
#[derive(Debug, Clone)]
pub struct DeviceSnapshot {
    pub system_name: String,
    pub uptime_ticks: u64,
    pub uptime_readable: String,
}

/// Одна строка ifTable после объединения четырех колонок
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub index: i64,
    pub description: String,
    pub oper_status: i64,
    pub last_change_ticks: u64,
}

/// Полный результат опроса устройства
#[derive(Debug, Clone)]
pub struct SwitchSnapshot {
    pub device: DeviceSnapshot,
    pub interfaces: Vec<InterfaceRecord>,
}
