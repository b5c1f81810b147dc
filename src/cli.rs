use clap::Parser;

use crate::validator::RawOptions;

/// Значения по умолчанию для необязательных опций
pub const DEFAULT_PORT: &str = "161";
pub const DEFAULT_VERSION: &str = "2";
pub const DEFAULT_OUTPUT: &str = "console";

// Порт, версия и формат приходят сырыми строками: их разбирает валидатор,
// чтобы показать все проблемы ввода за один проход
#[derive(Parser, Debug, Clone)]
#[command(name = "switchreport")]
#[command(version, about = "SWITCHREPORT :: Take control of the edge")]
pub struct Cli {
    /// IP address of the destination switch
    #[arg(short = 'i', long = "ip")]
    pub ip: String,

    /// SNMP community string
    #[arg(short = 'c', long = "community")]
    pub community: String,

    /// SNMP port (default: 161)
    #[arg(short = 'p', long = "port")]
    pub port: Option<String>,

    /// SNMP version: 1 | 2 | 3 (default: 2)
    #[arg(short = 'v', long = "snmp-version")]
    pub snmp_version: Option<String>,

    /// Output type: console | text | html (default: console)
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Enable debug diagnostics
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl RawOptions {
    /// Подстановка значений по умолчанию вместо пропущенных опций
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            address: cli.ip.clone(),
            community: cli.community.clone(),
            port: cli.port.clone().unwrap_or_else(|| DEFAULT_PORT.to_string()),
            version: cli
                .snmp_version
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            output: cli.output.clone().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        }
    }
}

/// Разбор аргументов из итератора, удобен в тестах
pub fn parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
