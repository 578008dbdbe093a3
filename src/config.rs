use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub log_level: String,
    pub restore_session_on_load: bool,
    pub bridge: BridgeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: "info".to_string(),
            restore_session_on_load: true,
            bridge: BridgeConfig::default(),
        }
    }
}

/// Sondeo de disponibilidad de `window.pywebview.api`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub poll_interval_ms: u32,
    pub backoff_factor: f64,
    pub max_delay_ms: u32,
    pub max_attempts: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            backoff_factor: 2.0,
            max_delay_ms: 2_000,
            max_attempts: 50,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let bridge = BridgeConfig::default();

        Self {
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            restore_session_on_load: parse_or(
                option_env!("RESTORE_SESSION_ON_LOAD"),
                defaults.restore_session_on_load,
            ),
            bridge: BridgeConfig {
                poll_interval_ms: parse_or(option_env!("BRIDGE_POLL_INTERVAL_MS"), bridge.poll_interval_ms),
                backoff_factor: parse_or(option_env!("BRIDGE_BACKOFF_FACTOR"), bridge.backoff_factor),
                max_delay_ms: parse_or(option_env!("BRIDGE_MAX_DELAY_MS"), bridge.max_delay_ms),
                max_attempts: parse_or(option_env!("BRIDGE_MAX_ATTEMPTS"), bridge.max_attempts),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger; valores desconocidos caen a Info
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
