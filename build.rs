use std::env;
use std::fs;
use std::path::Path;

// Variables leídas con option_env! en src/config.rs
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "LOG_LEVEL",
    "RESTORE_SESSION_ON_LOAD",
    "BRIDGE_POLL_INTERVAL_MS",
    "BRIDGE_BACKOFF_FACTOR",
    "BRIDGE_MAX_DELAY_MS",
    "BRIDGE_MAX_ATTEMPTS",
];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !CONFIG_KEYS.contains(&key) {
                        println!("cargo:warning=Unknown key {} in .env, ignored", key);
                        continue;
                    }

                    // Solo configurar si no está ya definida
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
