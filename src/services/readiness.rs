// ============================================================================
// READINESS - Espera acotada a que el host inyecte el bridge
// ============================================================================
// Backoff exponencial desde el intervalo configurado, con tope por espera,
// y abandono tras un número fijo de esperas.
// ============================================================================

use async_trait::async_trait;
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::services::rental_api::RentalApi;

/// Espera asíncrona
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, millis: u32);
}

/// Timer del navegador (setTimeout via gloo_timers)
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, millis: u32) {
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub initial_delay_ms: u32,
    pub backoff_factor: f64,
    pub max_delay_ms: u32,
    pub max_attempts: u32,
}

impl RetryPolicy {
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            initial_delay_ms: config.poll_interval_ms,
            backoff_factor: config.backoff_factor,
            max_delay_ms: config.max_delay_ms.max(config.poll_interval_ms),
            max_attempts: config.max_attempts,
        }
    }

    /// Espera antes del reintento número `attempt` (desde 0)
    pub fn delay_for(&self, attempt: u32) -> u32 {
        // factor <= 1: sondeo a intervalo constante
        let factor = if self.backoff_factor.is_finite() && self.backoff_factor > 1.0 {
            self.backoff_factor
        } else {
            1.0
        };
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let delay = f64::from(self.initial_delay_ms) * factor.powi(exponent);
        if delay >= f64::from(self.max_delay_ms) {
            self.max_delay_ms
        } else {
            delay as u32
        }
    }
}

/// Sondea `api.is_ready()` hasta que se cumple o se agotan los intentos
pub async fn wait_until_ready(
    api: &dyn RentalApi,
    timer: &dyn Timer,
    policy: &RetryPolicy,
) -> Result<(), BridgeError> {
    let mut attempt = 0;
    loop {
        if api.is_ready() {
            if attempt > 0 {
                log::info!("🌉 [BRIDGE] Bridge disponible tras {} reintentos", attempt);
            }
            return Ok(());
        }

        if attempt >= policy.max_attempts {
            log::error!("❌ [BRIDGE] Bridge no disponible tras {} reintentos", attempt);
            return Err(BridgeError::Unavailable { attempts: attempt });
        }

        let delay = policy.delay_for(attempt);
        log::debug!("⏳ [BRIDGE] Bridge no listo, reintento {} en {} ms", attempt + 1, delay);
        timer.sleep(delay).await;
        attempt += 1;
    }
}
