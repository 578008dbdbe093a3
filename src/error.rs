// ============================================================================
// ERRORS - Tipos de error de todo el front-end
// ============================================================================
// AppError sigue los tres niveles de fallo de cada acción del usuario:
// validación (local), servicio (success: false) y bridge (transporte).
// ============================================================================

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Fallos al hablar con el objeto inyectado `window.pywebview.api`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    #[error("bridge unavailable after {attempts} attempts")]
    Unavailable { attempts: u32 },

    #[error("bridge is not injected in the page")]
    NotInjected,

    #[error("bridge method `{0}` is missing")]
    MissingMethod(&'static str),

    #[error("bridge call `{method}` failed: {message}")]
    Call { method: &'static str, message: String },

    #[error("bridge call `{method}` returned a malformed response: {message}")]
    Malformed { method: &'static str, message: String },
}

/// Error de la aplicación
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Service(String),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Nivel de la última línea de log de un flujo. El view model ya alerta o
    /// loguea todos los niveles salvo los fallos de DOM.
    pub fn outcome_level(&self) -> log::Level {
        match self {
            AppError::Dom(_) => log::Level::Error,
            _ => log::Level::Debug,
        }
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(describe_js_value(&value))
    }
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Texto legible de un valor JS lanzado (Error, string u otro)
pub fn describe_js_value(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}
