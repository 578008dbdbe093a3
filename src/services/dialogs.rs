use async_trait::async_trait;

/// Alertas y preguntas al usuario.
///
/// `prompt` es async: un modal puede sustituir al prompt bloqueante del
/// navegador sin tocar el view model.
#[async_trait(?Send)]
pub trait Dialogs {
    fn alert(&self, message: &str);
    /// `None` si el usuario cancela
    async fn prompt(&self, message: &str) -> Option<String>;
}

/// window.alert / window.prompt
pub struct BrowserDialogs;

#[async_trait(?Send)]
impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::warn!("⚠️ [DIALOG] alert falló: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [DIALOG] Sin window, alert descartado: {}", message),
        }
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        let window = web_sys::window()?;
        match window.prompt_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("⚠️ [DIALOG] prompt falló: {:?}", e);
                None
            }
        }
    }
}
