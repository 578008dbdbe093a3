// ============================================================================
// APP - Composición de servicios + enlace con la página
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, on_click};
use crate::error::AppResult;
use crate::services::{BrowserDialogs, BrowserTimer, PywebviewBridge, RetryPolicy};
use crate::state::SessionState;
use crate::utils::{LocalStore, LOGIN_BUTTON_ID, LOGOUT_BUTTON_ID, REGISTER_BUTTON_ID};
use crate::viewmodels::RentalViewModel;
use crate::views::DomRentalView;

/// Aplicación principal
pub struct App {
    view_model: Rc<RentalViewModel>,
}

impl App {
    /// Conecta las implementaciones del navegador y restaura la sesión guardada
    pub fn new() -> Result<Self, JsValue> {
        let store = Rc::new(LocalStore::new()?);
        let session = SessionState::restore(store);

        let view_model = RentalViewModel::new(
            Rc::new(PywebviewBridge::new()),
            session,
            Rc::new(BrowserDialogs),
            Rc::new(BrowserTimer),
            Rc::new(DomRentalView::new()),
            RetryPolicy::from_config(&CONFIG.bridge),
        );

        Ok(Self {
            view_model: Rc::new(view_model),
        })
    }

    pub fn view_model(&self) -> Rc<RentalViewModel> {
        Rc::clone(&self.view_model)
    }

    /// Enlaza los botones y, con sesión restaurada, va directo al dashboard
    pub fn start(&self) -> Result<(), JsValue> {
        self.bind_buttons()?;

        if CONFIG.restore_session_on_load && self.view_model.session().is_authenticated() {
            log::info!("💾 [APP] Sesión previa encontrada, mostrando dashboard");
            let vm = self.view_model();
            spawn_local(async move {
                log_outcome("APP", "dashboard", vm.show_dashboard().await);
            });
        }
        Ok(())
    }

    fn bind_buttons(&self) -> Result<(), JsValue> {
        if let Some(button) = get_element_by_id(LOGIN_BUTTON_ID) {
            let vm = self.view_model();
            on_click(&button, move |event| {
                event.prevent_default();
                let vm = Rc::clone(&vm);
                spawn_local(async move {
                    log_outcome("AUTH", "login", vm.submit_login().await);
                });
            })?;
        }

        if let Some(button) = get_element_by_id(REGISTER_BUTTON_ID) {
            let vm = self.view_model();
            on_click(&button, move |event| {
                event.prevent_default();
                let vm = Rc::clone(&vm);
                spawn_local(async move {
                    log_outcome("AUTH", "registro", vm.submit_register().await);
                });
            })?;
        }

        if let Some(button) = get_element_by_id(LOGOUT_BUTTON_ID) {
            let vm = self.view_model();
            on_click(&button, move |event| {
                event.prevent_default();
                log_outcome("AUTH", "logout", vm.logout());
            })?;
        }

        Ok(())
    }
}

/// Última línea de log de un flujo lanzado con spawn_local
pub fn log_outcome(tag: &str, action: &str, result: AppResult<()>) {
    if let Err(e) = result {
        log::log!(e.outcome_level(), "[{}] {} terminado con error: {}", tag, action, e);
    }
}
