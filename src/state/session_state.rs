// ============================================================================
// SESSION STATE - Usuario autenticado (email + nombre)
// ============================================================================
// La sesión en memoria refleja dos entradas de localStorage. Se lee una vez
// al arrancar y se borra en el logout.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::error::AppResult;
use crate::models::Session;
use crate::utils::{KeyValueStore, USER_EMAIL_KEY, USER_NAME_KEY, USER_PASSWORD_KEY};

/// Estado de sesión
#[derive(Clone)]
pub struct SessionState {
    store: Rc<dyn KeyValueStore>,
    current: Rc<RefCell<Option<Session>>>,
}

impl SessionState {
    /// Restaura lo que una carga anterior dejó en storage
    pub fn restore(store: Rc<dyn KeyValueStore>) -> Self {
        let current = store
            .get(USER_EMAIL_KEY)
            .filter(|email| !email.is_empty())
            .map(|email| {
                let display_name = store.get(USER_NAME_KEY).unwrap_or_default();
                Session::new(email, display_name)
            });

        if let Some(session) = &current {
            log::info!("💾 [SESSION] Sesión restaurada para {}", session.email);
        }

        Self {
            store,
            current: Rc::new(RefCell::new(current)),
        }
    }

    /// Guarda exactamente las entradas de email y nombre
    pub fn sign_in(&self, session: Session) -> AppResult<()> {
        self.store.set(USER_EMAIL_KEY, &session.email)?;
        self.store.set(USER_NAME_KEY, &session.display_name)?;
        log::info!("✅ [SESSION] Sesión iniciada: {}", session.email);
        *self.current.borrow_mut() = Some(session);
        Ok(())
    }

    /// Elimina la sesión y sus entradas, incluida la clave antigua de contraseña
    pub fn sign_out(&self) -> AppResult<()> {
        *self.current.borrow_mut() = None;

        let mut first_error = None;
        for key in [USER_EMAIL_KEY, USER_NAME_KEY, USER_PASSWORD_KEY] {
            if let Err(e) = self.store.remove(key) {
                log::error!("❌ [SESSION] {}", e);
                first_error.get_or_insert(e);
            }
        }
        log::info!("🗑️ [SESSION] Sesión cerrada");

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn email(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.email.clone())
    }

    /// Nombre no vacío, si existe
    pub fn display_name(&self) -> Option<String> {
        self.current
            .borrow()
            .as_ref()
            .map(|s| s.display_name.clone())
            .filter(|name| !name.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }
}
