// ============================================================================
// RENTAL VIEWMODEL - Login, registro, dashboard, alquiler y logout
// ============================================================================
// Cada acción remota sigue los mismos tres niveles:
//   1. validación local  -> alert, sin llamada al bridge
//   2. success: false    -> alert con el mensaje del servicio
//   3. fallo del bridge  -> log::error! + alert genérico (los loaders solo loguean)
// ============================================================================

use std::rc::Rc;
use crate::error::{AppError, AppResult};
use crate::models::{CarId, Session};
use crate::services::{wait_until_ready, Dialogs, RentalApi, RetryPolicy, Timer};
use crate::state::SessionState;
use crate::utils::*;
use crate::views::{available_car_rows, rental_history_rows, RentalView, Section, Table};

/// ViewModel de la página de alquiler
pub struct RentalViewModel {
    api: Rc<dyn RentalApi>,
    session: SessionState,
    dialogs: Rc<dyn Dialogs>,
    timer: Rc<dyn Timer>,
    view: Rc<dyn RentalView>,
    retry: RetryPolicy,
}

impl RentalViewModel {
    pub fn new(
        api: Rc<dyn RentalApi>,
        session: SessionState,
        dialogs: Rc<dyn Dialogs>,
        timer: Rc<dyn Timer>,
        view: Rc<dyn RentalView>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            api,
            session,
            dialogs,
            timer,
            view,
            retry,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    /// Login con los valores actuales del formulario
    pub async fn submit_login(&self) -> AppResult<()> {
        let form = self.view.read_login_form()?;
        self.login(&form.email, &form.password).await
    }

    /// Registro con los valores actuales del formulario
    pub async fn submit_register(&self) -> AppResult<()> {
        let form = self.view.read_register_form()?;
        self.register(&form.name, &form.email, &form.password).await
    }

    /// La contraseña se envía tal cual, aunque esté vacía
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(self.reject(MSG_EMAIL_REQUIRED));
        }

        log::info!("🔐 [AUTH] Login de {}", email);

        let response = match self.api.login(&email, password).await {
            Ok(response) => response,
            Err(e) => return Err(self.report_failure("Login error", e.into(), MSG_LOGIN_FAILED)),
        };

        if !response.success {
            return Err(self.service_failure(response.message, MSG_LOGIN_FAILED));
        }

        let session = Session::new(email, response.name.unwrap_or_default());
        if let Err(e) = self.session.sign_in(session) {
            return Err(self.report_failure("Login error", e, MSG_LOGIN_FAILED));
        }

        self.show_dashboard().await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<()> {
        let name = name.trim();
        let email = normalize_email(email);
        let password = password.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(self.reject(MSG_REGISTER_FIELDS_REQUIRED));
        }

        log::info!("📝 [AUTH] Registro de {}", email);

        let response = match self.api.register(name, password, &email).await {
            Ok(response) => response,
            Err(e) => {
                return Err(self.report_failure("Registration error", e.into(), MSG_REGISTER_FAILED))
            }
        };

        if !response.success {
            return Err(self.service_failure(response.message, MSG_REGISTER_FAILED));
        }

        if let Err(e) = self.session.sign_in(Session::new(email, name)) {
            return Err(self.report_failure("Registration error", e, MSG_REGISTER_FAILED));
        }

        self.show_dashboard().await
    }

    // ------------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------------

    /// Muestra solo el dashboard, saluda al usuario y carga las dos tablas
    pub async fn show_dashboard(&self) -> AppResult<()> {
        self.view.set_section_visible(Section::Login, false)?;
        self.view.set_section_visible(Section::Register, false)?;
        self.view.set_section_visible(Section::Dashboard, true)?;

        let name = self
            .session
            .display_name()
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());
        self.view.set_welcome_name(&name)?;

        self.refresh_tables().await;
        Ok(())
    }

    /// Los dos loaders van en paralelo; cada uno loguea su propio fallo
    async fn refresh_tables(&self) {
        let _ = futures::join!(self.load_available_cars(), self.load_rental_history());
    }

    pub async fn load_available_cars(&self) -> AppResult<()> {
        self.wait_for_bridge("CARS").await?;

        let cars = self.api.get_available_cars().await.map_err(|e| {
            log::error!("❌ [CARS] Error loading cars: {}", e);
            AppError::from(e)
        })?;

        log::info!("🚗 [CARS] {} coches disponibles", cars.len());
        self.render(Table::AvailableCars, &available_car_rows(&cars))
    }

    /// No hace nada sin usuario identificado
    pub async fn load_rental_history(&self) -> AppResult<()> {
        let Some(email) = self.session.email() else {
            return Ok(());
        };

        self.wait_for_bridge("RENTALS").await?;

        let rentals = self.api.get_rentals(&email).await.map_err(|e| {
            log::error!("❌ [RENTALS] Error loading rentals: {}", e);
            AppError::from(e)
        })?;

        log::info!("📋 [RENTALS] {} alquileres", rentals.len());
        self.render(Table::RentalHistory, &rental_history_rows(&rentals))
    }

    // ------------------------------------------------------------------------
    // Rent
    // ------------------------------------------------------------------------

    pub async fn rent_car(&self, car_id: CarId) -> AppResult<()> {
        let answer = self.dialogs.prompt(MSG_RENT_PROMPT).await;
        let Some(days) = answer.as_deref().and_then(parse_rental_days) else {
            return Err(self.reject(MSG_INVALID_DURATION));
        };

        let Some(email) = self.session.email() else {
            return Err(self.reject(MSG_LOGIN_REQUIRED));
        };

        log::info!("🔑 [RENT] Coche {} por {} días para {}", car_id, days, email);

        let response = match self.api.rent_car(car_id, &email, days).await {
            Ok(response) => response,
            Err(e) => return Err(self.report_failure("Error renting car", e.into(), MSG_RENT_FAILED)),
        };

        if !response.success {
            return Err(self.service_failure(response.message, MSG_RENT_FAILED));
        }

        if let Some(message) = response.message.filter(|m| !m.is_empty()) {
            self.dialogs.alert(&message);
        }
        self.refresh_tables().await;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Logout
    // ------------------------------------------------------------------------

    /// Borra la sesión y vuelve a los formularios de login / registro
    pub fn logout(&self) -> AppResult<()> {
        let storage_result = self.session.sign_out();
        if let Err(e) = &storage_result {
            log::error!("❌ [AUTH] No se pudo limpiar la sesión: {}", e);
        }

        self.view.set_section_visible(Section::Dashboard, false)?;
        self.view.set_section_visible(Section::Login, true)?;
        self.view.set_section_visible(Section::Register, true)?;
        self.view.clear_auth_inputs()?;

        storage_result
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    async fn wait_for_bridge(&self, tag: &str) -> AppResult<()> {
        wait_until_ready(self.api.as_ref(), self.timer.as_ref(), &self.retry)
            .await
            .map_err(|e| {
                log::error!("❌ [{}] {}", tag, e);
                AppError::from(e)
            })
    }

    fn render(&self, table: Table, rows: &[crate::views::TableRow]) -> AppResult<()> {
        self.view.render_table(table, rows).map_err(|e| {
            log::error!("❌ [VIEW] No se pudo renderizar #{}: {}", table.element_id(), e);
            e
        })
    }

    /// Nivel 1
    fn reject(&self, message: &str) -> AppError {
        self.dialogs.alert(message);
        AppError::Validation(message.to_string())
    }

    /// Nivel 2; sin mensaje se usa el texto genérico
    fn service_failure(&self, message: Option<String>, fallback: &str) -> AppError {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        log::warn!("⚠️ [SERVICE] {}", message);
        self.dialogs.alert(&message);
        AppError::Service(message)
    }

    /// Nivel 3
    fn report_failure(&self, context: &str, error: AppError, alert: &str) -> AppError {
        log::error!("❌ {}: {}", context, error);
        self.dialogs.alert(alert);
        error
    }
}
