// ============================================================================
// VIEWS - Superficie DOM que usa el view model
// ============================================================================

pub mod dom_view;
pub mod forms;
pub mod tables;

pub use dom_view::DomRentalView;
pub use forms::{LoginForm, RegisterForm};
pub use tables::{available_car_rows, rental_history_rows, Table, TableCell, TableRow, TABLE_COLUMNS};

use crate::error::AppResult;

/// Regiones de la página que se muestran u ocultan
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Login,
    Register,
    Dashboard,
}

impl Section {
    pub fn element_id(self) -> &'static str {
        match self {
            Section::Login => "login-section",
            Section::Register => "register-section",
            Section::Dashboard => "dashboard-section",
        }
    }
}

/// Todo lo que el view model necesita de la página
pub trait RentalView {
    fn read_login_form(&self) -> AppResult<LoginForm>;
    fn read_register_form(&self) -> AppResult<RegisterForm>;
    fn set_section_visible(&self, section: Section, visible: bool) -> AppResult<()>;
    fn set_welcome_name(&self, name: &str) -> AppResult<()>;
    /// Vacía los cinco inputs de login / registro
    fn clear_auth_inputs(&self) -> AppResult<()>;
    /// Reemplaza el contenido del tbody de `table`
    fn render_table(&self, table: Table, rows: &[TableRow]) -> AppResult<()>;
}
