// Dobles en memoria de las dependencias del navegador: bridge, storage, diálogos, timer y DOM

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use async_trait::async_trait;
use crate::error::AppResult;
use crate::models::{ActionResponse, Car, CarId, LoginResponse, Rental};
use crate::services::{BridgeResult, Dialogs, RentalApi, Timer};
use crate::utils::{
    KeyValueStore, AUTH_INPUT_IDS, LOGIN_EMAIL_ID, LOGIN_PASSWORD_ID, REGISTER_EMAIL_ID,
    REGISTER_NAME_ID, REGISTER_PASSWORD_ID,
};
use crate::views::{LoginForm, RegisterForm, RentalView, Section, Table, TableRow};

// ----------------------------------------------------------------------------
// Storage
// ----------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    written: RefCell<Vec<String>>,
    removed: RefCell<Vec<String>>,
}

impl MemoryStore {
    /// Las entradas iniciales no cuentan como escrituras
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().extend(
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        store
    }

    pub fn written_keys(&self) -> Vec<String> {
        self.written.borrow().clone()
    }

    pub fn removed_keys(&self) -> Vec<String> {
        self.removed.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.written.borrow_mut().push(key.to_string());
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.removed.borrow_mut().push(key.to_string());
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Bridge
// ----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    Login { email: String, password: String },
    Register { name: String, password: String, email: String },
    GetAvailableCars,
    RentCar { car_id: CarId, email: String, days: u32 },
    GetRentals { email: String },
}

pub struct FakeApi {
    /// Comprobaciones que aún fallan; `None` = nunca disponible
    not_ready_for: Cell<Option<u32>>,
    login: BridgeResult<LoginResponse>,
    register: BridgeResult<ActionResponse>,
    cars: BridgeResult<Vec<Car>>,
    rent: BridgeResult<ActionResponse>,
    rentals: BridgeResult<Vec<Rental>>,
    calls: RefCell<Vec<ApiCall>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            not_ready_for: Cell::new(Some(0)),
            login: Ok(LoginResponse::accepted("Test User")),
            register: Ok(ActionResponse::accepted("Registered.")),
            cars: Ok(Vec::new()),
            rent: Ok(ActionResponse::accepted("Rented.")),
            rentals: Ok(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn ready_after(self, checks: u32) -> Self {
        self.not_ready_for.set(Some(checks));
        self
    }

    pub fn never_ready(self) -> Self {
        self.not_ready_for.set(None);
        self
    }

    pub fn with_login(mut self, result: BridgeResult<LoginResponse>) -> Self {
        self.login = result;
        self
    }

    pub fn with_register(mut self, result: BridgeResult<ActionResponse>) -> Self {
        self.register = result;
        self
    }

    pub fn with_cars(mut self, result: BridgeResult<Vec<Car>>) -> Self {
        self.cars = result;
        self
    }

    pub fn with_rent(mut self, result: BridgeResult<ActionResponse>) -> Self {
        self.rent = result;
        self
    }

    pub fn with_rentals(mut self, result: BridgeResult<Vec<Rental>>) -> Self {
        self.rentals = result;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl RentalApi for FakeApi {
    fn is_ready(&self) -> bool {
        match self.not_ready_for.get() {
            None => false,
            Some(0) => true,
            Some(remaining) => {
                self.not_ready_for.set(Some(remaining - 1));
                false
            }
        }
    }

    async fn login(&self, email: &str, password: &str) -> BridgeResult<LoginResponse> {
        self.record(ApiCall::Login {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.login.clone()
    }

    async fn register(&self, name: &str, password: &str, email: &str) -> BridgeResult<ActionResponse> {
        self.record(ApiCall::Register {
            name: name.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        });
        self.register.clone()
    }

    async fn get_available_cars(&self) -> BridgeResult<Vec<Car>> {
        self.record(ApiCall::GetAvailableCars);
        self.cars.clone()
    }

    async fn rent_car(&self, car_id: CarId, email: &str, days: u32) -> BridgeResult<ActionResponse> {
        self.record(ApiCall::RentCar {
            car_id,
            email: email.to_string(),
            days,
        });
        self.rent.clone()
    }

    async fn get_rentals(&self, email: &str) -> BridgeResult<Vec<Rental>> {
        self.record(ApiCall::GetRentals {
            email: email.to_string(),
        });
        self.rentals.clone()
    }
}

// ----------------------------------------------------------------------------
// Diálogos / timer
// ----------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeDialogs {
    alerts: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
    answer: RefCell<Option<String>>,
}

impl FakeDialogs {
    pub fn answer_prompt(&self, answer: Option<&str>) {
        *self.answer.borrow_mut() = answer.map(str::to_string);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Dialogs for FakeDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.borrow().clone()
    }
}

#[derive(Default)]
pub struct FakeTimer {
    sleeps: RefCell<Vec<u32>>,
}

impl FakeTimer {
    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Timer for FakeTimer {
    async fn sleep(&self, millis: u32) {
        self.sleeps.borrow_mut().push(millis);
    }
}

// ----------------------------------------------------------------------------
// Vista
// ----------------------------------------------------------------------------

/// Empieza como la página: formularios visibles, dashboard oculto
pub struct FakeView {
    sections: RefCell<HashMap<Section, bool>>,
    inputs: RefCell<HashMap<&'static str, String>>,
    welcome: RefCell<Option<String>>,
    tables: RefCell<HashMap<Table, Vec<TableRow>>>,
}

impl Default for FakeView {
    fn default() -> Self {
        let sections = HashMap::from([
            (Section::Login, true),
            (Section::Register, true),
            (Section::Dashboard, false),
        ]);
        Self {
            sections: RefCell::new(sections),
            inputs: RefCell::new(HashMap::new()),
            welcome: RefCell::new(None),
            tables: RefCell::new(HashMap::new()),
        }
    }
}

impl FakeView {
    pub fn fill_login(&self, email: &str, password: &str) {
        let mut inputs = self.inputs.borrow_mut();
        inputs.insert(LOGIN_EMAIL_ID, email.to_string());
        inputs.insert(LOGIN_PASSWORD_ID, password.to_string());
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.sections.borrow().get(&section).copied().unwrap_or(false)
    }

    pub fn welcome_name(&self) -> Option<String> {
        self.welcome.borrow().clone()
    }

    pub fn table(&self, table: Table) -> Option<Vec<TableRow>> {
        self.tables.borrow().get(&table).cloned()
    }

    pub fn inputs_are_empty(&self) -> bool {
        self.inputs.borrow().values().all(String::is_empty)
    }

    fn input(&self, id: &str) -> String {
        self.inputs.borrow().get(id).cloned().unwrap_or_default()
    }
}

impl RentalView for FakeView {
    fn read_login_form(&self) -> AppResult<LoginForm> {
        Ok(LoginForm {
            email: self.input(LOGIN_EMAIL_ID),
            password: self.input(LOGIN_PASSWORD_ID),
        })
    }

    fn read_register_form(&self) -> AppResult<RegisterForm> {
        Ok(RegisterForm {
            name: self.input(REGISTER_NAME_ID),
            email: self.input(REGISTER_EMAIL_ID),
            password: self.input(REGISTER_PASSWORD_ID),
        })
    }

    fn set_section_visible(&self, section: Section, visible: bool) -> AppResult<()> {
        self.sections.borrow_mut().insert(section, visible);
        Ok(())
    }

    fn set_welcome_name(&self, name: &str) -> AppResult<()> {
        *self.welcome.borrow_mut() = Some(name.to_string());
        Ok(())
    }

    fn clear_auth_inputs(&self) -> AppResult<()> {
        let mut inputs = self.inputs.borrow_mut();
        for id in AUTH_INPUT_IDS {
            inputs.insert(id, String::new());
        }
        Ok(())
    }

    fn render_table(&self, table: Table, rows: &[TableRow]) -> AppResult<()> {
        self.tables.borrow_mut().insert(table, rows.to_vec());
        Ok(())
    }
}
