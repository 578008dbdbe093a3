// ============================================================================
// CAR RENTAL - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: render sobre los ids de index.html
// - ViewModels: flujos de login / registro / dashboard / alquiler / logout
// - Services: SOLO comunicación con window.pywebview.api
// - State: sesión con Rc<RefCell> respaldada por localStorage
// - Models: estructuras compartidas con el host
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wasm_logger::Config;
use crate::app::{log_outcome, App};
use crate::config::CONFIG;
use crate::viewmodels::RentalViewModel;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚗 Car Rental - Rust Puro + MVVM ({})", CONFIG.environment);
    if !CONFIG.is_production() {
        log::debug!("⚙️ [APP] Config: {:?}", *CONFIG);
    }

    let app = App::new()?;
    app.start()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// View model de la app en marcha, si `main` ya se ejecutó
fn view_model() -> Option<Rc<RentalViewModel>> {
    let vm = APP.with(|app_cell| app_cell.borrow().as_ref().map(App::view_model));
    if vm.is_none() {
        log::warn!("⚠️ [APP] App no está inicializada");
    }
    vm
}

// ----------------------------------------------------------------------------
// Exports con los nombres globales que usan los scripts de la página
// ----------------------------------------------------------------------------

#[wasm_bindgen(js_name = loginUser)]
pub fn login_user() {
    if let Some(vm) = view_model() {
        spawn_local(async move {
            log_outcome("AUTH", "login", vm.submit_login().await);
        });
    }
}

#[wasm_bindgen(js_name = registerUser)]
pub fn register_user() {
    if let Some(vm) = view_model() {
        spawn_local(async move {
            log_outcome("AUTH", "registro", vm.submit_register().await);
        });
    }
}

#[wasm_bindgen(js_name = showDashboard)]
pub fn show_dashboard() {
    if let Some(vm) = view_model() {
        spawn_local(async move {
            log_outcome("APP", "dashboard", vm.show_dashboard().await);
        });
    }
}

#[wasm_bindgen(js_name = loadAvailableCars)]
pub fn load_available_cars() {
    if let Some(vm) = view_model() {
        spawn_local(async move {
            log_outcome("CARS", "carga de coches", vm.load_available_cars().await);
        });
    }
}

#[wasm_bindgen(js_name = loadRentalHistory)]
pub fn load_rental_history() {
    if let Some(vm) = view_model() {
        spawn_local(async move {
            log_outcome("RENTALS", "carga de historial", vm.load_rental_history().await);
        });
    }
}

/// También lo usan los botones "Rent" de la tabla de coches
#[wasm_bindgen(js_name = rentCar)]
pub fn rent_car(car_id: u32) {
    if let Some(vm) = view_model() {
        spawn_local(async move {
            log_outcome("RENT", "alquiler", vm.rent_car(car_id).await);
        });
    }
}

#[wasm_bindgen]
pub fn logout() {
    if let Some(vm) = view_model() {
        log_outcome("AUTH", "logout", vm.logout());
    }
}

#[wasm_bindgen(js_name = sanitize)]
pub fn sanitize_text(text: &str) -> String {
    utils::sanitize(text)
}
