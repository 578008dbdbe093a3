// ============================================================================
// PYWEBVIEW BRIDGE - Llamadas a window.pywebview.api
// ============================================================================
// Cada método del host devuelve una promesa; los resultados se decodifican
// con serde_wasm_bindgen en los modelos compartidos.
// ============================================================================

use async_trait::async_trait;
use js_sys::{Array, Function, Promise, Reflect};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use crate::error::{describe_js_value, BridgeError};
use crate::models::{ActionResponse, Car, CarId, LoginResponse, Rental};
use crate::services::rental_api::{BridgeResult, RentalApi};

const BRIDGE_OBJECT: &str = "pywebview";
const API_OBJECT: &str = "api";

/// Cliente del bridge - stateless
#[derive(Clone, Default)]
pub struct PywebviewBridge;

impl PywebviewBridge {
    pub fn new() -> Self {
        Self
    }

    /// `window.pywebview.api`, si existen los dos niveles
    fn api_object() -> Option<JsValue> {
        let window = web_sys::window()?;
        let bridge = Reflect::get(&window, &JsValue::from_str(BRIDGE_OBJECT)).ok()?;
        if bridge.is_undefined() || bridge.is_null() {
            return None;
        }
        let api = Reflect::get(&bridge, &JsValue::from_str(API_OBJECT)).ok()?;
        if api.is_undefined() || api.is_null() {
            return None;
        }
        Some(api)
    }

    async fn invoke(&self, method: &'static str, args: Array) -> BridgeResult<JsValue> {
        let api = Self::api_object().ok_or(BridgeError::NotInjected)?;

        let function = Reflect::get(&api, &JsValue::from_str(method))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or(BridgeError::MissingMethod(method))?;

        log::debug!("🌉 [BRIDGE] -> {}", method);

        let returned = function.apply(&api, &args).map_err(|e| BridgeError::Call {
            method,
            message: describe_js_value(&e),
        })?;

        // Promise.resolve también acepta valores que no son promesas
        let settled = JsFuture::from(Promise::resolve(&returned))
            .await
            .map_err(|e| BridgeError::Call {
                method,
                message: describe_js_value(&e),
            })?;

        log::debug!("🌉 [BRIDGE] <- {}", method);
        Ok(settled)
    }

    async fn call<T: DeserializeOwned>(&self, method: &'static str, args: Array) -> BridgeResult<T> {
        let value = self.invoke(method, args).await?;
        serde_wasm_bindgen::from_value(value).map_err(|e| BridgeError::Malformed {
            method,
            message: e.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl RentalApi for PywebviewBridge {
    fn is_ready(&self) -> bool {
        Self::api_object().is_some()
    }

    async fn login(&self, email: &str, password: &str) -> BridgeResult<LoginResponse> {
        let args = Array::of2(&JsValue::from_str(email), &JsValue::from_str(password));
        self.call("login", args).await
    }

    async fn register(&self, name: &str, password: &str, email: &str) -> BridgeResult<ActionResponse> {
        let args = Array::of3(
            &JsValue::from_str(name),
            &JsValue::from_str(password),
            &JsValue::from_str(email),
        );
        self.call("register", args).await
    }

    async fn get_available_cars(&self) -> BridgeResult<Vec<Car>> {
        let cars: Option<Vec<Car>> = self.call("get_available_cars", Array::new()).await?;
        Ok(cars.unwrap_or_default())
    }

    async fn rent_car(&self, car_id: CarId, email: &str, days: u32) -> BridgeResult<ActionResponse> {
        let args = Array::of3(
            &JsValue::from(car_id),
            &JsValue::from_str(email),
            &JsValue::from(days),
        );
        self.call("rent_car", args).await
    }

    async fn get_rentals(&self, email: &str) -> BridgeResult<Vec<Rental>> {
        let rentals: Option<Vec<Rental>> =
            self.call("get_rentals", Array::of1(&JsValue::from_str(email))).await?;
        Ok(rentals.unwrap_or_default())
    }
}
