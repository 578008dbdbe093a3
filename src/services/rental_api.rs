// ============================================================================
// RENTAL API - Contrato del servicio remoto (SOLO comunicación)
// ============================================================================

use async_trait::async_trait;
use crate::error::BridgeError;
use crate::models::{ActionResponse, Car, CarId, LoginResponse, Rental};

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Las cinco operaciones del host más la comprobación de disponibilidad.
///
/// Las implementaciones solo mueven datos: sin validación ni estado.
#[async_trait(?Send)]
pub trait RentalApi {
    /// `true` cuando el host ya inyectó su objeto API
    fn is_ready(&self) -> bool;

    async fn login(&self, email: &str, password: &str) -> BridgeResult<LoginResponse>;

    /// Orden de argumentos: (name, password, email)
    async fn register(&self, name: &str, password: &str, email: &str) -> BridgeResult<ActionResponse>;

    /// `null` del host se decodifica como lista vacía
    async fn get_available_cars(&self) -> BridgeResult<Vec<Car>>;

    async fn rent_car(&self, car_id: CarId, email: &str, days: u32) -> BridgeResult<ActionResponse>;

    async fn get_rentals(&self, email: &str) -> BridgeResult<Vec<Rental>>;
}
