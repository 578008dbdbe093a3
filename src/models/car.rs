use serde::{Deserialize, Serialize};

pub type CarId = u32;

/// Coche ofrecido por la API del host (solo lectura aquí)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Car {
    pub id: CarId,
    pub make: String,
    pub model: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub year: i32,
}

impl Car {
    /// "<make> <model>" sin sanitizar
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}
