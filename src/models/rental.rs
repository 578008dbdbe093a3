use serde::{Deserialize, Serialize};

/// Alquiler tal como lo devuelve `get_rentals`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Rental {
    /// Nombre del coche ("<make> <model>")
    pub car: String,
    /// Días
    pub duration: u32,
    #[serde(rename = "from")]
    pub start_date: String,
    #[serde(rename = "to")]
    pub return_date: String,
}
