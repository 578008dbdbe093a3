// ============================================================================
// TABLES - Filas de las tablas de coches y de historial (sin DOM)
// ============================================================================
// Las filas son datos planos: placeholder, sanitizado y atributos se prueban
// sin navegador. `DomRentalView` las convierte en elementos <tr>.
// ============================================================================

use crate::models::{Car, CarId, Rental};
use crate::utils::{sanitize, MSG_NO_CARS, MSG_NO_RENTALS};

/// Las dos tablas tienen cuatro columnas
pub const TABLE_COLUMNS: u32 = 4;

/// Atributo del botón "Rent" con el id del coche
pub const CAR_ID_ATTRIBUTE: &str = "data-car-id";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    AvailableCars,
    RentalHistory,
}

impl Table {
    pub fn element_id(self) -> &'static str {
        match self {
            Table::AvailableCars => "available-cars-table",
            Table::RentalHistory => "rental-history-table",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableCell {
    Text(String),
    /// Mensaje centrado que ocupa las `TABLE_COLUMNS`
    Placeholder(String),
    RentButton(CarId),
}

pub type TableRow = Vec<TableCell>;

pub fn available_car_rows(cars: &[Car]) -> Vec<TableRow> {
    if cars.is_empty() {
        return vec![vec![TableCell::Placeholder(MSG_NO_CARS.to_string())]];
    }

    cars.iter()
        .map(|car| {
            vec![
                TableCell::Text(sanitize(&car.display_name())),
                TableCell::Text(car.car_type.clone()),
                TableCell::Text(car.year.to_string()),
                TableCell::RentButton(car.id),
            ]
        })
        .collect()
}

pub fn rental_history_rows(rentals: &[Rental]) -> Vec<TableRow> {
    if rentals.is_empty() {
        return vec![vec![TableCell::Placeholder(MSG_NO_RENTALS.to_string())]];
    }

    rentals
        .iter()
        .map(|rental| {
            vec![
                TableCell::Text(sanitize(&rental.car)),
                TableCell::Text(rental.duration.to_string()),
                TableCell::Text(rental.start_date.clone()),
                TableCell::Text(rental.return_date.clone()),
            ]
        })
        .collect()
}

/// Atributos del <td> de cada celda
pub fn cell_attributes(cell: &TableCell) -> Vec<(&'static str, String)> {
    match cell {
        TableCell::Placeholder(_) => vec![
            ("colspan", TABLE_COLUMNS.to_string()),
            ("style", "text-align:center;".to_string()),
        ],
        TableCell::Text(_) | TableCell::RentButton(_) => Vec::new(),
    }
}

pub fn rent_button_attributes(car_id: CarId) -> Vec<(&'static str, String)> {
    vec![
        ("type", "button".to_string()),
        (CAR_ID_ATTRIBUTE, car_id.to_string()),
    ]
}

/// Id guardado en `data-car-id`
pub fn parse_car_id(raw: &str) -> Option<CarId> {
    raw.trim().parse().ok()
}

#[cfg(test)]
pub fn rent_buttons(rows: &[TableRow]) -> Vec<CarId> {
    rows.iter()
        .flatten()
        .filter_map(|cell| match cell {
            TableCell::RentButton(id) => Some(*id),
            _ => None,
        })
        .collect()
}
