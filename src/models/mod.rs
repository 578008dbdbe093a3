pub mod car;
pub mod rental;
pub mod responses;
pub mod session;

pub use car::{Car, CarId};
pub use rental::Rental;
pub use responses::{ActionResponse, LoginResponse};
pub use session::Session;
