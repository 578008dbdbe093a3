pub mod rental_viewmodel;

pub use rental_viewmodel::RentalViewModel;
