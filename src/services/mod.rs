pub mod dialogs;
pub mod pywebview_bridge;
pub mod readiness;
pub mod rental_api;

pub use dialogs::{BrowserDialogs, Dialogs};
pub use pywebview_bridge::PywebviewBridge;
pub use readiness::{wait_until_ready, BrowserTimer, RetryPolicy, Timer};
pub use rental_api::{BridgeResult, RentalApi};
