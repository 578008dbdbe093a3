// ============================================================================
// CONSTANTS - Claves de localStorage, ids del DOM y mensajes al usuario
// ============================================================================

// localStorage
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const USER_NAME_KEY: &str = "userName";
/// Clave antigua: solo se borra en el logout, nunca se escribe
pub const USER_PASSWORD_KEY: &str = "userPassword";

// Inputs de formularios
pub const LOGIN_EMAIL_ID: &str = "login-email";
pub const LOGIN_PASSWORD_ID: &str = "login-password";
pub const REGISTER_NAME_ID: &str = "register-name";
pub const REGISTER_EMAIL_ID: &str = "register-email";
pub const REGISTER_PASSWORD_ID: &str = "register-password";

pub const AUTH_INPUT_IDS: [&str; 5] = [
    LOGIN_EMAIL_ID,
    LOGIN_PASSWORD_ID,
    REGISTER_NAME_ID,
    REGISTER_EMAIL_ID,
    REGISTER_PASSWORD_ID,
];

// Botones enlazados al arrancar (opcionales en la página)
pub const LOGIN_BUTTON_ID: &str = "login-button";
pub const REGISTER_BUTTON_ID: &str = "register-button";
pub const LOGOUT_BUTTON_ID: &str = "logout-button";

pub const WELCOME_NAME_ID: &str = "welcome-name";
pub const DEFAULT_DISPLAY_NAME: &str = "User";

// Mensajes
pub const MSG_EMAIL_REQUIRED: &str = "Please enter your email.";
pub const MSG_REGISTER_FIELDS_REQUIRED: &str = "Please enter all fields: name, email, and password.";
pub const MSG_LOGIN_FAILED: &str = "Login failed. Check console for details.";
pub const MSG_REGISTER_FAILED: &str = "Registration failed. Check console for details.";
pub const MSG_RENT_PROMPT: &str = "How many days do you want to rent this car?";
pub const MSG_INVALID_DURATION: &str = "Invalid duration.";
pub const MSG_LOGIN_REQUIRED: &str = "You must be logged in to rent a car.";
pub const MSG_RENT_FAILED: &str = "Failed to rent car. Check console for details.";
pub const MSG_NO_CARS: &str = "No cars available at the moment.";
pub const MSG_NO_RENTALS: &str = "No rentals yet.";
pub const RENT_BUTTON_LABEL: &str = "Rent";
