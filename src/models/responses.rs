use serde::{Deserialize, Serialize};

/// Respuesta de `login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Respuesta de `register` y `rent_car`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
impl LoginResponse {
    pub fn accepted(name: &str) -> Self {
        Self {
            success: true,
            name: Some(name.to_string()),
            message: None,
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            name: None,
            message: Some(message.to_string()),
        }
    }
}

#[cfg(test)]
impl ActionResponse {
    pub fn accepted(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
        }
    }
}
