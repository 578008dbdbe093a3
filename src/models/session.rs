/// Usuario identificado, tal como lo guarda el front-end
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Session {
    pub email: String,
    pub display_name: String,
}

impl Session {
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}
