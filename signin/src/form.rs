use serde::{Deserialize, Serialize};

/// Fields of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Raw values typed by the user. Nothing here is ever persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
}

impl FormState {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// The pair sent to the authentication service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Keep the password out of the logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_only_the_given_field() {
        let mut form = FormState::default();
        form.set(Field::Email, "a@b.co".to_string());
        assert_eq!(form.get(Field::Email), "a@b.co");
        assert_eq!(form.get(Field::Password), "");

        form.set(Field::Password, "secret1".to_string());
        assert_eq!(form, FormState::new("a@b.co", "secret1"));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = FormState::new("a@b.co", "secret1").credentials();
        let printed = format!("{:?}", creds);
        assert!(printed.contains("a@b.co"));
        assert!(!printed.contains("secret1"));
    }

    #[test]
    fn credentials_serialization() {
        let creds = FormState::new("a@b.co", "secret1").credentials();
        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            serde_json::json!({"email": "a@b.co", "password": "secret1"})
        );
    }
}
