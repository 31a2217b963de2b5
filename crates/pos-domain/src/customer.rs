use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Registro de cliente: inmutable una vez creado, ids secuenciales desde 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: u32,
    name: String,
    phone: String,
    #[serde(default)]
    email: Option<String>,
}

impl Customer {
    pub fn new(
        id: u32,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(DomainError::validation("name and phone are required"));
        }
        let email = email.map(str::trim).filter(|e| !e.is_empty()).map(str::to_string);
        Ok(Customer { id, name: name.to_string(), phone: phone.to_string(), email })
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn phone(&self) -> &str {
        &self.phone
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requiere_nombre_y_telefono() {
        assert!(Customer::new(1, "", "9999", None).is_err());
        assert!(Customer::new(1, "Asha", "  ", None).is_err());
        let c = Customer::new(1, " Asha ", "9999", Some("")).unwrap();
        assert_eq!(c.name(), "Asha");
        assert_eq!(c.email(), None, "email vacío se normaliza a None");
    }
}
