use super::DomainError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Category a supplier provides services under. Created on demand the first
/// time a supplier registers with a new category name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceType {
    pub id: Uuid,
    pub name: String,
}

impl ServiceType {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Empty("Service type name"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service_type() {
        let service_type = ServiceType::new("Logistics").unwrap();
        assert_eq!(service_type.name, "Logistics");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            ServiceType::new("   ").unwrap_err(),
            DomainError::Empty("Service type name")
        );
    }
}
