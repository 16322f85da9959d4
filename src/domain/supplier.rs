use super::DomainError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Risk severity assigned to a supplier at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Highest,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Highest => "highest",
        }
    }

    /// Case-insensitive parse. The canonical lowercase form is what gets
    /// stored and compared, so mixed-case input never splits the data set.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "highest" => Ok(Severity::Highest),
            _ => Err(DomainError::InvalidSeverity),
        }
    }
}

/// Registered supplier record as persisted
#[derive(Debug, Clone, FromRow)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub fiscal_address: String,
    pub service_type_id: Uuid,
    pub severity: String,
    pub blocked: bool,
}

impl Supplier {
    /// Build a new unblocked supplier, validating email and severity.
    /// The id is assigned here; persistence happens separately.
    pub fn new(
        name: &str,
        business_name: &str,
        contact_name: &str,
        email: &str,
        fiscal_address: &str,
        service_type_id: Uuid,
        severity: &str,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Empty("Supplier name"));
        }
        if !is_valid_email(email) {
            return Err(DomainError::InvalidEmail);
        }
        let severity = Severity::parse(severity)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            business_name: business_name.trim().to_string(),
            contact_name: contact_name.trim().to_string(),
            email: email.to_string(),
            fiscal_address: fiscal_address.trim().to_string(),
            service_type_id,
            severity: severity.as_str().to_string(),
            blocked: false,
        })
    }
}

/// Structural check for a simple address pattern: a local part of word
/// characters and `_.+-`, one `@`, a dot-free domain label, then a dot and
/// a non-empty tail.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-'))
    {
        return false;
    }
    let Some((label, tail)) = domain.split_once('.') else {
        return false;
    };
    if label.is_empty() || tail.is_empty() {
        return false;
    }
    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return false;
    }
    tail.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_supplier(email: &str, severity: &str) -> Result<Supplier, DomainError> {
        Supplier::new(
            "Acme",
            "Acme Corp S.A.",
            "Jane Roe",
            email,
            "123 Main St",
            Uuid::new_v4(),
            severity,
        )
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("low").unwrap(), Severity::Low);
        assert_eq!(Severity::parse("HIGH").unwrap(), Severity::High);
        assert_eq!(Severity::parse("Highest").unwrap(), Severity::Highest);
        assert_eq!(
            Severity::parse("critical").unwrap_err(),
            DomainError::InvalidSeverity
        );
    }

    #[test]
    fn test_severity_canonical_form() {
        let supplier = sample_supplier("a@b.com", "MEDIUM").unwrap();
        assert_eq!(supplier.severity, "medium");
    }

    #[test]
    fn test_new_supplier_defaults_unblocked() {
        let supplier = sample_supplier("contact@acme.com", "high").unwrap();
        assert!(!supplier.blocked);
        assert_eq!(supplier.name, "Acme");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert_eq!(
            sample_supplier("not-an-email", "low").unwrap_err(),
            DomainError::InvalidEmail
        );
    }

    #[test]
    fn test_invalid_severity_rejected() {
        assert_eq!(
            sample_supplier("a@b.com", "extreme").unwrap_err(),
            DomainError::InvalidSeverity
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Supplier::new(
            "  ",
            "Acme Corp",
            "Jane Roe",
            "a@b.com",
            "123 Main St",
            Uuid::new_v4(),
            "low",
        );
        assert_eq!(result.unwrap_err(), DomainError::Empty("Supplier name"));
    }
}
