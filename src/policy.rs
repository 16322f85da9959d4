// Role-based access decisions and response shaping.
//
// Everything role-dependent funnels through here: the admin gate for
// privileged operations, the visibility rule narrowing supplier queries
// for non-admins, and the per-role projection of supplier records.

use crate::auth::jwt::AccessClaims;
use crate::db::suppliers::{SupplierFilter, SupplierRecord};
use crate::domain::Role;
use crate::errors::{AppError, Result};
use serde::Serialize;
use uuid::Uuid;

/// Gate for operations reserved to administrators
pub fn require_admin(claims: &AccessClaims) -> Result<()> {
    if claims.role != Role::Admin {
        tracing::warn!(
            username = %claims.username,
            "Privileged operation rejected for non-admin"
        );
        return Err(AppError::Forbidden);
    }
    Ok(())
}

/// Narrow a supplier query to what the role may see. Non-admins never see
/// blocked suppliers; the restriction lands in the query itself so result
/// counts and the empty-set check are computed over the visible set only.
pub fn apply_role_visibility(filter: &mut SupplierFilter, role: Role) {
    filter.exclude_blocked = role != Role::Admin;
}

/// Full supplier record plus a derived status, served to admins
#[derive(Debug, Serialize)]
pub struct FullSupplierView {
    pub id: Uuid,
    pub name: String,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub fiscal_address: String,
    pub service_type: String,
    pub severity: String,
    pub blocked: bool,
    pub status: &'static str,
}

/// Reduced field set served to operational users
#[derive(Debug, Serialize)]
pub struct RedactedSupplierView {
    pub name: String,
    pub service_type: String,
    pub severity: String,
}

/// Listing entry with a shape chosen by the caller's role
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SupplierView {
    Full(FullSupplierView),
    Redacted(RedactedSupplierView),
}

/// Project a supplier record into the view the role is entitled to.
/// Redaction drops fields entirely rather than blanking them.
pub fn project_supplier(role: Role, record: SupplierRecord) -> SupplierView {
    match role {
        Role::Admin => SupplierView::Full(FullSupplierView {
            status: if record.blocked { "Blocked" } else { "Active" },
            id: record.id,
            name: record.name,
            business_name: record.business_name,
            contact_name: record.contact_name,
            email: record.email,
            fiscal_address: record.fiscal_address,
            service_type: record.service_type,
            severity: record.severity,
            blocked: record.blocked,
        }),
        Role::Operational => SupplierView::Redacted(RedactedSupplierView {
            name: record.name,
            service_type: record.service_type,
            severity: record.severity,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_for(role: Role) -> AccessClaims {
        AccessClaims {
            user_id: Uuid::new_v4().to_string(),
            username: "tester".to_string(),
            role,
            exp: 4_102_444_800,
        }
    }

    fn sample_record(blocked: bool) -> SupplierRecord {
        SupplierRecord {
            id: Uuid::new_v4(),
            name: "Acme".to_string(),
            business_name: "Acme Corp".to_string(),
            contact_name: "Jane Roe".to_string(),
            email: "contact@acme.com".to_string(),
            fiscal_address: "123 Main St".to_string(),
            service_type: "Logistics".to_string(),
            severity: "high".to_string(),
            blocked,
        }
    }

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&claims_for(Role::Admin)).is_ok());
        assert!(matches!(
            require_admin(&claims_for(Role::Operational)).unwrap_err(),
            AppError::Forbidden
        ));
    }

    #[test]
    fn test_visibility_narrows_for_operational() {
        let mut filter = SupplierFilter::default();
        apply_role_visibility(&mut filter, Role::Operational);
        assert!(filter.exclude_blocked);

        apply_role_visibility(&mut filter, Role::Admin);
        assert!(!filter.exclude_blocked);
    }

    #[test]
    fn test_admin_projection_includes_status() {
        let view = project_supplier(Role::Admin, sample_record(true));
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["status"], "Blocked");
        assert_eq!(value["blocked"], true);
        assert_eq!(value["email"], "contact@acme.com");

        let view = project_supplier(Role::Admin, sample_record(false));
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["status"], "Active");
    }

    #[test]
    fn test_operational_projection_is_redacted() {
        let view = project_supplier(Role::Operational, sample_record(false));
        let value = serde_json::to_value(&view).unwrap();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(value["name"], "Acme");
        assert_eq!(value["service_type"], "Logistics");
        assert_eq!(value["severity"], "high");
        // Sensitive fields are absent, not blanked
        assert!(value.get("email").is_none());
        assert!(value.get("blocked").is_none());
        assert!(value.get("id").is_none());
    }
}
