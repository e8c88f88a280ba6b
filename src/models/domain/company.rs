use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompanySettings {
    pub allow_self_registration: bool,
    pub default_test_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub domain: Option<String>,
    pub logo: Option<String>,
    pub admin_id: String,
    pub settings: Option<CompanySettings>,
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// New companies start with self-registration disabled.
    pub fn new(name: &str, admin_id: &str, domain: Option<String>, logo: Option<String>) -> Self {
        Company {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            domain,
            logo,
            admin_id: admin_id.to_string(),
            settings: Some(CompanySettings::default()),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_company_disables_self_registration() {
        let company = Company::new("Acme", "admin-1", None, None);

        let settings = company.settings.expect("settings should be initialised");
        assert!(!settings.allow_self_registration);
        assert!(settings.default_test_id.is_none());
        assert_eq!(company.admin_id, "admin-1");
    }
}
