//! Authentication request and response models.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::professionals::{PlanTier, Profession, Professional};

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Validates the credentials before any request is sent.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        if !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invalid email address".to_string(),
            )));
        }
        if self.password.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "password".to_string(),
            )));
        }
        Ok(())
    }
}

/// Account registration fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profession: Profession,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Registration {
    /// Validates the registration before any request is sent.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        if !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invalid email address".to_string(),
            )));
        }
        if self.password.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "password".to_string(),
            )));
        }
        Ok(())
    }

    /// Validates the registration together with the repeated password from
    /// the form.
    pub fn validate_with_confirmation(&self, password_confirmation: &str) -> Result<()> {
        self.validate()?;
        if self.password != password_confirmation {
            return Err(Error::Validation(ValidationError::PasswordMismatch));
        }
        Ok(())
    }
}

/// Backend response to login and register.
///
/// The token field is snake_case on the wire, unlike every other payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub professional: ProfessionalSummary,
}

/// The abbreviated profile embedded in an [`AuthResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalSummary {
    pub id: String,
    pub email: String,
    pub name: String,
    pub profession: Profession,
    pub plan: PlanTier,
}

impl ProfessionalSummary {
    /// Expands the summary into a displayable profile. Fields the summary
    /// does not carry stay empty until the next full profile fetch.
    pub fn into_professional(self) -> Professional {
        Professional {
            id: self.id,
            name: self.name,
            email: self.email,
            profession: Some(self.profession),
            register_number: None,
            clinic_name: None,
            phone: None,
            logo_url: None,
            brand_color: None,
            locale: None,
            plan: self.plan,
            plan_status: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            name: "Dr. João Silva".to_string(),
            email: "joao.silva@example.com".to_string(),
            password: "hunter22".to_string(),
            profession: Profession::Physiotherapist,
            register_number: None,
            clinic_name: None,
            phone: None,
        }
    }

    #[test]
    fn test_credentials_require_email_and_password() {
        let creds = Credentials {
            email: String::new(),
            password: "secret".to_string(),
        };
        assert!(creds.validate().is_err());

        let creds = Credentials {
            email: "joao.silva@example.com".to_string(),
            password: String::new(),
        };
        assert!(creds.validate().is_err());

        let creds = Credentials {
            email: "joao.silva@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_credentials_reject_malformed_email() {
        let creds = Credentials {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(matches!(
            creds.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_registration_password_confirmation() {
        let reg = registration();
        assert!(reg.validate_with_confirmation("hunter22").is_ok());
        assert!(matches!(
            reg.validate_with_confirmation("hunter23"),
            Err(Error::Validation(ValidationError::PasswordMismatch))
        ));
    }

    #[test]
    fn test_auth_response_wire_shape() {
        let json = r#"{
            "access_token": "aaa.bbb.ccc",
            "professional": {
                "id": "prof-001",
                "email": "joao.silva@example.com",
                "name": "Dr. João Silva",
                "profession": "PHYSIOTHERAPIST",
                "plan": "PROFESSIONAL"
            }
        }"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "aaa.bbb.ccc");
        assert_eq!(response.professional.plan, PlanTier::Professional);

        let professional = response.professional.into_professional();
        assert_eq!(professional.profession, Some(Profession::Physiotherapist));
        assert!(professional.clinic_name.is_none());
    }
}
