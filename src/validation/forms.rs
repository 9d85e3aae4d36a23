use crate::core::error::ServiceError;
use crate::models::item::{Category, ReportForm, UploadedImage};
use crate::models::user::{NewUser, REG_NO_LENGTH};

/// Signup input that has passed all field checks.
#[derive(Debug, Clone)]
pub struct ValidatedSignup {
    pub reg_no: String,
    pub name: String,
    pub contact: String,
    pub department: String,
    pub password: String,
}

/// Report input that has passed the required-field checks, category parsed.
#[derive(Debug)]
pub struct ValidatedReport {
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub category: Category,
    pub image: Option<UploadedImage>,
}

pub fn validate_signup(form: &NewUser) -> Result<ValidatedSignup, ServiceError> {
    let reg_no = form.reg_no.trim().to_string();

    if reg_no.len() != REG_NO_LENGTH {
        return Err(ServiceError::Validation(format!(
            "Registration number must be {} characters.",
            REG_NO_LENGTH
        )));
    }

    let name = form.name.trim().to_string();
    let contact = form.contact.trim().to_string();
    let department = form.department.trim().to_string();

    if name.is_empty() || contact.is_empty() || department.is_empty() {
        return Err(ServiceError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
    }

    if form.password.len() < 6 {
        return Err(ServiceError::Validation(
            "Password must be at least 6 characters long.".to_string(),
        ));
    }

    if form.password != form.confirm_password {
        return Err(ServiceError::Validation(
            "Passwords do not match.".to_string(),
        ));
    }

    Ok(ValidatedSignup {
        reg_no,
        name,
        contact,
        department,
        password: form.password.clone(),
    })
}

pub fn validate_report(form: ReportForm) -> Result<ValidatedReport, ServiceError> {
    let name = form.name.trim().to_string();
    let description = form.description.trim().to_string();
    let location = form.location.trim().to_string();
    let contact = form.contact.trim().to_string();

    if name.is_empty() || description.is_empty() || location.is_empty() || form.category.is_empty()
    {
        return Err(ServiceError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
    }

    let category = form
        .category
        .parse::<Category>()
        .map_err(ServiceError::Validation)?;

    Ok(ValidatedReport {
        name,
        description,
        location,
        contact,
        category,
        image: form.image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_form() -> NewUser {
        NewUser {
            reg_no: "B25ICT0123456".to_string(),
            name: "Test User".to_string(),
            contact: "03001234567".to_string(),
            department: "ICT".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    fn report_form() -> ReportForm {
        ReportForm {
            name: "Black Wallet".to_string(),
            description: "Leather wallet".to_string(),
            location: "Library".to_string(),
            contact: "03001234567".to_string(),
            category: "Wallet".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_valid_signup_passes() {
        let validated = validate_signup(&signup_form()).unwrap();
        assert_eq!(validated.reg_no, "B25ICT0123456");
    }

    #[test]
    fn test_signup_trims_fields() {
        let mut form = signup_form();
        form.reg_no = " B25ICT0123456 ".to_string();
        form.name = "  Test User ".to_string();

        let validated = validate_signup(&form).unwrap();
        assert_eq!(validated.reg_no, "B25ICT0123456");
        assert_eq!(validated.name, "Test User");
    }

    #[test]
    fn test_signup_rejects_wrong_reg_no_length() {
        let mut form = signup_form();
        form.reg_no = "B25ICT012".to_string();
        assert!(matches!(
            validate_signup(&form),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn test_signup_rejects_short_password() {
        let mut form = signup_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        assert!(validate_signup(&form).is_err());
    }

    #[test]
    fn test_signup_rejects_password_mismatch() {
        let mut form = signup_form();
        form.confirm_password = "different".to_string();
        assert!(validate_signup(&form).is_err());
    }

    #[test]
    fn test_valid_report_passes() {
        let validated = validate_report(report_form()).unwrap();
        assert_eq!(validated.category, Category::Wallet);
    }

    #[test]
    fn test_report_rejects_blank_required_fields() {
        for field in ["name", "description", "location", "category"] {
            let mut form = report_form();
            match field {
                "name" => form.name = "  ".to_string(),
                "description" => form.description = String::new(),
                "location" => form.location = String::new(),
                _ => form.category = String::new(),
            }
            assert!(
                validate_report(form).is_err(),
                "blank {} should fail validation",
                field
            );
        }
    }

    #[test]
    fn test_report_rejects_unknown_category() {
        let mut form = report_form();
        form.category = "Umbrella".to_string();
        assert!(validate_report(form).is_err());
    }
}
