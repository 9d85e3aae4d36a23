use serde::{Deserialize, Serialize};

/// Length of a campus registration number.
pub const REG_NO_LENGTH: usize = 13;

/// A registered user as stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub reg_no: String,
    pub name: String,
    pub contact: String,
    pub department: String,
    pub password_hash: String,
}

impl User {
    /// Strip the password hash before the record leaves the auth layer.
    pub fn sanitized(&self) -> PublicUser {
        PublicUser {
            reg_no: self.reg_no.clone(),
            name: self.name.clone(),
            contact: self.contact.clone(),
            department: self.department.clone(),
        }
    }
}

/// A user record with the password hash removed. This is the only user
/// shape that crosses the service boundary or gets persisted in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub reg_no: String,
    pub name: String,
    pub contact: String,
    pub department: String,
}

/// Signup form input, plaintext password included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub reg_no: String,
    pub name: String,
    pub contact: String,
    pub department: String,
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_drops_password_hash() {
        let user = User {
            reg_no: "B25ICT0123456".to_string(),
            name: "Test User".to_string(),
            contact: "03001234567".to_string(),
            department: "ICT".to_string(),
            password_hash: "$2b$10$abcdefg".to_string(),
        };

        let public = user.sanitized();
        assert_eq!(public.reg_no, user.reg_no);

        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
