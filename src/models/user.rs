use serde::{Deserialize, Serialize};

/// A user record as served by the provider and decoded by the client.
///
/// The serialized field names are shared by both sides of the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// Role tag such as "admin" or "blocked"; carried as data only
    #[serde(rename = "type")]
    pub user_type: String,
}

impl User {
    pub fn new(
        id: i64,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        user_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: username.into(),
            user_type: user_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_field_names() {
        let user = User::new(10, "sally", "Jean-Marie", "de La Beaujardière😀😍", "admin");
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["id"], 10);
        assert_eq!(value["firstName"], "Jean-Marie");
        assert_eq!(value["lastName"], "de La Beaujardière😀😍");
        assert_eq!(value["username"], "sally");
        assert_eq!(value["type"], "admin");
        assert!(value.get("user_type").is_none());
    }

    #[test]
    fn test_user_decodes_provider_payload() {
        let json = r#"{"firstName":"Jean-Marie","lastName":"de La Beaujardière😀😍","username":"sally","type":"admin","id":10}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 10);
        assert_eq!(user.last_name, "de La Beaujardière😀😍");
        assert_eq!(user.user_type, "admin");
    }
}
