//! User data model.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{BaseEntity, Entity};
use super::validation::ValidationErrors;

/// Application user.
///
/// ## Invariants
/// - `name`, `surname` and `user_name` are non-empty once validated.
/// - `base` is owned by storage; client-supplied values are ignored.
///
/// # Examples
/// ```
/// use finapp::domain::{Entity, User};
///
/// let user: User = serde_json::from_str(
///     r#"{"name":"Ana","surname":"Diaz","userName":"adiaz"}"#,
/// )
/// .expect("valid payload");
/// assert!(user.validate().is_ok());
/// assert!(user.email.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Key and timestamps.
    #[serde(flatten)]
    pub base: BaseEntity<i32>,
    /// Given name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Family name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub surname: String,
    /// Login handle.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_name: String,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// National identity document number.
    #[serde(default)]
    pub document_id: Option<String>,
}

/// Read a required string, treating an explicit `null` like an absent field
/// so both reach [`Entity::validate`].
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Build an unsaved user from its required fields.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            base: BaseEntity::default(),
            name: name.into(),
            surname: surname.into(),
            user_name: user_name.into(),
            email: None,
            document_id: None,
        }
    }
}

impl Entity for User {
    type Key = i32;

    const RESOURCE: &'static str = "user";

    fn base(&self) -> &BaseEntity<i32> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseEntity<i32> {
        &mut self.base
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require_non_empty("name", &self.name);
        errors.require_non_empty("surname", &self.surname);
        errors.require_non_empty("userName", &self.user_name);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn serialises_camel_case_with_flattened_base() {
        let mut user = User::new("Ana", "Diaz", "adiaz");
        user.base.id = 3;
        user.document_id = Some("X123".to_owned());

        let value = serde_json::to_value(&user).expect("serialise");

        assert_eq!(value["id"], 3);
        assert_eq!(value["userName"], "adiaz");
        assert_eq!(value["documentId"], "X123");
        assert!(value["email"].is_null());
        assert!(value.get("createdDate").is_some());
        assert!(value.get("updatedDate").is_some());
    }

    #[rstest]
    fn deserialises_payload_with_client_base_fields() {
        let payload = json!({
            "id": 99,
            "name": "Ana",
            "surname": "Diaz",
            "userName": "adiaz",
            "email": "ana@example.com",
        });

        let user: User = serde_json::from_value(payload).expect("deserialise");

        assert_eq!(user.id(), 99);
        assert_eq!(user.email.as_deref(), Some("ana@example.com"));
        assert!(user.document_id.is_none());
    }

    #[rstest]
    #[case(User::new("", "Diaz", "adiaz"), &["name"])]
    #[case(User::new("Ana", " ", "adiaz"), &["surname"])]
    #[case(User::new("", "", ""), &["name", "surname", "userName"])]
    fn validate_lists_every_blank_required_field(
        #[case] user: User,
        #[case] expected: &[&str],
    ) {
        let errors = user.validate().expect_err("validation should fail");
        let fields: Vec<&str> = errors
            .violations()
            .iter()
            .map(|violation| violation.field.as_str())
            .collect();

        assert_eq!(fields, expected);
    }

    #[rstest]
    fn null_required_fields_deserialise_as_blank() {
        let payload = json!({ "name": null, "surname": "Diaz", "userName": null });

        let user: User = serde_json::from_value(payload).expect("nulls are accepted");

        assert!(user.name.is_empty());
        assert!(user.user_name.is_empty());
        assert!(user.validate().is_err());
    }

    #[rstest]
    fn optional_fields_are_not_required() {
        assert!(User::new("Ana", "Diaz", "adiaz").validate().is_ok());
    }
}
