//! User record types

use serde::{
    de::{self, IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;

/// A stored user record
///
/// The `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Contact email (not validated, not unique)
    pub email: String,
}

/// Request body for creating or replacing a user
///
/// Decoding is lenient:
/// - keys match `name` and `email` ignoring ASCII case
/// - any `id` (or other unknown field) is ignored
/// - missing or `null` fields decode as empty strings
/// - a `null` body decodes as a user with both fields empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach an identifier, producing the stored form of this record
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

impl<'de> Deserialize<'de> for NewUser {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NewUserVisitor)
    }
}

struct NewUserVisitor;

impl<'de> Visitor<'de> for NewUserVisitor {
    type Value = NewUser;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user object or null")
    }

    fn visit_unit<E>(self) -> Result<NewUser, E>
    where
        E: de::Error,
    {
        Ok(NewUser::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<NewUser, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut user = NewUser::default();

        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("name") {
                &mut user.name
            } else if key.eq_ignore_ascii_case("email") {
                &mut user.email
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            // Later duplicates win; null leaves the field as it was
            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_ignores_id() {
        let payload: NewUser =
            serde_json::from_str(r#"{"id": 42, "name": "Alice", "email": "a@x.com"}"#).unwrap();
        assert_eq!(payload, NewUser::new("Alice", "a@x.com"));
    }

    #[test]
    fn test_new_user_missing_fields_default_to_empty() {
        let payload: NewUser = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();
        assert_eq!(payload.name, "Bob");
        assert_eq!(payload.email, "");

        let empty: NewUser = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, NewUser::default());
    }

    #[test]
    fn test_new_user_rejects_wrong_types() {
        assert!(serde_json::from_str::<NewUser>(r#"{"name": 5}"#).is_err());
        assert!(serde_json::from_str::<NewUser>(r#"["Alice", "a@x.com"]"#).is_err());
        assert!(serde_json::from_str::<NewUser>(r#""Alice""#).is_err());
    }

    #[test]
    fn test_new_user_keys_ignore_case() {
        let payload: NewUser =
            serde_json::from_str(r#"{"Name": "Alice", "EMAIL": "a@x.com"}"#).unwrap();
        assert_eq!(payload, NewUser::new("Alice", "a@x.com"));
    }

    #[test]
    fn test_new_user_null_body_and_fields() {
        let payload: NewUser = serde_json::from_str("null").unwrap();
        assert_eq!(payload, NewUser::default());

        let payload: NewUser =
            serde_json::from_str(r#"{"name": null, "email": "a@x.com"}"#).unwrap();
        assert_eq!(payload, NewUser::new("", "a@x.com"));
    }

    #[test]
    fn test_new_user_last_duplicate_wins() {
        let payload: NewUser = serde_json::from_str(r#"{"name": "a", "Name": "b"}"#).unwrap();
        assert_eq!(payload.name, "b");
    }

    #[test]
    fn test_user_serialization_shape() {
        let user = NewUser::new("Alice", "a@x.com").with_id(1);
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Alice", "email": "a@x.com"})
        );
    }
}
