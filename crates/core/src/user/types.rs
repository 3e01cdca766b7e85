use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::serde::deserialize_string_or_empty;

/// A user record.
///
/// Every field is optional on the wire; absent or `null` values become
/// empty strings. A persisted user always has a non-blank `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Field layout of a user body. Only ever fed a JSON object.
#[derive(Deserialize)]
struct UserFields {
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    id: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_empty")]
    email: String,
}

// A derived struct visitor also accepts sequences; a record must be an object.
impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let UserFields { id, name, email } =
            serde_json::from_value(Value::Object(object)).map_err(de::Error::custom)?;

        Ok(Self { id, name, email })
    }
}

impl User {
    /// Creates a user with the given fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Parses a user from a JSON request body.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Assigns a fresh UUID v4 when the id is blank.
    pub fn with_generated_id(mut self) -> Self {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
        self
    }

    /// Replaces the id, e.g. with the one taken from the request path.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
