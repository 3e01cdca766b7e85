//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! [`User`]. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use users_core::user::User;

/// Partition key attribute.
pub const ATTR_ID: &str = "Id";
pub const ATTR_NAME: &str = "name";
pub const ATTR_EMAIL: &str = "email";

/// `name` is a DynamoDB reserved word, so update expressions alias it.
pub const UPDATE_EXPRESSION: &str = "SET #name = :name, email = :email";
pub const NAME_PLACEHOLDER: &str = "#name";
pub const NAME_VALUE: &str = ":name";
pub const EMAIL_VALUE: &str = ":email";

/// Key attribute value for a user id.
pub fn id_key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

/// Convert a User to DynamoDB item.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ATTR_ID.to_string(), AttributeValue::S(user.id.clone())),
        (ATTR_NAME.to_string(), AttributeValue::S(user.name.clone())),
        (ATTR_EMAIL.to_string(), AttributeValue::S(user.email.clone())),
    ])
}

/// Convert a DynamoDB item to User.
///
/// Missing or non-string attributes become empty strings.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> User {
    User {
        id: get_string_or_empty(item, ATTR_ID),
        name: get_string_or_empty(item, ATTR_NAME),
        email: get_string_or_empty(item, ATTR_EMAIL),
    }
}

/// Convert a GetItem result to User.
///
/// DynamoDB omits the item for an unknown key; an empty item counts as absent too.
pub fn item_to_optional_user(item: Option<HashMap<String, AttributeValue>>) -> Option<User> {
    item.filter(|item| !item.is_empty())
        .map(|item| item_to_user(&item))
}

/// Convert Scan result items to users, preserving store order.
pub fn items_to_users(items: Option<Vec<HashMap<String, AttributeValue>>>) -> Vec<User> {
    items.unwrap_or_default().iter().map(item_to_user).collect()
}

fn get_string_or_empty(item: &HashMap<String, AttributeValue>, key: &str) -> String {
    item.get(key)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_to_item_has_exact_attributes() {
        let item = user_to_item(&User::new("321", "Bob", "bob@example.com"));

        assert_eq!(item.len(), 3);
        assert_eq!(item.get("Id"), Some(&AttributeValue::S("321".to_string())));
        assert_eq!(item.get("name"), Some(&AttributeValue::S("Bob".to_string())));
        assert_eq!(
            item.get("email"),
            Some(&AttributeValue::S("bob@example.com".to_string()))
        );
    }

    #[test]
    fn test_item_to_user() {
        let item = HashMap::from([
            ("Id".to_string(), AttributeValue::S("1".to_string())),
            ("name".to_string(), AttributeValue::S("John".to_string())),
            (
                "email".to_string(),
                AttributeValue::S("john@example.com".to_string()),
            ),
        ]);

        assert_eq!(
            item_to_user(&item),
            User::new("1", "John", "john@example.com")
        );
    }

    #[test]
    fn test_item_to_user_defaults_missing_attributes() {
        let item = HashMap::from([("Id".to_string(), AttributeValue::S("7".to_string()))]);

        let user = item_to_user(&item);
        assert_eq!(user, User::new("7", "", ""));
    }

    #[test]
    fn test_item_to_user_ignores_non_string_attributes() {
        let item = HashMap::from([
            ("Id".to_string(), AttributeValue::S("7".to_string())),
            ("name".to_string(), AttributeValue::N("42".to_string())),
        ]);

        assert_eq!(item_to_user(&item).name, "");
    }

    fn item(id: &str, name: &str, email: &str) -> HashMap<String, AttributeValue> {
        user_to_item(&User::new(id, name, email))
    }

    #[test]
    fn test_item_to_optional_user_found() {
        let user = item_to_optional_user(Some(item("123", "Alice", "alice@example.com")));

        assert_eq!(user, Some(User::new("123", "Alice", "alice@example.com")));
    }

    #[test]
    fn test_item_to_optional_user_absent() {
        assert_eq!(item_to_optional_user(None), None);
    }

    #[test]
    fn test_item_to_optional_user_empty_item() {
        assert_eq!(item_to_optional_user(Some(HashMap::new())), None);
    }

    #[test]
    fn test_items_to_users_preserves_order() {
        let users = items_to_users(Some(vec![
            item("2", "Bob", "bob@example.com"),
            item("1", "John", "john@example.com"),
        ]));

        assert_eq!(
            users,
            vec![
                User::new("2", "Bob", "bob@example.com"),
                User::new("1", "John", "john@example.com"),
            ]
        );
    }

    #[test]
    fn test_items_to_users_without_items() {
        assert!(items_to_users(None).is_empty());
        assert!(items_to_users(Some(Vec::new())).is_empty());
    }

    #[test]
    fn test_lowercase_id_attribute_is_not_the_key() {
        let item = HashMap::from([("id".to_string(), AttributeValue::S("7".to_string()))]);

        assert_eq!(item_to_user(&item).id, "");
    }
}
