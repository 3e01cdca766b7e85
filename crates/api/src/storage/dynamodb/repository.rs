//! DynamoDB repository implementation.
//!
//! Implements [`UserRepository`] from `users_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::delete_item::builders::DeleteItemFluentBuilder;
use aws_sdk_dynamodb::operation::get_item::builders::GetItemFluentBuilder;
use aws_sdk_dynamodb::operation::put_item::builders::PutItemFluentBuilder;
use aws_sdk_dynamodb::operation::scan::builders::ScanFluentBuilder;
use aws_sdk_dynamodb::operation::update_item::builders::UpdateItemFluentBuilder;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use users_core::storage::{Result, UserRepository};
use users_core::user::User;

use super::conversions::{
    id_key, item_to_optional_user, items_to_users, user_to_item, ATTR_ID, ATTR_NAME, EMAIL_VALUE,
    NAME_PLACEHOLDER, NAME_VALUE, UPDATE_EXPRESSION,
};
use super::error::map_sdk_error;
use crate::config::Config;

/// DynamoDB-based user repository.
///
/// Every request targets the table given at construction.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain with the configured region
    /// and, when set, a custom endpoint such as DynamoDB Local.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn scan_request(&self) -> ScanFluentBuilder {
        self.client.scan().table_name(&self.table_name)
    }

    fn get_item_request(&self, id: &str) -> GetItemFluentBuilder {
        self.client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, id_key(id))
    }

    fn put_item_request(&self, user: &User) -> PutItemFluentBuilder {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_to_item(user)))
    }

    fn update_item_request(&self, user: &User) -> UpdateItemFluentBuilder {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, id_key(&user.id))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names(NAME_PLACEHOLDER, ATTR_NAME)
            .expression_attribute_values(NAME_VALUE, AttributeValue::S(user.name.clone()))
            .expression_attribute_values(EMAIL_VALUE, AttributeValue::S(user.email.clone()))
    }

    fn delete_item_request(&self, id: &str) -> DeleteItemFluentBuilder {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, id_key(id))
    }
}

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        let result = self
            .scan_request()
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "Scan"))?;

        let users = items_to_users(result.items);
        tracing::debug!(count = users.len(), table = %self.table_name, "Scanned users");

        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let result = self
            .get_item_request(id)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "GetItem"))?;

        Ok(item_to_optional_user(result.item))
    }

    async fn save(&self, user: &User) -> Result<()> {
        self.put_item_request(user)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "PutItem"))?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<()> {
        self.update_item_request(user)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "UpdateItem"))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_item_request(id)
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "DeleteItem"))?;

        Ok(())
    }
}
