use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::errors::internal::InternalError;
use crate::types::db::widget::{self, Entity as Widget};

pub struct WidgetStore {
    db: DatabaseConnection,
}

impl WidgetStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add(
        &self,
        user_id: &str,
        widget_type: &str,
        widget_data: Option<String>,
        display_order: i32,
    ) -> Result<widget::Model, InternalError> {
        let row = widget::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            widget_type: Set(widget_type.to_string()),
            widget_data: Set(widget_data),
            display_order: Set(display_order),
            created_at: Set(Utc::now().timestamp()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert widget", e))
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<widget::Model>, InternalError> {
        Widget::find()
            .filter(widget::Column::UserId.eq(user_id))
            .order_by_asc(widget::Column::DisplayOrder)
            .order_by_asc(widget::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list widgets", e))
    }

    pub async fn delete_for_user(&self, user_id: &str) -> Result<(), InternalError> {
        Widget::delete_many()
            .filter(widget::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete widgets for user", e))?;

        Ok(())
    }
}
