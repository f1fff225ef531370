//! Cart factory for creating test carts and their slots.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates the (empty) cart for a user.
pub async fn create_cart(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::cart::Model, DbErr> {
    entity::cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a slot holding `amount` copies of a card into a cart.
pub async fn create_cart_slot(
    db: &DatabaseConnection,
    cart_id: i32,
    card_id: i32,
    amount: i32,
) -> Result<entity::cart_slot::Model, DbErr> {
    entity::cart_slot::ActiveModel {
        cart_id: ActiveValue::Set(cart_id),
        card_id: ActiveValue::Set(card_id),
        amount: ActiveValue::Set(amount),
        ..Default::default()
    }
    .insert(db)
    .await
}
