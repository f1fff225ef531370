//! Cart data repository.
//!
//! Carts are cached by owning user under `cart-{userId}`. Slot writes re-read the cart
//! and remember it.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{cache::Caches, error::AppError, model::cart::Cart};

pub struct CartRepository<'a> {
    db: &'a DatabaseConnection,
    caches: &'a Caches,
}

impl<'a> CartRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, caches: &'a Caches) -> Self {
        Self { db, caches }
    }

    /// Finds the cart of a user, consulting the cache first.
    ///
    /// # Returns
    /// - `Ok(Some(Cart))` - Cart found
    /// - `Ok(None)` - The user has no cart
    /// - `Err(AppError)` - Database or cache error
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Cart>, AppError> {
        if let Some(cart) = self.caches.carts.get(&user_id).await? {
            return Ok(Some(cart));
        }

        let Some(cart) = self.load(user_id).await? else {
            return Ok(None);
        };

        self.caches.carts.remember(&user_id, &cart).await?;

        Ok(Some(cart))
    }

    /// Creates an empty cart for a user.
    ///
    /// # Returns
    /// - `Ok(Cart)` - The new cart
    /// - `Err(AppError)` - Database error, including a user that already has a cart
    pub async fn save(&self, user_id: i32) -> Result<Cart, AppError> {
        let entity = entity::cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let cart = Cart::from_entity(entity, Vec::new());
        self.caches.carts.remember(&user_id, &cart).await?;

        Ok(cart)
    }

    pub async fn update_slot(
        &self,
        user_id: i32,
        slot_id: i32,
        amount: i32,
    ) -> Result<Option<Cart>, AppError> {
        entity::prelude::CartSlot::update(entity::cart_slot::ActiveModel {
            id: ActiveValue::Unchanged(slot_id),
            amount: ActiveValue::Set(amount),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        self.refresh(user_id).await
    }

    /// Adds a slot for a card not yet in the cart.
    pub async fn insert_slot(
        &self,
        user_id: i32,
        cart_id: i32,
        card_id: i32,
        amount: i32,
    ) -> Result<Option<Cart>, AppError> {
        entity::cart_slot::ActiveModel {
            amount: ActiveValue::Set(amount),
            card_id: ActiveValue::Set(card_id),
            cart_id: ActiveValue::Set(cart_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.refresh(user_id).await
    }

    pub async fn delete_slot(&self, user_id: i32, slot_id: i32) -> Result<Option<Cart>, AppError> {
        entity::prelude::CartSlot::delete_by_id(slot_id)
            .exec(self.db)
            .await?;

        self.refresh(user_id).await
    }

    async fn refresh(&self, user_id: i32) -> Result<Option<Cart>, AppError> {
        let Some(cart) = self.load(user_id).await? else {
            self.caches.carts.forget(&user_id).await?;
            return Ok(None);
        };

        self.caches.carts.remember(&user_id, &cart).await?;

        Ok(Some(cart))
    }

    async fn load(&self, user_id: i32) -> Result<Option<Cart>, DbErr> {
        let Some(entity) = entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let slots = entity::prelude::CartSlot::find()
            .filter(entity::cart_slot::Column::CartId.eq(entity.id))
            .order_by_asc(entity::cart_slot::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Cart::from_entity(entity, slots)))
    }
}
