//! Cart service for business logic.
//!
//! Every user has one cart. Cart edits use the same slot merge as collections but only
//! need an existing user, not a verified one.

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::Caches,
    data::{card::CardRepository, cart::CartRepository},
    error::AppError,
    model::{
        cart::Cart,
        slot::{plan_slot_change, ExistingSlot, SlotChange, SlotDelta},
    },
    service::require_user,
};

pub struct CartService<'a> {
    pub db: &'a DatabaseConnection,
    pub caches: &'a Caches,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection, caches: &'a Caches) -> Self {
        Self { db, caches }
    }

    /// Retrieves the user's cart, creating it if the user has none yet.
    pub async fn get(&self, user_id: i32) -> Result<Cart, AppError> {
        require_user(self.db, user_id).await?;
        self.cart_of(user_id).await
    }

    /// Applies a signed amount change to the cart slot holding a card.
    ///
    /// # Returns
    /// - `Ok(Cart)` - The cart after the change
    /// - `Err(AppError::CardNotFound)` - Card doesn't exist
    /// - `Err(AppError::AuthErr(UserNotFound))` - User doesn't exist
    /// - `Err(AppError::BadRequest)` - Negative change on a card not in the cart
    pub async fn edit_slot(&self, user_id: i32, delta: SlotDelta) -> Result<Cart, AppError> {
        if CardRepository::new(self.db, self.caches)
            .find_by_id(delta.card_id)
            .await?
            .is_none()
        {
            return Err(AppError::CardNotFound(delta.card_id));
        }

        require_user(self.db, user_id).await?;
        let cart = self.cart_of(user_id).await?;

        let existing = cart.slot_for(delta.card_id).map(|slot| ExistingSlot {
            id: slot.id,
            amount: slot.amount,
        });

        let repo = CartRepository::new(self.db, self.caches);
        let updated = match plan_slot_change(existing, delta.amount)? {
            SlotChange::Insert { amount } => {
                repo.insert_slot(user_id, cart.id, delta.card_id, amount)
                    .await?
            }
            SlotChange::Update { slot_id, amount } => {
                repo.update_slot(user_id, slot_id, amount).await?
            }
            SlotChange::Delete { slot_id } => repo.delete_slot(user_id, slot_id).await?,
        };

        updated.ok_or_else(|| AppError::InternalError(format!("cart of user {} vanished", user_id)))
    }

    async fn cart_of(&self, user_id: i32) -> Result<Cart, AppError> {
        let repo = CartRepository::new(self.db, self.caches);

        match repo.find_by_user_id(user_id).await? {
            Some(cart) => Ok(cart),
            None => repo.save(user_id).await,
        }
    }
}
