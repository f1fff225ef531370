use crate::server::{
    cache::Caches,
    error::{auth::AuthError, AppError},
    model::{collection::CollectionInfoParams, slot::SlotDelta},
};
use test_utils::{builder::TestBuilder, factory};
