use crate::server::{cache::Caches, data::cart::CartRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod find_by_user_id;
mod slots;
