use crate::server::{
    cache::Caches,
    data::collection::CollectionRepository,
    error::AppError,
    model::collection::CollectionInfoParams,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find;
mod save;
mod slots;

fn info(name: &str) -> CollectionInfoParams {
    CollectionInfoParams {
        name: name.to_string(),
        description: format!("{} description", name),
    }
}
