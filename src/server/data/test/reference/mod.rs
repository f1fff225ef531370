use crate::server::{cache::Caches, data::reference::ReferenceRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod lists;
