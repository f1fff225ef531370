use crate::server::data::user::{NewUser, UserRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod save;
