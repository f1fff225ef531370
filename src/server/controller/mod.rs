pub mod auth;
pub mod card;
pub mod collection;
pub mod user;

#[cfg(test)]
mod test;
