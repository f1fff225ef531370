mod card;
mod cart;
mod collection;
mod reference;
mod user;
