use crate::{
    model::card::CardQueryParams,
    server::{
        cache::Caches,
        data::card::CardRepository,
        error::AppError,
        model::{card::CardParams, card_query::CardQuery},
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, card::CardFactory, reference::ReferenceData},
};

mod find_by_id;
mod query;
mod save;
mod update;

/// Card params pointing at the given reference rows.
fn card_params(refs: &ReferenceData, name: &str, price: f64) -> CardParams {
    CardParams {
        name: name.to_string(),
        text: format!("{} text", name),
        image_url: String::new(),
        price,
        in_stock_amount: 1,
        card_type_id: refs.card_type.id.clone(),
        language_id: refs.language.id.clone(),
        card_key_id: refs.card_key.id.clone(),
        expansion_id: refs.expansion.id.clone(),
        foiling_id: None,
    }
}
