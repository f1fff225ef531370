use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardTypeDto {
    pub id: String,
    pub long_name: String,
    pub short_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
    pub id: String,
    pub long_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionDto {
    pub id: String,
    pub short_name: String,
    pub full_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FoilingDto {
    pub id: String,
    pub name: String,
}

/// A card listing with its reference data resolved.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: i32,
    pub name: String,
    pub text: String,
    pub image_url: String,
    pub price: f64,
    pub card_type: CardTypeDto,
    pub language: LanguageDto,
    pub foiling: Option<FoilingDto>,
    /// Card key id.
    pub key: String,
    /// Expansion short name.
    pub expansion: String,
    /// Expansion full name.
    pub expansion_name: String,
    pub in_stock_amount: i32,
}

/// Body of a card create or full update.
///
/// Reference fields carry the ids of existing card types, languages, card keys,
/// expansions and foilings.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostCardDto {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub image_url: String,
    /// Must be greater than 0.
    pub price: f64,
    #[serde(rename = "type")]
    pub card_type: String,
    pub language: String,
    pub key: String,
    pub expansion: String,
    #[serde(default)]
    pub foiling: Option<String>,
    #[serde(default)]
    pub in_stock_amount: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdateDto {
    pub new_price: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockedAmountUpdateDto {
    pub new_amount: i32,
}

/// Query string of a card search.
///
/// Every field is optional. Prices use `-1` to mean "no bound".
#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CardQueryParams {
    /// Case-insensitive name substring.
    #[serde(default)]
    pub name: String,
    /// Card type id.
    #[serde(default, rename = "type")]
    pub card_type: String,
    /// Language id.
    #[serde(default, rename = "lang")]
    pub language: String,
    /// Card key id.
    #[serde(default)]
    pub key: String,
    /// Expansion id.
    #[serde(default)]
    pub expansion: String,
    /// Exclusive lower price bound.
    #[serde(default = "no_price_bound")]
    pub min_price: f64,
    /// Exclusive upper price bound.
    #[serde(default = "no_price_bound")]
    pub max_price: f64,
    #[serde(default)]
    pub in_stock_only: bool,
    #[serde(default)]
    pub foil_only: bool,
    /// Space separated keywords, any of which may match.
    #[serde(default, rename = "t")]
    pub keywords: String,
    /// 1-based page number.
    #[serde(default = "first_page")]
    pub page: u64,
}

impl Default for CardQueryParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            card_type: String::new(),
            language: String::new(),
            key: String::new(),
            expansion: String::new(),
            min_price: no_price_bound(),
            max_price: no_price_bound(),
            in_stock_only: false,
            foil_only: false,
            keywords: String::new(),
            page: first_page(),
        }
    }
}

fn no_price_bound() -> f64 {
    -1.0
}

fn first_page() -> u64 {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardQueryResultDto {
    pub cards: Vec<CardDto>,
    pub total_cards: u64,
    pub per_page: u64,
}
