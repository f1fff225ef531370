//! Card search filters.
//!
//! Translates a `CardQuery` into a SeaORM select. Every structured filter is combined
//! with AND. Keywords form a single OR group: a card matches when any keyword matches
//! any of the keyword fields.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait, Select,
};

use crate::server::model::card_query::CardQuery;

/// Builds the filtered, unpaginated select for a query.
pub fn filtered_select(query: &CardQuery) -> Select<entity::card::Entity> {
    let mut select = entity::prelude::Card::find().filter(structured_filters(query));

    if !query.keywords.is_empty() {
        select = select
            .join(JoinType::LeftJoin, entity::card::Relation::Language.def())
            .join(JoinType::LeftJoin, entity::card::Relation::CardType.def())
            .join(JoinType::LeftJoin, entity::card::Relation::CardKey.def())
            .join(JoinType::LeftJoin, entity::card::Relation::Expansion.def())
            .filter(keyword_filter(&query.keywords));
    }

    select
}

fn structured_filters(query: &CardQuery) -> Condition {
    let mut condition = Condition::all();

    if !query.name.is_empty() {
        condition = condition.add(
            lower(entity::card::Entity, entity::card::Column::Name)
                .like(format!("%{}%", query.name.to_lowercase())),
        );
    }
    if !query.card_type_id.is_empty() {
        condition = condition.add(entity::card::Column::CardTypeId.eq(query.card_type_id.as_str()));
    }
    if !query.language_id.is_empty() {
        condition = condition.add(entity::card::Column::LanguageId.eq(query.language_id.as_str()));
    }
    if !query.card_key_id.is_empty() {
        condition = condition.add(entity::card::Column::CardKeyId.eq(query.card_key_id.as_str()));
    }
    if !query.expansion_id.is_empty() {
        condition = condition.add(entity::card::Column::ExpansionId.eq(query.expansion_id.as_str()));
    }
    if let Some(min_price) = query.min_price {
        condition = condition.add(entity::card::Column::Price.gt(min_price));
    }
    if let Some(max_price) = query.max_price {
        condition = condition.add(entity::card::Column::Price.lt(max_price));
    }
    if query.in_stock_only {
        condition = condition.add(entity::card::Column::InStockAmount.gt(0));
    }
    if query.foil_only {
        condition = condition.add(entity::card::Column::FoilingId.is_not_null());
    }

    condition
}

/// OR of every keyword against every keyword field.
///
/// Reference ids and short names must match exactly; card names and card key names
/// match on substring. All comparisons ignore case.
fn keyword_filter(keywords: &[String]) -> Condition {
    let mut condition = Condition::any();

    for keyword in keywords {
        let keyword = keyword.to_lowercase();
        let pattern = format!("%{}%", keyword);

        condition = condition
            .add(lower(entity::language::Entity, entity::language::Column::Id).eq(keyword.as_str()))
            .add(lower(entity::language::Entity, entity::language::Column::LongName).eq(keyword.as_str()))
            .add(lower(entity::card_type::Entity, entity::card_type::Column::Id).eq(keyword.as_str()))
            .add(
                lower(entity::card_type::Entity, entity::card_type::Column::ShortName)
                    .eq(keyword.as_str()),
            )
            .add(
                lower(entity::expansion::Entity, entity::expansion::Column::ShortName)
                    .eq(keyword.as_str()),
            )
            .add(lower(entity::card::Entity, entity::card::Column::Name).like(pattern.as_str()))
            .add(lower(entity::card_key::Entity, entity::card_key::Column::EngName).like(pattern.as_str()));
    }

    condition
}

/// `LOWER(table.column)`, qualified so it stays unambiguous across the keyword joins.
fn lower<E: EntityTrait>(table: E, column: E::Column) -> Expr {
    Expr::expr(Func::lower(Expr::col((table, column))))
}
