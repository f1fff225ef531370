use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "card")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub image_url: String,
    pub price: f64,
    pub in_stock_amount: i32,
    pub card_key_id: String,
    pub poster_id: i32,
    pub card_type_id: String,
    pub language_id: String,
    pub expansion_id: String,
    pub foiling_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PosterId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Poster,
    #[sea_orm(
        belongs_to = "super::card_key::Entity",
        from = "Column::CardKeyId",
        to = "super::card_key::Column::Id"
    )]
    CardKey,
    #[sea_orm(
        belongs_to = "super::card_type::Entity",
        from = "Column::CardTypeId",
        to = "super::card_type::Column::Id"
    )]
    CardType,
    #[sea_orm(
        belongs_to = "super::language::Entity",
        from = "Column::LanguageId",
        to = "super::language::Column::Id"
    )]
    Language,
    #[sea_orm(
        belongs_to = "super::expansion::Entity",
        from = "Column::ExpansionId",
        to = "super::expansion::Column::Id"
    )]
    Expansion,
    #[sea_orm(
        belongs_to = "super::foiling::Entity",
        from = "Column::FoilingId",
        to = "super::foiling::Column::Id"
    )]
    Foiling,
    #[sea_orm(has_many = "super::collection_slot::Entity")]
    CollectionSlot,
    #[sea_orm(has_many = "super::cart_slot::Entity")]
    CartSlot,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Poster.def()
    }
}

impl Related<super::card_key::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardKey.def()
    }
}

impl Related<super::card_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardType.def()
    }
}

impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::expansion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expansion.def()
    }
}

impl Related<super::foiling::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Foiling.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
