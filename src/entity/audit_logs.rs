use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub action_id: i32,
    pub details: String,
    pub timestamp: DateTimeUtc,
    pub ip_address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::user_actions::Entity",
        from = "Column::ActionId",
        to = "super::user_actions::Column::Id"
    )]
    UserActions,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::user_actions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserActions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
