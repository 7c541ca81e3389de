use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    pub internal_code: i64, // matches company.internal_code, not enforced
    pub date: String,
    pub exports: Option<i64>,
    pub transit_permits: Option<i64>,
    pub inspection_areas: Option<String>,
    pub water_samples: Option<String>,
    pub mip_control: Option<String>,
    pub plan_creha: Option<bool>,
    pub meeting_managers: Option<String>,
    pub audit_haccp: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
