use crate::entities::{self, company, job};
use crate::errors::AppError;
use crate::settings::Database as DbCfg;
use sea_orm::{
    ActiveModelTrait, Database, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set,
    TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of a company create request. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub internal_code: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub category: String,
}

/// Body of a job create request.
///
/// Counters default to 0 and free-text fields to "" when the key is missing;
/// an explicit `null` is stored as NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub internal_code: i64,
    pub date: String,
    #[serde(default = "default_count")]
    pub exports: Option<i64>,
    #[serde(default = "default_count")]
    pub transit_permits: Option<i64>,
    #[serde(default = "default_text")]
    pub inspection_areas: Option<String>,
    #[serde(default = "default_text")]
    pub water_samples: Option<String>,
    #[serde(default = "default_text")]
    pub mip_control: Option<String>,
    #[serde(default)]
    pub plan_creha: Option<bool>,
    #[serde(default = "default_text")]
    pub meeting_managers: Option<String>,
    #[serde(default = "default_text")]
    pub audit_haccp: Option<String>,
}

fn default_count() -> Option<i64> {
    Some(0)
}

fn default_text() -> Option<String> {
    Some(String::new())
}

impl NewJob {
    pub fn new(internal_code: i64, date: impl Into<String>) -> Self {
        Self {
            internal_code,
            date: date.into(),
            exports: default_count(),
            transit_permits: default_count(),
            inspection_areas: default_text(),
            water_samples: default_text(),
            mip_control: default_text(),
            plan_creha: None,
            meeting_managers: default_text(),
            audit_haccp: default_text(),
        }
    }
}

/// Sparse update of a job.
///
/// The outer `Option` tells whether the key was present in the request. For
/// nullable columns the inner `Option` is the new value, so `{"exports": null}`
/// clears the column while a missing `exports` key leaves it alone.
/// `internal_code` and `date` are NOT NULL, so `null` there counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobPatch {
    #[serde(default)]
    pub internal_code: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub exports: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub transit_permits: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub inspection_areas: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub water_samples: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub mip_control: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub plan_creha: Option<Option<bool>>,
    #[serde(default, deserialize_with = "present")]
    pub meeting_managers: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub audit_haccp: Option<Option<String>>,
}

// Only called when the key exists, which is what distinguishes `null` from absent.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl JobPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy every present field onto `active`, leaving the rest untouched.
    fn apply(self, active: &mut job::ActiveModel) {
        if let Some(v) = self.internal_code {
            active.internal_code = Set(v);
        }
        if let Some(v) = self.date {
            active.date = Set(v);
        }
        if let Some(v) = self.exports {
            active.exports = Set(v);
        }
        if let Some(v) = self.transit_permits {
            active.transit_permits = Set(v);
        }
        if let Some(v) = self.inspection_areas {
            active.inspection_areas = Set(v);
        }
        if let Some(v) = self.water_samples {
            active.water_samples = Set(v);
        }
        if let Some(v) = self.mip_control {
            active.mip_control = Set(v);
        }
        if let Some(v) = self.plan_creha {
            active.plan_creha = Set(v);
        }
        if let Some(v) = self.meeting_managers {
            active.meeting_managers = Set(v);
        }
        if let Some(v) = self.audit_haccp {
            active.audit_haccp = Set(v);
        }
    }
}

pub async fn init(cfg: &DbCfg) -> Result<DatabaseConnection, AppError> {
    let db = Database::connect(&cfg.url).await?;
    Ok(db)
}

/// Create any missing tables. Safe to run on every startup.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), AppError> {
    migration::Migrator::up(db, None).await?;
    Ok(())
}

// Company operations

pub async fn list_companies(db: &DatabaseConnection) -> Result<Vec<company::Model>, AppError> {
    let companies = entities::Company::find()
        .order_by_asc(company::Column::Id)
        .all(db)
        .await?;
    Ok(companies)
}

pub async fn create_company(
    db: &DatabaseConnection,
    input: NewCompany,
) -> Result<company::Model, AppError> {
    let company = company::ActiveModel {
        id: NotSet,
        internal_code: Set(input.internal_code),
        name: Set(input.name),
        address: Set(input.address),
        city: Set(input.city),
        category: Set(input.category),
    };

    Ok(company.insert(db).await?)
}

/// Returns `false` when no company has this id.
pub async fn delete_company(db: &DatabaseConnection, id: i32) -> Result<bool, AppError> {
    let result = entities::Company::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

// Job operations

pub async fn list_jobs(db: &DatabaseConnection) -> Result<Vec<job::Model>, AppError> {
    let jobs = entities::Job::find()
        .order_by_asc(job::Column::Id)
        .all(db)
        .await?;
    Ok(jobs)
}

pub async fn create_job(db: &DatabaseConnection, input: NewJob) -> Result<job::Model, AppError> {
    let job = job::ActiveModel {
        id: NotSet,
        internal_code: Set(input.internal_code),
        date: Set(input.date),
        exports: Set(input.exports),
        transit_permits: Set(input.transit_permits),
        inspection_areas: Set(input.inspection_areas),
        water_samples: Set(input.water_samples),
        mip_control: Set(input.mip_control),
        plan_creha: Set(input.plan_creha),
        meeting_managers: Set(input.meeting_managers),
        audit_haccp: Set(input.audit_haccp),
    };

    Ok(job.insert(db).await?)
}

pub async fn get_job(db: &DatabaseConnection, id: i32) -> Result<Option<job::Model>, AppError> {
    Ok(entities::Job::find_by_id(id).one(db).await?)
}

/// Merge `patch` into the job with this id. Returns `None` when it does not exist.
pub async fn update_job(
    db: &DatabaseConnection,
    id: i32,
    patch: JobPatch,
) -> Result<Option<job::Model>, AppError> {
    // Dropping the transaction on any early return rolls it back.
    let txn = db.begin().await?;

    let Some(existing) = entities::Job::find_by_id(id).one(&txn).await? else {
        return Ok(None);
    };

    if patch.is_empty() {
        return Ok(Some(existing));
    }

    let mut active: job::ActiveModel = existing.into();
    patch.apply(&mut active);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(Some(updated))
}

/// Returns `false` when no job has this id.
pub async fn delete_job(db: &DatabaseConnection, id: i32) -> Result<bool, AppError> {
    let result = entities::Job::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
