use jobledger::entities::{company, job};
use jobledger::storage::{self, NewCompany, NewJob};
use sea_orm::DatabaseConnection;

/// Builder for seeding companies
pub struct CompanyBuilder {
    input: NewCompany,
}

impl CompanyBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            input: NewCompany {
                internal_code: 1,
                name: name.to_string(),
                address: "1 Rd".to_string(),
                city: "X".to_string(),
                category: "food".to_string(),
            },
        }
    }

    pub fn with_internal_code(mut self, code: i64) -> Self {
        self.input.internal_code = code;
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.input.city = city.to_string();
        self
    }

    pub async fn create(self, db: &DatabaseConnection) -> company::Model {
        storage::create_company(db, self.input)
            .await
            .expect("Failed to create test company")
    }
}

/// Builder for seeding jobs
pub struct JobBuilder {
    input: NewJob,
}

impl JobBuilder {
    pub fn new(internal_code: i64) -> Self {
        Self {
            input: NewJob::new(internal_code, "2024-01-01"),
        }
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.input.date = date.to_string();
        self
    }

    pub fn with_exports(mut self, exports: i64) -> Self {
        self.input.exports = Some(exports);
        self
    }

    pub fn with_audit(mut self, audit: &str) -> Self {
        self.input.audit_haccp = Some(audit.to_string());
        self
    }

    pub async fn create(self, db: &DatabaseConnection) -> job::Model {
        storage::create_job(db, self.input)
            .await
            .expect("Failed to create test job")
    }
}
