/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Audit timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Lifecycle dates (creation, confirmation, expiry) are calendar days.
/// Expiry arithmetic is whole-day, so no time-of-day component is stored.
pub type DayDate = chrono::NaiveDate;
