/// Database layer for Cadence
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with a startup health check
/// - `migrations`: sqlx migration runner
/// - `seed`: Idempotent fixture data (demo user + sample hierarchy)

pub mod migrations;
pub mod pool;
pub mod seed;
