use diesel::{
    connection::SimpleConnection,
    pg::PgConnection,
    r2d2::{ConnectionManager, Pool, PoolError},
    QueryResult,
};

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const CREATE_TABLES_SQL: &str = include_str!("../../sql/create_tables.sql");

/// Builds the Postgres connection pool.
///
/// # Example
/// ```
/// let pool = psql_connect_to_db("postgres://localhost/blog", 10)?;
/// let conn = pool.get()?;
/// ```
pub fn psql_connect_to_db(database_url: &str, pool_size: u32) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().max_size(pool_size).build(manager)
}

/// Creates any of the six tables that are missing. Foreign keys are plain
/// integer columns without constraints, so deletes never cascade or fail
/// on dependents.
pub fn create_tables(conn: &PgConnection) -> QueryResult<()> {
    conn.batch_execute(CREATE_TABLES_SQL)
}
