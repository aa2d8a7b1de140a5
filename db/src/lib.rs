#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::env;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{
    ConnectionManager, CustomizeConnection, Error as ManagerError, Pool, PooledConnection,
};
use diesel::sqlite::SqliteConnection;

use errors::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod publication;
pub mod schema;

pub const DEFAULT_DATABASE_URL: &str = "polls.db";
pub const MEMORY_DATABASE_URL: &str = ":memory:";

const BUSY_TIMEOUT_MS: u32 = 5000;

const SCHEMA: &str = include_str!("../migrations/2021-03-14-000000_create_polls/up.sql");

/// Applied to every new connection the pool opens: waits on locks held by
/// other connections instead of failing, enables foreign keys and WAL, and
/// creates the tables if they are missing.
#[derive(Debug)]
struct ConnectionSetup;

impl CustomizeConnection<SqliteConnection, ManagerError> for ConnectionSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), ManagerError> {
        conn.batch_execute(&format!("PRAGMA busy_timeout = {};", BUSY_TIMEOUT_MS))
            .and_then(|_| conn.batch_execute("PRAGMA foreign_keys = ON;"))
            .and_then(|_| conn.batch_execute("PRAGMA journal_mode = WAL;"))
            .and_then(|_| conn.batch_execute(SCHEMA))
            .map_err(ManagerError::QueryError)
    }
}

/// `DATABASE_URL`, falling back to `DEFAULT_DATABASE_URL` when unset or blank.
pub fn database_url() -> String {
    database_url_from(env::var("DATABASE_URL").ok())
}

pub fn database_url_from(value: Option<String>) -> String {
    value
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.into())
}

pub fn get_conn(pool: &DbPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err.into()
    })
}

pub fn new_pool(database_url: &str) -> Result<DbPool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let builder = Pool::builder().connection_customizer(Box::new(ConnectionSetup));

    // each connection to :memory: is its own database, so hold exactly one open
    let builder = if database_url == MEMORY_DATABASE_URL {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder
    };

    builder.build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        err.into()
    })
}
