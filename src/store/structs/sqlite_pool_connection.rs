use sqlx::sqlite::SqliteConnection;

pub struct SqlitePoolConnection {
    pub(crate) connection: SqliteConnection,
}
