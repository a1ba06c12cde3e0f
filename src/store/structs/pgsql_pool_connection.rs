use sqlx::postgres::PgConnection;

pub struct PgsqlPoolConnection {
    pub(crate) connection: PgConnection,
}
