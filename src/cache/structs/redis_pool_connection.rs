pub struct RedisPoolConnection {
    pub(crate) connection: redis::aio::MultiplexedConnection,
}
