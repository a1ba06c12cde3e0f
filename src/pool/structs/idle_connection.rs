use crate::pool::traits::poolable::Poolable;

pub struct IdleConnection<C: Poolable> {
    pub(crate) connection: C,
    pub(crate) idle_since: i64,
}
