use thiserror::Error;
use crate::cache::enums::cache_error::CacheError;
use crate::store::enums::store_error::StoreError;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Cache bootstrap failed: {0}")]
    Cache(#[from] CacheError),

    #[error("Store bootstrap failed: {0}")]
    Store(#[from] StoreError),
}
