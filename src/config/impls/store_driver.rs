use std::fmt;
use crate::config::enums::store_driver::StoreDriver;

impl fmt::Display for StoreDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreDriver::sqlite3 => write!(f, "sqlite3"),
            StoreDriver::pgsql => write!(f, "pgsql"),
        }
    }
}
