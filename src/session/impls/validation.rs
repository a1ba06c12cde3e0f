use crate::session::enums::validation::Validation;
use crate::session::structs::session_record::SessionRecord;

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn record(&self) -> Option<&SessionRecord> {
        match self {
            Validation::Valid(record) => Some(record),
            Validation::Invalid => None,
        }
    }
}
