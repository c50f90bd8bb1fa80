pub mod column;
pub mod connector;
pub mod field;
pub mod record;
