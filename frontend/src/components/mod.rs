pub mod fields;
pub mod resources;
pub mod shell;
