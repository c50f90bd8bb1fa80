mod cell;
mod page;
mod table;

pub use cell::EditableCell;
pub use page::ClientResourcePage;
pub use table::ResourceTable;
