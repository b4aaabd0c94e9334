pub mod category;
pub mod field;
pub mod row;

pub use category::Category;
pub use field::Field;
pub use row::{InvoiceNumber, NationalCode, Row};
