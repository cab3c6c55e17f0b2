pub mod model;
pub mod registers;
pub mod sm83;
