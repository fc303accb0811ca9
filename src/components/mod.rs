pub mod constellation;
pub mod navbar;
pub mod sections;
