pub mod df1;
pub mod pandas;
