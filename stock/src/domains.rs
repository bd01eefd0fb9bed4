pub mod pasturing;
pub mod raising;
