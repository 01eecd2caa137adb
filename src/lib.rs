pub mod app;
pub mod models;

mod test;
