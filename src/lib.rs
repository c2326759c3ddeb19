pub mod app;
pub mod data;
pub mod models;
pub mod pricing;

#[cfg(test)]
mod test;
