pub mod errors;
pub mod db;
pub mod customer;
pub mod user_details;
pub mod product;

#[cfg(test)]
mod tests;
