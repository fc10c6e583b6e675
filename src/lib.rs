pub mod app;
pub mod db;
pub mod domains;
pub mod email;
pub mod middleware;
pub mod outcome;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use utils::error::AppError;
