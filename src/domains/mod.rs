pub mod email;
pub mod project;
