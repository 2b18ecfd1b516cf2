pub mod services;

pub use services::DiffServices;
