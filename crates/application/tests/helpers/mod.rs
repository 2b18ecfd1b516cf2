#![allow(unused_imports)]

pub mod builders;
pub mod mock_transport;

pub use builders::*;
pub use mock_transport::*;
