pub mod config;
pub mod error;

// Accounts and access
pub mod access;
pub mod models;
pub mod nav;

// Auction catalogue
pub mod catalog;
pub mod forms;
pub mod listing;
pub mod product;

pub use config::*;
pub use error::*;

pub use access::*;
pub use models::*;
pub use nav::*;

pub use catalog::*;
pub use forms::*;
pub use listing::*;
pub use product::*;
