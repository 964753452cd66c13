pub mod email;
pub mod error;
pub mod extractors;
pub mod links;
pub mod whoami;
