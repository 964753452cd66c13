mod error;
mod extractors;
mod whoami;
