pub(crate) mod common;
mod petstore;
