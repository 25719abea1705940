pub(crate) mod arrays;
mod common;
pub(crate) mod responses;
pub(crate) mod structs;
pub(crate) mod type_mapper;

#[cfg(test)]
mod tests;

pub(crate) use common::{ConversionOutput, GenerationContext};
