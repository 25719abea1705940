pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod converter;
pub mod error;
pub(crate) mod naming;
pub mod orchestrator;

#[cfg(test)]
mod tests;
