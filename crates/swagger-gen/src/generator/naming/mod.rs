pub mod constants;
pub mod identifiers;
pub mod responses;

#[cfg(test)]
mod tests;
