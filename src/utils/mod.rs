pub mod envelope;
pub mod id;
pub mod repository;
pub mod response;
pub mod validation;

#[cfg(test)]
pub mod testing;
