pub mod repository;
mod routes;
pub mod validation;

#[cfg(test)]
mod tests;

pub use routes::get_router;
