pub mod repository;
mod routes;
pub mod validation;


pub use routes::get_router;
