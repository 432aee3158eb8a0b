pub mod handlers;

pub use handlers::application_routes;
