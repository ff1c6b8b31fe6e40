/// API route modules
pub mod chapters;
pub mod health;
pub mod media;
