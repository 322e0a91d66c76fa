//! Infrastructure Layer
//!
//! Database implementation and the image-store HTTP adapter.

pub mod cloudinary;
pub mod postgres;

pub use cloudinary::{CloudinaryConfig, CloudinaryImageStore};
pub use postgres::PgBookRepository;
