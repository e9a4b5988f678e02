pub mod contact;
pub mod not_found;

pub use contact::ContactPage;
pub use not_found::NotFoundPage;
