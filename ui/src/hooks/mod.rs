pub mod use_contact_form;
pub mod use_title;

pub use use_contact_form::{ContactFormHandle, use_contact_form};
pub use use_title::use_title;
