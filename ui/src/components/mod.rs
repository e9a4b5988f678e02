pub mod layout;
pub mod toast;
