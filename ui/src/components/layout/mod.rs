pub mod header;
pub mod main_layout;

pub use header::Header;
pub use main_layout::MainLayout;
