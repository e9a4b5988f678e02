pub mod api_client;
pub mod requests;

pub use api_client::{APIClient, ClientError};
