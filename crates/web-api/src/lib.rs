pub mod error;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use handlers::admin::AdminResponse;
pub use server::ApiServer;
pub use state::AppState;
