//! Campus client: typed HTTP boundary and effect execution for the portal
//! core.
mod api;
mod dto;
mod error;
mod handle;
mod http;
mod session;

pub use api::PortalApi;
pub use error::ApiError;
pub use handle::ClientHandle;
pub use http::{ClientSettings, HttpPortalApi};
pub use session::{AuthToken, Session};
