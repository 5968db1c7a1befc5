//! The console session: state, getters, mutations and actions.

pub mod error;
pub mod navigator;
pub mod state;
pub mod store;

pub use error::SessionError;
pub use navigator::{login_location, Navigator, TracingNavigator};
pub use state::SessionState;
pub use store::{SessionSettings, SessionStore};
