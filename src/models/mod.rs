pub mod menu;
pub mod response;
pub mod user;

pub use menu::{MenuItem, RawMenu};
pub use response::Envelope;
pub use user::{UserInfo, UserParams, UserProfile};
