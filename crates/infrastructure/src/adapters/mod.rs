//! Adapters for the application ports

mod reqwest_session;
mod system_clock;

pub use reqwest_session::ReqwestSessionManager;
pub use system_clock::SystemClock;
