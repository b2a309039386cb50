//! Authentication: the demo credential roster plus password hashing and
//! session plumbing for self-registered accounts.

mod roster;

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

pub use roster::{match_credentials, DemoCredential, DEMO_ROSTER};

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::SESSION_USER_ID_KEY;
