//! Authentication services delegating identity to the external OAuth2
//! provider.

pub mod callback;
pub mod login;
