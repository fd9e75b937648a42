//! Authentication
//!
//! Tokens come from an external identity provider; this module only defines
//! how the client asks for them.

mod session;
mod token;

pub use session::SessionTokenProvider;
pub use token::AccessToken;
pub use token::StaticTokenProvider;
pub use token::TokenProvider;
