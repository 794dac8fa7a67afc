//! Authentication Module
//!
//! Identity verification, the admin allow-list and the authentication
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── identity.rs     - IdentityVerifier trait, claims, errors
//! ├── firebase.rs     - Firebase ID token verification (RS256 + JWK set)
//! ├── sessions.rs     - Shared-secret HS256 tokens (development, tests)
//! ├── admin.rs        - Administrator allow-list
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── google.rs   - Sign-in exchange
//!     └── me.rs       - Current principal
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign-in**: client posts an ID token → token verified → `{ uid, email }`
//! 2. **Requests**: client sends `Authorization: Bearer <ID token>` → the auth
//!    middleware verifies it on every protected request
//!
//! Token lifetime and revocation belong to the identity provider; the board
//! keeps no session state.

pub mod identity;

pub mod firebase;

pub mod sessions;

pub mod admin;

pub mod handlers;

pub use identity::{Claims, IdentityError, IdentityVerifier};
pub use firebase::FirebaseVerifier;
pub use sessions::SharedSecretVerifier;
pub use admin::AdminAllowList;
pub use handlers::{get_me, sign_in_with_google};
