//! Authentication Module
//!
//! User registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports and field validation
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: full name, email and password → password hashed → user stored
//! 2. **Login**: email and password → hash verified → JWT issued and recorded on the user
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Unknown email and wrong password produce the same response
//! - Password hashes and tokens never appear in user listings

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
