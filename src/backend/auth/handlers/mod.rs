//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication pages.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Form types and user-facing messages
//! ├── signup.rs   - Registration form and handler
//! ├── login.rs    - Login form and handler
//! ├── logout.rs   - Session teardown
//! └── profile.rs  - Profile page
//! ```
//!
//! # Handlers
//!
//! - **`signup_form`** / **`signup`** - GET/POST /signup - User registration
//! - **`login_form`** / **`login`** - GET/POST /login - User authentication
//! - **`logout`** - POST /logout - End the session
//! - **`user_profile`** - GET /userProfile - Profile of the logged-in user
//!
//! # Authentication Flow
//!
//! 1. **Signup**: Form submitted → User created → Session opened → Redirect to profile
//! 2. **Login**: Form submitted → Credentials verified → Session opened → Redirect to profile
//! 3. **Logout**: Session row deleted → Cookie expired → Redirect home
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Sessions live server-side; the cookie only carries an opaque token
//! - Passwords are never logged or re-rendered

/// Form types and messages
pub mod types;

/// Signup handlers
pub mod signup;

/// Login handlers
pub mod login;

/// Logout handler
pub mod logout;

/// Profile handler
pub mod profile;

pub use login::{login, login_form};
pub use logout::logout;
pub use profile::user_profile;
pub use signup::{signup, signup_form};
pub use types::{LoginForm, SignupForm};
