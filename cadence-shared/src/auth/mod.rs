/// Authentication utilities
///
/// This module provides the authentication primitives for Cadence:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Signed, time-limited session tokens
/// - [`credentials`]: Credential store (verify + idempotent bootstrap)
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **JWT Tokens**: HS256 signing with a fixed 7-day expiry
/// - **Constant-time Comparison**: Password verification never compares
///   plaintext

pub mod credentials;
pub mod jwt;
pub mod password;
