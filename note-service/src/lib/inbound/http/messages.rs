//! User-facing response messages.
//!
//! Centralized so the wire-visible strings have a single localization point.

pub const USER_CREATED: &str = "User created successfully.";
pub const USER_UPDATED: &str = "User updated successfully.";
pub const USER_DELETED: &str = "User deleted successfully.";
pub const USER_NOT_FOUND: &str = "User not found.";
pub const USERNAME_TAKEN: &str = "Username is already taken!";
pub const PASSWORD_CHANGED: &str = "Password changed successfully.";
pub const LOGIN_SUCCEEDED: &str = "Signed in successfully.";
pub const LOGIN_FAILED: &str = "Sign-in failed!";

pub const CATEGORY_CREATED: &str = "Category created successfully.";
pub const CATEGORY_UPDATED: &str = "Category updated successfully.";
pub const CATEGORY_DELETED: &str = "Category deleted successfully.";
pub const CATEGORY_NOT_FOUND: &str = "Category not found.";

pub const NOTE_CREATED: &str = "Note created successfully.";
pub const NOTE_UPDATED: &str = "Note updated successfully.";
pub const NOTE_DELETED: &str = "Note deleted successfully.";
pub const NOTE_NOT_FOUND: &str = "Note not found.";

pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const AUTH_HEADER_MISSING: &str = "Missing Authorization header.";
pub const AUTH_HEADER_INVALID: &str = "Invalid Authorization header format. Expected: Bearer <token>";
pub const TOKEN_REJECTED: &str = "Invalid token.";
