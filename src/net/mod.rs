//! Server collaborators: JSON saves, CSRF token lookup, navigation.

pub mod api;
