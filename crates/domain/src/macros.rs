//! Macro for implementing Display and FromStr for domain enums
//!
//! Status-like enums (temporal status, user role, backend kind) travel as
//! lowercase strings in JSON, config files and CLI flags. The macro keeps the
//! string mapping in one place and accepts legacy aliases on parse.
//!
//! # Example
//!
//! ```rust
//! use meetnotify_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Window {
//!     Morning,
//!     Evening,
//! }
//!
//! impl_domain_status_conversions!(Window {
//!     Morning => "morning" | "am",
//!     Evening => "evening",
//! });
//!
//! assert_eq!(Window::Morning.to_string(), "morning");
//! assert_eq!("AM".parse::<Window>().unwrap(), Window::Morning);
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// - Display writes the canonical (first) string.
/// - FromStr trims, lowercases and accepts the canonical string or any alias.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
