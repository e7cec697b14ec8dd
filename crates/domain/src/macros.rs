//! Macro for implementing wire-string conversions on domain enums
//!
//! Every status/priority/role enum the backend sends is a lowercase snake_case
//! string. This macro generates the string table once and derives `as_str`,
//! `ALL`, `Display` and `FromStr` from it. Parsing is case-insensitive.
//!
//! # Example
//!
//! ```rust
//! use workboard_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum InvoiceState {
//!     Draft,
//!     Sent,
//! }
//!
//! impl_domain_status_conversions!(InvoiceState {
//!     Draft => "draft",
//!     Sent => "sent",
//! });
//!
//! assert_eq!("SENT".parse::<InvoiceState>().unwrap(), InvoiceState::Sent);
//! assert_eq!(InvoiceState::Draft.to_string(), "draft");
//! ```

/// Implements `as_str`, `ALL`, Display and FromStr for a domain enum
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire strings, in
///   display order
///
/// Parse failures are reported as
/// [`WorkboardError::InvalidInput`](crate::WorkboardError::InvalidInput).
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in display order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant),+];

            /// Wire representation of the variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::WorkboardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::WorkboardError::InvalidInput(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
