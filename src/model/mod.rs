//! Plain data structures and DTOs for the three stores.
//!
//! The [`ActorEntity`](actor_framework::ActorEntity) implementations live next to each actor
//! (`user_actor`, `product_actor`, `order_actor`); this module only holds the shapes.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

/// Defines a typed, sequential identifier.
///
/// The generated type wraps a `u32`, displays as `<prefix>_<n>`, parses from either that form
/// or the bare number, and is a string on the wire.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(into = "String", try_from = "String")]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.strip_prefix(concat!($prefix, "_")).unwrap_or(s);
                digits
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| $crate::model::ParseIdError(s.to_string()))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::model::ParseIdError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}

pub(crate) use entity_id;

/// An identifier string that cannot name any entity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("malformed identifier: {0}")]
pub struct ParseIdError(pub String);

/// The id a store should hand out next, given the ids it already holds.
pub fn next_free_id(ids: impl IntoIterator<Item = u32>) -> u32 {
    ids.into_iter().max().map_or(1, |max| max.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_and_parse_both_forms() {
        assert_eq!(ProductId(7).to_string(), "product_7");
        assert_eq!("product_7".parse::<ProductId>().unwrap(), ProductId(7));
        assert_eq!("7".parse::<ProductId>().unwrap(), ProductId(7));
        assert_eq!(
            "X".parse::<ProductId>().unwrap_err(),
            ParseIdError("X".into())
        );
        // Another store's prefix is not accepted.
        assert!("order_7".parse::<ProductId>().is_err());
    }

    #[test]
    fn next_id_follows_highest_existing() {
        assert_eq!(next_free_id([]), 1);
        assert_eq!(next_free_id([3, 9, 4]), 10);
    }

    #[test]
    fn ids_are_strings_on_the_wire() {
        let json = serde_json::to_string(&UserId(3)).unwrap();
        assert_eq!(json, "\"user_3\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserId(3));
        assert!(serde_json::from_str::<OrderId>("\"nope\"").is_err());
    }
}
