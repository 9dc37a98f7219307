//! PluralKit API response models.
//!
//! Only the fields the pages use are modelled; anything else in the payload is ignored.

mod front;
mod member;
mod system;

pub use front::*;
pub use member::*;
pub use system::*;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string field, treating `null` the same as a missing field.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
