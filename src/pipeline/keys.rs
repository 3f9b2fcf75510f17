use crate::data::Region;
/// Type-safe keys for pipeline query parameters
use std::marker::PhantomData;

/// A type-safe key for PipeMap that enforces compile-time type checking
pub struct TypedKey<T> {
    name: &'static str,
    _phantom: PhantomData<T>,
}

impl<T> TypedKey<T> {
    /// Create a new typed key with a static name
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }

    /// Get the key name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for TypedKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            _phantom: PhantomData,
        }
    }
}

impl<T> Copy for TypedKey<T> {}

// Well-known query keys

/// Region the query is scoped to
pub const REGION: TypedKey<Region> = TypedKey::new("region");

/// Summoner name
pub const SUMMONER_NAME: TypedKey<String> = TypedKey::new("summoner_name");

/// Player universally unique identifier
pub const PUUID: TypedKey<String> = TypedKey::new("puuid");

/// Match identifier, e.g. "NA1_1234567890"
pub const MATCH_ID: TypedKey<String> = TypedKey::new("match_id");

/// Static-data version, e.g. "14.1.1"; latest when absent
pub const VERSION: TypedKey<String> = TypedKey::new("version");

/// Static-data locale, e.g. "en_US"
pub const LOCALE: TypedKey<String> = TypedKey::new("locale");
