//! Metric dimensions: caller-ordered `(key, value)` pairs.

/// Owned dimension list as stored on an instrument.
pub type Dimensions = Vec<(String, String)>;

/// Copy borrowed dimension pairs into an owned list, order preserved.
pub fn to_owned_dimensions<K, V>(dimensions: &[(K, V)]) -> Dimensions
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    dimensions
        .iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect()
}
