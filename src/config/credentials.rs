use std::fmt;

/// API key and platform routing value used for every Riot API call.
///
/// Built once from [`Config`](super::Config) and never mutated afterwards.
/// `Debug` masks the key so credentials can appear in `tracing` fields.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    region: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            region: region.into().to_lowercase(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Key with everything but the last four characters hidden.
    pub fn masked_key(&self) -> String {
        mask_key(&self.api_key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.masked_key())
            .field("region", &self.region)
            .finish()
    }
}

pub(crate) fn mask_key(key: &str) -> String {
    let count = key.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let visible: String = key.chars().skip(count - 4).collect();
    format!("****{visible}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_is_lowercased() {
        let credentials = Credentials::new("RGAPI-secret", "EUW1");
        assert_eq!(credentials.region(), "euw1");
        assert_eq!(credentials.api_key(), "RGAPI-secret");
    }

    #[test]
    fn test_debug_masks_key() {
        let credentials = Credentials::new("RGAPI-0000-1111-abcd", "na1");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("RGAPI-0000"));
        assert!(debug.contains("****abcd"));
        assert!(debug.contains("na1"));
    }

    #[test]
    fn test_mask_short_key() {
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key(""), "");
    }
}
