//! Random identifier generation

use uuid::Uuid;

/// Number of random characters appended after the prefix
const ID_SUFFIX_LEN: usize = 9;

/// Generate a short random identifier with a prefix, e.g. `ride-1a2b3c4d5`
pub fn generate_id(prefix: &str) -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &raw[..ID_SUFFIX_LEN])
}
