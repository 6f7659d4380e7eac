//! API credential resolution
//!
//! Prefers a user-supplied key persisted (base64-encoded) in a local JSON
//! keystore file, falling back to the `GEMINI_API_KEY` environment variable.
//! Resolution never fails; an absent credential only surfaces when the
//! Gemini API rejects the call.

use base64::Engine as _;
use std::path::Path;

/// Keystore entry holding the user-supplied API key override.
pub const USER_API_KEY_ENTRY: &str = "user_custom_gemini_api_key";

/// Environment variable consulted when no usable override exists.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolve the Gemini API key.
///
/// The keystore is a flat JSON object; the override entry is stored
/// base64-encoded (obfuscation, not security). A missing file, missing
/// entry, or undecodable value falls back to the environment.
pub fn resolve_api_key(keystore_path: &Path) -> Option<String> {
    if let Some(encoded) = read_keystore_entry(keystore_path, USER_API_KEY_ENTRY) {
        match decode_entry(&encoded) {
            Some(key) => return Some(key),
            None => {
                tracing::warn!(
                    "Keystore entry '{}' is not valid base64 UTF-8, falling back to {}",
                    USER_API_KEY_ENTRY,
                    API_KEY_ENV
                );
            }
        }
    }
    std::env::var(API_KEY_ENV).ok()
}

fn read_keystore_entry(path: &Path, entry: &str) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let store: serde_json::Value = serde_json::from_str(&raw).ok()?;
    store.get(entry)?.as_str().map(str::to_string)
}

fn decode_entry(encoded: &str) -> Option<String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_keystore(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("keystore.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_resolves_decoded_override() {
        let dir = tempfile::tempdir().unwrap();
        let encoded = base64::engine::general_purpose::STANDARD.encode("user-key-123");
        let path = write_keystore(
            &dir,
            &format!("{{\"user_custom_gemini_api_key\": \"{}\"}}", encoded),
        );

        assert_eq!(resolve_api_key(&path), Some("user-key-123".to_string()));
    }

    #[test]
    fn test_missing_keystore_falls_back_to_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        // The fallback is whatever the process environment holds; with the
        // variable unset this resolves to None rather than erroring.
        let resolved = resolve_api_key(&path);
        assert_eq!(resolved, std::env::var(API_KEY_ENV).ok());
    }

    #[test]
    fn test_corrupt_base64_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_keystore(
            &dir,
            "{\"user_custom_gemini_api_key\": \"!!!not-base64!!!\"}",
        );

        assert_eq!(resolve_api_key(&path), std::env::var(API_KEY_ENV).ok());
    }

    #[test]
    fn test_non_utf8_payload_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let encoded = base64::engine::general_purpose::STANDARD.encode([0xFF, 0xFE, 0xFD]);
        let path = write_keystore(
            &dir,
            &format!("{{\"user_custom_gemini_api_key\": \"{}\"}}", encoded),
        );

        assert_eq!(resolve_api_key(&path), std::env::var(API_KEY_ENV).ok());
    }
}
