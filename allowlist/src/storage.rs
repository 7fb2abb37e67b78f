//! Persistence of the signature bundle artifact
//!
//! The bundle lifecycle is delete-then-single-final-write: any stale artifact
//! is removed before issuance begins, and the new bundle is written in one
//! batch write after every spot has been signed. An aborted run therefore
//! leaves no artifact at the destination rather than a partially written one.

use std::{fs, path::Path};

use crate::{errors::AllowlistError, types::SignatureBundle};

/// Remove a stale bundle artifact at the given path, if one exists
pub fn remove_stale_bundle(path: &Path) -> Result<(), AllowlistError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| AllowlistError::WriteBundle(e.to_string()))?;
    }
    Ok(())
}

/// Write the bundle to the given path as pretty-printed JSON, in one write
pub fn write_bundle(path: &Path, bundle: &SignatureBundle) -> Result<(), AllowlistError> {
    let json = serde_json::to_string_pretty(bundle)
        .map_err(|e| AllowlistError::WriteBundle(e.to_string()))?;

    fs::write(path, json).map_err(|e| AllowlistError::WriteBundle(e.to_string()))
}

/// Read a bundle artifact back from the given path
pub fn read_bundle(path: &Path) -> Result<SignatureBundle, AllowlistError> {
    let contents =
        fs::read_to_string(path).map_err(|e| AllowlistError::ReadBundle(e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| AllowlistError::ReadBundle(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf, process};

    use alloy::{primitives::Address, signers::local::PrivateKeySigner};

    use super::*;
    use crate::issuer::issue_bundle;

    /// A unique temp path for one test
    fn temp_bundle_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("{}-{}.json", name, process::id()))
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let path = temp_bundle_path("allowlist-roundtrip");
        let signer = PrivateKeySigner::random();
        let roster = vec![Address::random(), Address::random()];
        let bundle = issue_bundle(&signer, &roster, 2).unwrap();

        remove_stale_bundle(&path).unwrap();
        write_bundle(&path, &bundle).unwrap();
        let read_back = read_bundle(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(bundle, read_back);
    }

    #[test]
    fn test_remove_stale_bundle() {
        let path = temp_bundle_path("allowlist-stale");
        fs::write(&path, "{}").unwrap();

        remove_stale_bundle(&path).unwrap();
        assert!(!path.exists());

        // Removing a nonexistent artifact is not an error
        remove_stale_bundle(&path).unwrap();
    }

    #[test]
    fn test_read_missing_bundle_fails() {
        let path = temp_bundle_path("allowlist-missing");
        assert!(matches!(
            read_bundle(&path),
            Err(AllowlistError::ReadBundle(_))
        ));
    }
}
