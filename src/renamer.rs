use crate::error::RenameError;
use std::fs;
use std::path::Path;

/// Move `current` to `target` with a single filesystem rename.
///
/// There is no copy-and-delete fallback, so a failure leaves the source intact.
pub fn apply(current: &Path, target: &Path) -> Result<(), RenameError> {
    fs::rename(current, target).map_err(|error| RenameError::Io {
        from: current.to_path_buf(),
        to: target.to_path_buf(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn moves_file_within_folder() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("scan.pdf");
        fs::write(&original, b"%PDF").unwrap();
        let target = dir.path().join("778899.pdf");

        apply(&original, &target).unwrap();

        assert!(!original.exists());
        assert_eq!(fs::read(&target).unwrap(), b"%PDF");
    }

    #[test]
    fn reports_missing_source() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone.pdf");
        let target = dir.path().join("1.pdf");

        let err = apply(&missing, &target).unwrap_err();

        let RenameError::Io { from, to, .. } = &err;
        assert_eq!(from, &missing);
        assert_eq!(to, &target);
        assert!(!target.exists());
        assert!(err.to_string().contains("gone.pdf"));
    }

    #[test]
    fn target_in_missing_folder_fails() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("scan.pdf");
        File::create(&original).unwrap();

        let result = apply(&original, &dir.path().join("nope").join("1.pdf"));

        assert!(result.is_err());
        assert!(original.exists());
    }
}
