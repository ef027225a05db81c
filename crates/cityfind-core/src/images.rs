// crates/cityfind-core/src/images.rs
use crate::model::ImageHandle;
use crate::traits::CountryImageSource;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Country code whose flag stands in for any unknown country.
pub const FALLBACK_COUNTRY: &str = "eg";

/// Resolves flags from a directory of `flag_<code>.png` files.
///
/// `FlagDirectory::new("assets")` resolves `"US"` to `assets/flag_us.png`
/// if that file exists. Anything else resolves to the fallback handle:
/// `flag_eg.png` when present, otherwise [`ImageHandle::Placeholder`].
#[derive(Debug, Clone)]
pub struct FlagDirectory {
    root: PathBuf,
    fallback: ImageHandle,
}

impl FlagDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let fallback_path = flag_path(&root, FALLBACK_COUNTRY);
        let fallback = if fallback_path.is_file() {
            ImageHandle::Asset(fallback_path)
        } else {
            ImageHandle::Placeholder
        };
        Self { root, fallback }
    }

    /// Override the handle returned on a miss.
    pub fn with_fallback(mut self, fallback: ImageHandle) -> Self {
        self.fallback = fallback;
        self
    }

    /// `<crate>/data/flags`. Ships only the `flag_eg.png` fallback, so every
    /// country resolves to it unless more flags are added.
    pub fn default_flags_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("flags")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fallback(&self) -> &ImageHandle {
        &self.fallback
    }
}

impl Default for FlagDirectory {
    fn default() -> Self {
        Self::new(Self::default_flags_dir())
    }
}

impl CountryImageSource for FlagDirectory {
    fn resolve(&self, country: &str) -> ImageHandle {
        // Codes become file names; refuse anything that could leave `root`.
        if country.is_empty() || !country.chars().all(|c| c.is_ascii_alphanumeric()) {
            debug!(country, "invalid country code, using fallback flag");
            return self.fallback.clone();
        }

        let path = flag_path(&self.root, &country.to_ascii_lowercase());
        if path.is_file() {
            ImageHandle::Asset(path)
        } else {
            debug!(country, "no flag found, using fallback flag");
            self.fallback.clone()
        }
    }
}

/// Resolves every country to [`ImageHandle::Placeholder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl CountryImageSource for NoImages {
    fn resolve(&self, _country: &str) -> ImageHandle {
        ImageHandle::Placeholder
    }
}

fn flag_path(root: &Path, code: &str) -> PathBuf {
    root.join(format!("flag_{code}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"png").unwrap();
        path
    }

    #[test]
    fn resolves_existing_flag_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let us = touch(dir.path(), "flag_us.png");

        let flags = FlagDirectory::new(dir.path());
        assert_eq!(flags.resolve("US"), ImageHandle::Asset(us.clone()));
        assert_eq!(flags.resolve("us"), ImageHandle::Asset(us));
    }

    #[test]
    fn miss_falls_back_to_egypt_flag_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let eg = touch(dir.path(), "flag_eg.png");

        let flags = FlagDirectory::new(dir.path());
        assert_eq!(flags.resolve("ZZ"), ImageHandle::Asset(eg));
    }

    #[test]
    fn miss_without_fallback_file_is_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let flags = FlagDirectory::new(dir.path());
        assert_eq!(flags.resolve("AU"), ImageHandle::Placeholder);
    }

    #[test]
    fn suspicious_codes_never_touch_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let flags = FlagDirectory::new(dir.path().join("inner"))
            .with_fallback(ImageHandle::Asset(PathBuf::from("fallback.png")));

        for code in ["", "../us", "u/s", "u s"] {
            assert_eq!(
                flags.resolve(code),
                ImageHandle::Asset(PathBuf::from("fallback.png"))
            );
        }
    }

    #[test]
    fn default_directory_ships_fallback_flag() {
        let flags = FlagDirectory::default();
        let eg = FlagDirectory::default_flags_dir().join("flag_eg.png");
        assert_eq!(flags.fallback(), &ImageHandle::Asset(eg.clone()));
        assert_eq!(flags.resolve("EG"), ImageHandle::Asset(eg.clone()));
        assert_eq!(flags.resolve("JP"), ImageHandle::Asset(eg));
    }

    #[test]
    fn no_images_is_always_placeholder() {
        assert_eq!(NoImages.resolve("US"), ImageHandle::Placeholder);
    }
}
