/// Catalog loading
///
/// The catalog is read once at startup. It comes from, in order:
/// - the file named by `CAT_CLICKER_CATALOG`
/// - `catalog.json` in the user's config directory:
///   - Linux: ~/.config/cat-clicker/catalog.json
///   - macOS: ~/Library/Application Support/cat-clicker/catalog.json
///   - Windows: %APPDATA%\cat-clicker\catalog.json
/// - the built-in reference cats

use std::path::{Path, PathBuf};

use super::data::{reference_cats, Cat};
use super::error::CatalogError;

/// Environment variable naming an explicit catalog file
pub const CATALOG_ENV: &str = "CAT_CLICKER_CATALOG";

/// Parse a catalog from JSON and validate it
pub fn from_json(json: &str) -> Result<Vec<Cat>, CatalogError> {
    let cats: Vec<Cat> = serde_json::from_str(json)?;
    validate(&cats)?;
    Ok(cats)
}

/// Load a catalog file.
/// Relative image paths are resolved against the file's directory.
pub fn load_file(path: &Path) -> Result<Vec<Cat>, CatalogError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut cats = from_json(&json)?;

    if let Some(base) = path.parent() {
        for cat in &mut cats {
            let source = Path::new(&cat.image_source);
            if source.is_relative() {
                cat.image_source = base.join(source).to_string_lossy().into_owned();
            }
        }
    }

    Ok(cats)
}

/// Get the path where a user catalog would live
pub fn default_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push("cat-clicker");
    path.push("catalog.json");
    Some(path)
}

/// Pick the catalog file to load, if any
pub fn resolve_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CATALOG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    default_path().filter(|path| path.exists())
}

/// Load the startup catalog.
///
/// A broken catalog file is reported and the reference cats are used instead.
pub fn load() -> Vec<Cat> {
    let Some(path) = resolve_path() else {
        tracing::info!("no catalog file found, using reference cats");
        return reference_cats();
    };

    match load_file(&path) {
        Ok(cats) => {
            tracing::info!(path = %path.display(), count = cats.len(), "loaded catalog");
            cats
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to reference cats");
            reference_cats()
        }
    }
}

fn validate(cats: &[Cat]) -> Result<(), CatalogError> {
    if cats.is_empty() {
        return Err(CatalogError::Empty);
    }
    for (index, cat) in cats.iter().enumerate() {
        if cat.name.trim().is_empty() {
            return Err(CatalogError::BlankField { index, field: "name" });
        }
        if cat.image_source.trim().is_empty() {
            return Err(CatalogError::BlankField { index, field: "image_source" });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_count_defaults_to_zero() {
        let cats = from_json(r#"[{"name": "Tom", "image_source": "tom.png"}]"#).unwrap();
        assert_eq!(cats, vec![Cat::new("Tom", "tom.png")]);
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_rejects_blank_fields() {
        let err = from_json(r#"[{"name": "Tom", "image_source": "a.png"}, {"name": " ", "image_source": "b.png"}]"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::BlankField { index: 1, field: "name" }));

        let err = from_json(r#"[{"name": "Tom", "image_source": ""}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::BlankField { index: 0, field: "image_source" }));
    }

    #[test]
    fn test_rejects_negative_count() {
        let err = from_json(r#"[{"name": "Tom", "image_source": "a.png", "click_count": -1}]"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_serialization() {
        let mut cats = reference_cats();
        cats[4].click_count = 11;

        let json = serde_json::to_string_pretty(&cats).unwrap();
        let restored = from_json(&json).unwrap();

        assert_eq!(cats, restored);
    }

    #[test]
    fn test_load_file_resolves_relative_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            "catalog.json",
            r#"[{"name": "Tom", "image_source": "tom.png", "click_count": 2},
                {"name": "Abs", "image_source": "/srv/abs.png"}]"#,
        );

        let cats = load_file(&path).unwrap();

        assert_eq!(Path::new(&cats[0].image_source), dir.path().join("tom.png"));
        assert_eq!(cats[0].click_count, 2);
        assert_eq!(cats[1].image_source, "/srv/abs.png");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/catalog.json");
        assert!(matches!(load_file(&path), Err(CatalogError::Io { .. })));
    }

    // The catalog variable is process-wide, so every case runs in this one test
    #[test]
    fn test_load_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write_catalog(&dir, "broken.json", "{ not a catalog");
        let empty = write_catalog(&dir, "empty.json", "[]");
        let valid = write_catalog(
            &dir,
            "valid.json",
            r#"[{"name": "Tom", "image_source": "/srv/tom.png", "click_count": 3}]"#,
        );
        let previous = std::env::var_os(CATALOG_ENV);

        std::env::set_var(CATALOG_ENV, &broken);
        assert_eq!(resolve_path(), Some(broken.clone()));
        assert_eq!(load(), reference_cats());

        std::env::set_var(CATALOG_ENV, &empty);
        assert_eq!(load(), reference_cats());

        std::env::set_var(CATALOG_ENV, &valid);
        let mut tom = Cat::new("Tom", "/srv/tom.png");
        tom.click_count = 3;
        assert_eq!(load(), vec![tom]);

        match previous {
            Some(value) => std::env::set_var(CATALOG_ENV, value),
            None => std::env::remove_var(CATALOG_ENV),
        }
    }
}
