use std::path::{Path, PathBuf};

use url::Url;

use crate::catalog::DeviceModel;

/// Directory a (model, version) pair is stored under. Namespaced by model
/// display name and version id, so two models sharing a version string never
/// collide on disk.
pub fn artifact_dir(root: &Path, model: &DeviceModel, version: &str) -> PathBuf {
    root.join(format!("{}_{}", model.display_name, version))
}

/// Local file name for a download, taken from the final path segment of the
/// source URL. The segment is kept as served (percent-escapes and all), which
/// keeps names stable across runs and identifiable against the server's.
pub fn file_name_for(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url)?;
    let name = parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("firmware.bin");
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn directories_never_collide_across_models_and_versions() {
        let catalog = Catalog::builtin();
        let root = Path::new("/downloads");
        let mut seen = HashSet::new();
        for model in catalog.models() {
            for version in &model.versions {
                assert!(seen.insert(artifact_dir(root, model, &version.id)));
            }
        }
    }

    #[test]
    fn directory_combines_model_and_version() {
        let catalog = Catalog::builtin();
        let model = catalog.resolve("v52-tb").unwrap();
        let dir = artifact_dir(Path::new("/downloads"), model, "108");
        assert_eq!(dir, PathBuf::from("/downloads/V5.2 TB_108"));
    }

    #[test]
    fn file_name_is_the_final_url_segment() {
        let name = file_name_for(
            "http://twsfota.198509.xyz/tws_fota_bin/S505/S505_cc%20ultra_V310.6.505.153_left_FotaPackage.bin",
        )
        .unwrap();
        assert_eq!(name, "S505_cc%20ultra_V310.6.505.153_left_FotaPackage.bin");
    }

    #[test]
    fn empty_final_segment_falls_back() {
        let name = file_name_for("http://example.com/downloads/").unwrap();
        assert_eq!(name, "firmware.bin");
    }

    #[test]
    fn invalid_url_is_rejected() {
        assert!(file_name_for("not a url").is_err());
    }
}
