pub mod error;

use std::fmt;

use serde::{Deserialize, Serialize};

use self::error::CatalogError;

/// Which earpiece an artifact belongs to. The vendor publishes one FOTA
/// image per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmwareVersion {
    pub id: String,
    pub label: String,
}

/// A supported earbud model. `url_template` carries `{version}` and `{side}`
/// placeholders, so the whole catalog stays plain data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceModel {
    pub id: String,
    pub display_name: String,
    pub url_template: String,
    pub versions: Vec<FirmwareVersion>,
}

impl DeviceModel {
    pub fn version(&self, id: &str) -> Result<&FirmwareVersion, CatalogError> {
        self.versions
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| CatalogError::VersionNotFound {
                model: self.display_name.clone(),
                version: id.to_string(),
            })
    }

    pub fn artifact_url(&self, version: &str, side: Side) -> String {
        self.url_template
            .replace("{version}", version)
            .replace("{side}", side.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    models: Vec<DeviceModel>,
}

impl Catalog {
    pub fn new(models: Vec<DeviceModel>) -> Self {
        Self { models }
    }

    /// The models this build knows how to fetch firmware for. Versions are
    /// ordered newest first, matching the vendor's release listing.
    pub fn builtin() -> Self {
        Self::new(vec![
            DeviceModel {
                id: "s505-cc-ultra".to_string(),
                display_name: "S505 cc ultra".to_string(),
                url_template: "http://twsfota.198509.xyz/tws_fota_bin/S505/AB1562AE/S505_cc%20ultra_AB1562AE_V310.6.505.{version}_fota/S505_cc%20ultra_AB1562AE_V310.6.505.{version}_{side}_FotaPackage.bin".to_string(),
                versions: vec![
                    available("153"),
                    available("152"),
                    available("135"),
                    available("133"),
                ],
            },
            DeviceModel {
                id: "v52-tb".to_string(),
                display_name: "V5.2 TB".to_string(),
                url_template: "http://twsfota.198509.xyz/tws_fota_bin/V52TB/AB1565/V5.2%20TB_AB1565_V2.0.1.{version}_fota/V5.2%20TB_AB1565_V2.0.1.{version}_{side}_FotaPackage.bin".to_string(),
                versions: vec![available("108"), available("105")],
            },
        ])
    }

    pub fn models(&self) -> &[DeviceModel] {
        &self.models
    }

    pub fn resolve(&self, model_id: &str) -> Result<&DeviceModel, CatalogError> {
        self.models
            .iter()
            .find(|m| m.id == model_id)
            .ok_or_else(|| CatalogError::ModelNotFound(model_id.to_string()))
    }

    /// One-based index as shown in the interactive model listing.
    pub fn by_index(&self, index: usize) -> Option<&DeviceModel> {
        index.checked_sub(1).and_then(|i| self.models.get(i))
    }
}

fn available(id: &str) -> FirmwareVersion {
    FirmwareVersion {
        id: id.to_string(),
        label: format!("Version {} is available.", id),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn resolve_known_model() {
        let catalog = Catalog::builtin();
        let model = catalog.resolve("s505-cc-ultra").unwrap();
        assert_eq!(model.display_name, "S505 cc ultra");
    }

    #[test]
    fn resolve_unknown_model_fails() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.resolve("q30"),
            Err(CatalogError::ModelNotFound(_))
        ));
    }

    #[test]
    fn version_lookup() {
        let catalog = Catalog::builtin();
        let model = catalog.resolve("s505-cc-ultra").unwrap();
        assert!(model.version("153").is_ok());
        assert!(matches!(
            model.version("999"),
            Err(CatalogError::VersionNotFound { .. })
        ));
    }

    #[test]
    fn url_substitution() {
        let catalog = Catalog::builtin();
        let model = catalog.resolve("s505-cc-ultra").unwrap();
        let url = model.artifact_url("153", Side::Left);
        assert_eq!(
            url,
            "http://twsfota.198509.xyz/tws_fota_bin/S505/AB1562AE/S505_cc%20ultra_AB1562AE_V310.6.505.153_fota/S505_cc%20ultra_AB1562AE_V310.6.505.153_left_FotaPackage.bin"
        );
    }

    #[test]
    fn url_construction_is_deterministic() {
        let catalog = Catalog::builtin();
        let model = catalog.resolve("v52-tb").unwrap();
        assert_eq!(
            model.artifact_url("108", Side::Right),
            model.artifact_url("108", Side::Right)
        );
    }

    #[test]
    fn urls_are_injective_across_model_version_side() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for model in catalog.models() {
            for version in &model.versions {
                for side in [Side::Left, Side::Right] {
                    let url = model.artifact_url(&version.id, side);
                    assert!(
                        seen.insert(url.clone()),
                        "duplicate URL for {}/{}/{}: {}",
                        model.id,
                        version.id,
                        side,
                        url
                    );
                }
            }
        }
    }

    #[test]
    fn by_index_is_one_based() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_index(1).unwrap().id, "s505-cc-ultra");
        assert_eq!(catalog.by_index(2).unwrap().id, "v52-tb");
        assert!(catalog.by_index(0).is_none());
        assert!(catalog.by_index(3).is_none());
    }
}
