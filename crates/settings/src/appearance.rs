use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

/// 外觀群組目錄：群組名稱對應主題變體清單。 / Read-only view of the
/// "appearances" configuration key: appearance group name to the list of
/// theme variant names the preferences UI can offer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppearanceCatalog {
    groups: BTreeMap<String, Vec<String>>,
}

impl AppearanceCatalog {
    /// 從設定值建立目錄；格式不符的項目會被略過。 / Builds the catalog from a
    /// configuration value. Parsing is tolerant: a non-object value yields an
    /// empty catalog, and malformed groups or variants are skipped.
    pub fn from_config(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            if !value.is_null() {
                debug!("appearances value is not an object, ignoring it");
            }
            return Self::default();
        };

        let mut groups = BTreeMap::new();
        for (name, variants) in map {
            let Some(entries) = variants.as_array() else {
                debug!("appearance group '{name}' is not an array, skipping it");
                continue;
            };
            let variants: Vec<String> = entries
                .iter()
                .filter_map(|entry| match entry.as_str() {
                    Some(text) => Some(text.to_string()),
                    None => {
                        debug!("appearance group '{name}' contains a non-string variant, skipping it");
                        None
                    }
                })
                .collect();
            groups.insert(name.clone(), variants);
        }
        Self { groups }
    }

    /// 所有群組名稱。 / Iterator over the group names.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// 取得群組的變體清單。 / Returns the variants of the given group.
    pub fn variants(&self, group: &str) -> Option<&[String]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// 群組的第一個變體，作為切換群組後的預選值。 / First variant of a group,
    /// used as the preselected value after the group changes.
    pub fn first_variant(&self, group: &str) -> Option<&str> {
        self.variants(group)?.first().map(String::as_str)
    }

    /// 檢查群組是否包含指定變體。 / Checks whether a group offers a variant.
    pub fn contains(&self, group: &str, variant: &str) -> bool {
        self.variants(group)
            .is_some_and(|variants| variants.iter().any(|known| known == variant))
    }

    /// 群組數量。 / Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// 是否沒有任何群組。 / Checks whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
