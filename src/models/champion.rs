use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One champion entry of the Data Dragon `champion.json` feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChampionInfo {
    /// Data Dragon id, e.g. "MonkeyKing"
    pub id: String,
    /// Numeric champion id as a string, e.g. "62"
    pub key: String,
    /// Display name, e.g. "Wukong"
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Top level of `cdn/{version}/data/{locale}/champion.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionDataResponse {
    pub version: String,
    pub data: BTreeMap<String, ChampionInfo>,
}

/// Read-only champion reference data, indexed by display name and by numeric key.
///
/// Built once at startup and passed by reference to whatever needs to turn
/// champion ids into names or back.
#[derive(Debug, Clone, Default)]
pub struct ChampionCatalog {
    version: String,
    champions: Vec<ChampionInfo>,
    by_name: HashMap<String, usize>,
    by_key: HashMap<String, usize>,
}

impl ChampionCatalog {
    pub fn new(version: impl Into<String>, champions: impl IntoIterator<Item = ChampionInfo>) -> Self {
        let champions: Vec<ChampionInfo> = champions.into_iter().collect();
        let mut by_name = HashMap::with_capacity(champions.len());
        let mut by_key = HashMap::with_capacity(champions.len());
        for (index, champion) in champions.iter().enumerate() {
            by_name.insert(champion.name.clone(), index);
            by_key.insert(champion.key.clone(), index);
        }
        Self {
            version: version.into(),
            champions,
            by_name,
            by_key,
        }
    }

    /// Data Dragon version the catalog was built from
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Looks up by display name; the Data Dragon id ("MonkeyKing") is accepted too.
    pub fn by_name(&self, name: &str) -> Option<&ChampionInfo> {
        self.by_name
            .get(name)
            .map(|&index| &self.champions[index])
            .or_else(|| self.champions.iter().find(|c| c.id == name))
    }

    pub fn by_key(&self, key: &str) -> Option<&ChampionInfo> {
        self.by_key.get(key).map(|&index| &self.champions[index])
    }

    pub fn by_id(&self, champion_id: u32) -> Option<&ChampionInfo> {
        self.by_key(&champion_id.to_string())
    }

    pub fn name_for_id(&self, champion_id: u32) -> Option<&str> {
        self.by_id(champion_id).map(|c| c.name.as_str())
    }

    /// Numeric id for a display name, if the key is a valid number
    pub fn id_for_name(&self, name: &str) -> Option<u32> {
        self.by_name(name).and_then(|c| c.key.parse().ok())
    }

    /// All display names, sorted
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.champions.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

impl From<ChampionDataResponse> for ChampionCatalog {
    fn from(response: ChampionDataResponse) -> Self {
        ChampionCatalog::new(response.version, response.data.into_values())
    }
}
