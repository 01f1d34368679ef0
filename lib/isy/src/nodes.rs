use serde::Deserialize;

/// Answer of `/rest/nodes`. Folders, groups and the root entry are skipped.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Nodes {
    #[serde(rename = "node", default)]
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Node {
    pub address: String,
    #[serde(default)]
    pub name: String,
    /// Insteon device category, e.g. `2.42.67.0`.
    #[serde(rename = "type", default)]
    pub device_type: String,
    /// Thermostats and other multi-function devices report several.
    #[serde(rename = "property", default)]
    pub properties: Vec<Property>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Property {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@value", default)]
    pub value: String,
}
