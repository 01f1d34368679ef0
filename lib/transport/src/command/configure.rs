use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::NodeAddress;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ConfigureNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<NodeAddress>,
    #[serde(default)]
    pub attr: HashMap<String, String>,
}
