use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{DataType, NodeAddress, NodeAttr, NodeStatus, NodeType};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Node {
    pub address: NodeAddress,
    pub node_id: String,
    pub node_type: NodeType,
    #[serde(default)]
    pub attr: HashMap<NodeAttr, String>,
    #[serde(default)]
    pub config: HashMap<NodeAttr, ConfigAttr>,
    #[serde(default)]
    pub status: HashMap<NodeStatus, String>,
}

impl Node {
    pub fn new(address: NodeAddress, node_type: NodeType) -> Node {
        Node {
            node_id: address.node_id.clone(),
            address,
            node_type,
            attr: HashMap::new(),
            config: HashMap::new(),
            status: HashMap::new(),
        }
    }
}

/// Describes a configurable attribute of a node.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ConfigAttr {
    pub data_type: DataType,
    pub description: String,
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub secret: bool,
}
