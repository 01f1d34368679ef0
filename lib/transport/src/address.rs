use std::fmt;
use std::str::FromStr;

use serde::{
    de::{self, value, Error},
    Deserialize, Serialize,
};

/// Instance used for the single output and input of ISY nodes.
pub const DEFAULT_INSTANCE: &str = "0";

/// `<domain>/<publisher>/<node>`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeAddress {
    pub domain: String,
    pub publisher_id: String,
    pub node_id: String,
}

/// `<domain>/<publisher>/<node>/<io type>/<instance>`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IoAddress {
    pub node: NodeAddress,
    pub io_type: String,
    pub instance: String,
}

impl NodeAddress {
    pub fn new(domain: &str, publisher_id: &str, node_id: &str) -> NodeAddress {
        NodeAddress {
            domain: domain.to_string(),
            publisher_id: publisher_id.to_string(),
            node_id: node_id.to_string(),
        }
    }

    pub fn io(&self, io_type: impl fmt::Display, instance: &str) -> IoAddress {
        IoAddress {
            node: self.clone(),
            io_type: io_type.to_string(),
            instance: instance.to_string(),
        }
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}", self.domain, self.publisher_id, self.node_id)
    }
}

impl fmt::Display for IoAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}", self.node, self.io_type, self.instance)
    }
}

impl FromStr for NodeAddress {
    type Err = value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');

        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(domain), Some(publisher_id), Some(node_id), None)
                if !domain.is_empty() && !publisher_id.is_empty() && !node_id.is_empty() =>
            {
                Ok(NodeAddress::new(domain, publisher_id, node_id))
            }
            _ => Err(value::Error::custom(format!(
                "expected domain/publisher/node, got {s}"
            ))),
        }
    }
}

impl FromStr for IoAddress {
    type Err = value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, '/');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(instance), Some(io_type), Some(node))
                if !instance.is_empty() && !io_type.is_empty() =>
            {
                let node = NodeAddress::from_str(node)?;
                Ok(node.io(io_type, instance))
            }
            _ => Err(value::Error::custom(format!(
                "expected domain/publisher/node/type/instance, got {s}"
            ))),
        }
    }
}

impl Serialize for NodeAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NodeAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let address = String::deserialize(deserializer)?;
        NodeAddress::from_str(&address).map_err(de::Error::custom)
    }
}

impl Serialize for IoAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IoAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let address = String::deserialize(deserializer)?;
        IoAddress::from_str(&address).map_err(de::Error::custom)
    }
}
