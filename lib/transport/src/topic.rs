use std::fmt;
use std::str::FromStr;

use serde::de::{value, Error};

use crate::{IoAddress, NodeAddress};

#[derive(Clone, Debug, PartialEq)]
pub enum Topic {
    Node(NodeAddress),
    ConfigureNode(NodeAddress),
    Output(IoAddress),
    Input(IoAddress),
    Value(IoAddress),
    SetInput(IoAddress),
}

impl Topic {
    /// Inbound topics this publisher listens to, with MQTT wildcards in place
    /// of the node, io type and instance.
    pub fn subscriptions(domain: &str, publisher_id: &str) -> [String; 2] {
        [
            format!("{domain}/{publisher_id}/+/+/+/$set"),
            format!("{domain}/{publisher_id}/+/$configure"),
        ]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Topic::Node(address) => write!(f, "{}/$node", address),
            Topic::ConfigureNode(address) => write!(f, "{}/$configure", address),
            Topic::Output(address) => write!(f, "{}/$output", address),
            Topic::Input(address) => write!(f, "{}/$input", address),
            Topic::Value(address) => write!(f, "{}/$value", address),
            Topic::SetInput(address) => write!(f, "{}/$set", address),
        }
    }
}

impl FromStr for Topic {
    type Err = value::Error;

    fn from_str(s: &str) -> std::result::Result<Topic, Self::Err> {
        const ERROR_MSG: &str = "supported topics are <node>/$node, <node>/$configure, \
            <io>/$output, <io>/$input, <io>/$value and <io>/$set";

        let (address, suffix) = s
            .rsplit_once('/')
            .ok_or_else(|| value::Error::custom(ERROR_MSG))?;

        match suffix {
            "$node" => Ok(Topic::Node(address.parse()?)),
            "$configure" => Ok(Topic::ConfigureNode(address.parse()?)),
            "$output" => Ok(Topic::Output(address.parse()?)),
            "$input" => Ok(Topic::Input(address.parse()?)),
            "$value" => Ok(Topic::Value(address.parse()?)),
            "$set" => Ok(Topic::SetInput(address.parse()?)),
            _ => Err(value::Error::custom(ERROR_MSG)),
        }
    }
}
