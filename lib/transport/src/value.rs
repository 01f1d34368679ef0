use serde::{Deserialize, Serialize};

use crate::IoAddress;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct OutputValue {
    pub address: IoAddress,
    pub value: String,
    pub timestamp: String,
}
