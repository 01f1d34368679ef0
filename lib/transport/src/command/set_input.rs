use serde::{Deserialize, Serialize};

use crate::IoAddress;

/// Request to change the value of an input. The topic carries the target
/// address, the payload may repeat it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SetInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<IoAddress>,
    pub value: String,
}
