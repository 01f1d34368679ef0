use serde::{Deserialize, Serialize};

use crate::{InputType, IoAddress};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Input {
    pub address: IoAddress,
    pub node_id: String,
    pub input_type: InputType,
    pub instance: String,
}
