use serde::{Deserialize, Serialize};

use crate::{IoAddress, OutputType};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Output {
    pub address: IoAddress,
    pub node_id: String,
    pub output_type: OutputType,
    pub instance: String,
}
