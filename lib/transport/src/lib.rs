mod address;
pub use address::{IoAddress, NodeAddress, DEFAULT_INSTANCE};

mod topic;
pub use topic::Topic;

mod mqtt;
pub use mqtt::connect_mqtt;

pub mod discovery {
    mod input;
    mod node;
    mod output;

    pub use input::Input as InputDiscovery;
    pub use node::{ConfigAttr, Node as NodeDiscovery};
    pub use output::Output as OutputDiscovery;
}

pub mod command {
    mod configure;
    mod set_input;

    pub use configure::ConfigureNode;
    pub use set_input::SetInput;
}

mod value;
pub use value::OutputValue;

use serde::{Deserialize, Serialize};
use str_derive::Str;

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Gateway,
    OnOffSwitch,
    Dimmer,
    Unknown,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    #[serde(rename = "switch")]
    OnOffSwitch,
    Dimmer,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Switch,
    Dimmer,
}

impl From<OutputType> for InputType {
    fn from(output_type: OutputType) -> Self {
        match output_type {
            OutputType::OnOffSwitch => InputType::Switch,
            OutputType::Dimmer => InputType::Dimmer,
        }
    }
}

impl From<InputType> for OutputType {
    fn from(input_type: InputType) -> Self {
        match input_type {
            InputType::Switch => OutputType::OnOffSwitch,
            InputType::Dimmer => OutputType::Dimmer,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Unknown,
    Ready,
    Error,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    RunState,
    LastError,
    LatencyMsec,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeAttr {
    Name,
    Product,
    SoftwareVersion,
    Model,
    Manufacturer,
    LocalIp,
    Mac,
    LoginName,
    Password,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    String,
    Bool,
    Int,
}
