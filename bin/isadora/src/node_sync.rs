use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};

use transport::discovery::ConfigAttr;
use transport::{DataType, InputType, NodeAttr, NodeStatus, NodeType, OutputType, RunState};
use transport::DEFAULT_INSTANCE;

use crate::Registry;

/// How a node is represented, chosen by the id of the property the gateway
/// reports for it.
#[derive(Debug)]
pub struct Classification {
    pub node_type: NodeType,
    pub output_type: OutputType,
    pub has_input: bool,
    normalize: fn(&str) -> String,
}

impl Classification {
    pub fn normalize(&self, value: &str) -> String {
        (self.normalize)(value)
    }
}

const CLASSIFICATIONS: &[(&str, Classification)] = &[
    (
        "ST",
        Classification {
            node_type: NodeType::OnOffSwitch,
            output_type: OutputType::OnOffSwitch,
            has_input: true,
            normalize: normalize_switch,
        },
    ),
    (
        "OL",
        Classification {
            node_type: NodeType::Dimmer,
            output_type: OutputType::Dimmer,
            has_input: true,
            normalize: passthrough,
        },
    ),
];

static UNKNOWN: Classification = Classification {
    node_type: NodeType::Unknown,
    output_type: OutputType::OnOffSwitch,
    has_input: false,
    normalize: passthrough,
};

pub fn classify(property_id: &str) -> &'static Classification {
    CLASSIFICATIONS
        .iter()
        .find(|(id, _)| *id == property_id)
        .map(|(_, classification)| classification)
        .unwrap_or(&UNKNOWN)
}

/// The first property with a known id, otherwise the first one reported.
pub fn primary_property(isy_node: &isy::Node) -> Option<&isy::Property> {
    isy_node
        .properties
        .iter()
        .find(|property| CLASSIFICATIONS.iter().any(|(id, _)| *id == property.id))
        .or_else(|| isy_node.properties.first())
}

fn normalize_switch(value: &str) -> String {
    if value == "0" || value.eq_ignore_ascii_case("false") {
        "false".to_string()
    } else {
        "true".to_string()
    }
}

fn passthrough(value: &str) -> String {
    value.to_string()
}

/// Mirrors ISY nodes into the registry.
#[derive(Clone)]
pub struct NodeSync {
    registry: Arc<Registry>,
}

impl NodeSync {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Registers the node, its output and, for nodes accepting commands, its
    /// input on first sight. The output value is written on every call.
    pub async fn sync(&self, isy_node: &isy::Node) {
        let node_id = isy_node.address.as_str();
        let property = primary_property(isy_node).cloned().unwrap_or_default();
        let classification = classify(&property.id);
        let value = classification.normalize(&property.value);

        trace!(
            "sync node {node_id} property {}={} as {}",
            property.id,
            property.value,
            classification.node_type
        );

        if self.registry.node(node_id).await.is_none() {
            self.register_node(isy_node, classification).await;
        }

        let output = self
            .registry
            .output(node_id, classification.output_type, DEFAULT_INSTANCE)
            .await;

        if output.is_none() {
            self.registry
                .create_output(node_id, classification.output_type, DEFAULT_INSTANCE)
                .await;

            if classification.has_input {
                self.registry
                    .create_input(
                        node_id,
                        InputType::from(classification.output_type),
                        DEFAULT_INSTANCE,
                    )
                    .await;
            }
        }

        self.registry
            .update_output_value(
                node_id,
                classification.output_type,
                DEFAULT_INSTANCE,
                &value,
            )
            .await;
    }

    async fn register_node(&self, isy_node: &isy::Node, classification: &Classification) {
        let node_id = isy_node.address.as_str();
        debug!(
            "discovered {} {node_id} ({})",
            classification.node_type, isy_node.name
        );

        self.registry
            .create_node(node_id, classification.node_type)
            .await;

        self.registry
            .new_node_config(
                node_id,
                NodeAttr::Name,
                ConfigAttr {
                    data_type: DataType::String,
                    description: "Name of ISY node".to_string(),
                    default: isy_node.name.clone(),
                    secret: false,
                },
            )
            .await;

        self.registry
            .new_node_config(
                node_id,
                NodeAttr::Product,
                ConfigAttr {
                    data_type: DataType::String,
                    description: "Device product name".to_string(),
                    default: isy_node.device_type.clone(),
                    secret: false,
                },
            )
            .await;

        self.registry
            .set_node_status(
                node_id,
                HashMap::from([(NodeStatus::RunState, RunState::Ready.to_string())]),
            )
            .await;
    }
}
