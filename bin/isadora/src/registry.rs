use std::collections::HashMap;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, error, warn};
use serde::Serialize;
use tokio::sync::Mutex;

use transport::discovery::{ConfigAttr, InputDiscovery, NodeDiscovery, OutputDiscovery};
use transport::{
    InputType, IoAddress, NodeAddress, NodeAttr, NodeStatus, NodeType, OutputType, OutputValue,
    Topic,
};

use crate::Publisher;

/// Nodes, inputs, outputs and output values of one publisher. Every change
/// is published as a retained record.
pub struct Registry {
    domain: String,
    publisher_id: String,
    publisher: Arc<dyn Publisher>,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    nodes: HashMap<String, NodeDiscovery>,
    outputs: HashMap<IoAddress, OutputDiscovery>,
    inputs: HashMap<IoAddress, InputDiscovery>,
    values: HashMap<IoAddress, OutputValue>,
}

impl Registry {
    pub fn new(domain: String, publisher_id: String, publisher: Arc<dyn Publisher>) -> Self {
        Self {
            domain,
            publisher_id,
            publisher,
            state: Mutex::new(State::default()),
        }
    }

    pub fn node_address(&self, node_id: &str) -> NodeAddress {
        NodeAddress::new(&self.domain, &self.publisher_id, node_id)
    }

    fn output_address(&self, node_id: &str, output_type: OutputType, instance: &str) -> IoAddress {
        self.node_address(node_id).io(output_type, instance)
    }

    async fn publish<T: Serialize>(&self, topic: Topic, record: &T) {
        match serde_json::to_vec(record) {
            Ok(payload) => self.publisher.publish(topic, payload).await,
            Err(err) => error!("Error serializing {topic}: {err}"),
        }
    }
}

impl Registry {
    pub async fn node(&self, node_id: &str) -> Option<NodeDiscovery> {
        let state = self.state.lock().await;
        state.nodes.get(node_id).cloned()
    }

    /// Resolves a node by its own address or by the address of one of its
    /// inputs or outputs.
    pub async fn node_by_address(&self, address: &str) -> Option<NodeDiscovery> {
        let node_address = NodeAddress::from_str(address)
            .or_else(|_| IoAddress::from_str(address).map(|address| address.node))
            .ok()?;

        if node_address.domain != self.domain || node_address.publisher_id != self.publisher_id {
            return None;
        }

        self.node(&node_address.node_id).await
    }

    /// Returns the existing node untouched when `node_id` is already known.
    pub async fn create_node(&self, node_id: &str, node_type: NodeType) -> NodeDiscovery {
        let node = {
            let mut state = self.state.lock().await;
            if let Some(node) = state.nodes.get(node_id) {
                return node.clone();
            }

            let node = NodeDiscovery::new(self.node_address(node_id), node_type);
            state.nodes.insert(node_id.to_string(), node.clone());
            node
        };

        debug!("created node {} of type {}", node.address, node.node_type);
        self.publish(Topic::Node(node.address.clone()), &node).await;

        node
    }

    /// Registers a configurable attribute and seeds the attribute with the
    /// default value when it has none yet.
    pub async fn new_node_config(&self, node_id: &str, attr: NodeAttr, config: ConfigAttr) {
        self.modify_node(node_id, |node| {
            let seeded = !node.attr.contains_key(&attr);
            if seeded {
                node.attr.insert(attr, config.default.clone());
            }

            let replaced = node.config.insert(attr, config.clone()).as_ref() != Some(&config);
            seeded || replaced
        })
        .await;
    }

    pub async fn update_node_config(&self, node_id: &str, attr: NodeAttr, config: ConfigAttr) {
        self.modify_node(node_id, |node| {
            node.config.insert(attr, config.clone()).as_ref() != Some(&config)
        })
        .await;
    }

    pub async fn set_node_status(&self, node_id: &str, status: HashMap<NodeStatus, String>) {
        self.modify_node(node_id, |node| merge(&mut node.status, status))
            .await;
    }

    pub async fn set_node_attr(&self, node_id: &str, attr: HashMap<NodeAttr, String>) {
        self.modify_node(node_id, |node| merge(&mut node.attr, attr))
            .await;
    }

    /// Applies `change` to a known node and republishes it when `change`
    /// reports a modification.
    async fn modify_node(&self, node_id: &str, change: impl FnOnce(&mut NodeDiscovery) -> bool) {
        let node = {
            let mut state = self.state.lock().await;
            let Some(node) = state.nodes.get_mut(node_id) else {
                warn!("ignoring update of unknown node {node_id}");
                return;
            };

            if !change(node) {
                return;
            }

            node.clone()
        };

        self.publish(Topic::Node(node.address.clone()), &node).await;
    }
}

impl Registry {
    pub async fn output(
        &self,
        node_id: &str,
        output_type: OutputType,
        instance: &str,
    ) -> Option<OutputDiscovery> {
        let address = self.output_address(node_id, output_type, instance);
        let state = self.state.lock().await;
        state.outputs.get(&address).cloned()
    }

    pub async fn create_output(
        &self,
        node_id: &str,
        output_type: OutputType,
        instance: &str,
    ) -> OutputDiscovery {
        let address = self.output_address(node_id, output_type, instance);

        let output = {
            let mut state = self.state.lock().await;
            if let Some(output) = state.outputs.get(&address) {
                return output.clone();
            }

            let output = OutputDiscovery {
                address: address.clone(),
                node_id: node_id.to_string(),
                output_type,
                instance: instance.to_string(),
            };
            state.outputs.insert(address, output.clone());
            output
        };

        debug!("created output {}", output.address);
        self.publish(Topic::Output(output.address.clone()), &output)
            .await;

        output
    }

    pub async fn output_value(
        &self,
        node_id: &str,
        output_type: OutputType,
        instance: &str,
    ) -> Option<OutputValue> {
        let address = self.output_address(node_id, output_type, instance);
        let state = self.state.lock().await;
        state.values.get(&address).cloned()
    }

    /// Stores the value of an output on every call. Only values that differ
    /// from the stored one are published. Returns whether it was published.
    pub async fn update_output_value(
        &self,
        node_id: &str,
        output_type: OutputType,
        instance: &str,
        value: &str,
    ) -> bool {
        let address = self.output_address(node_id, output_type, instance);

        let value = {
            let mut state = self.state.lock().await;
            if !state.outputs.contains_key(&address) {
                warn!("ignoring value of unknown output {address}");
                return false;
            }

            let output_value = OutputValue {
                address: address.clone(),
                value: value.to_string(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            };

            let previous = state.values.insert(address, output_value.clone());
            if previous.is_some_and(|previous| previous.value == output_value.value) {
                return false;
            }

            output_value
        };

        self.publish(Topic::Value(value.address.clone()), &value)
            .await;

        true
    }
}

impl Registry {
    pub async fn input_by_address(&self, address: &str) -> Option<InputDiscovery> {
        let address = IoAddress::from_str(address).ok()?;
        let state = self.state.lock().await;
        state.inputs.get(&address).cloned()
    }

    pub async fn create_input(
        &self,
        node_id: &str,
        input_type: InputType,
        instance: &str,
    ) -> InputDiscovery {
        let address = self.node_address(node_id).io(input_type, instance);

        let input = {
            let mut state = self.state.lock().await;
            if let Some(input) = state.inputs.get(&address) {
                return input.clone();
            }

            let input = InputDiscovery {
                address: address.clone(),
                node_id: node_id.to_string(),
                input_type,
                instance: instance.to_string(),
            };
            state.inputs.insert(address, input.clone());
            input
        };

        debug!("created input {}", input.address);
        self.publish(Topic::Input(input.address.clone()), &input).await;

        input
    }
}

fn merge<K: Eq + Hash>(target: &mut HashMap<K, String>, source: HashMap<K, String>) -> bool {
    let mut changed = false;

    for (key, value) in source {
        if target.get(&key) != Some(&value) {
            target.insert(key, value);
            changed = true;
        }
    }

    changed
}

#[cfg(test)]
impl Registry {
    pub async fn nodes(&self) -> Vec<NodeDiscovery> {
        let state = self.state.lock().await;
        state.nodes.values().cloned().collect()
    }

    pub async fn outputs(&self) -> Vec<OutputDiscovery> {
        let state = self.state.lock().await;
        state.outputs.values().cloned().collect()
    }

    pub async fn inputs(&self) -> Vec<InputDiscovery> {
        let state = self.state.lock().await;
        state.inputs.values().cloned().collect()
    }
}
