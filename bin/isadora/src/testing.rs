//! Fakes shared by the unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use isy::{Configuration, DeviceSpecs, Node, Product, Property, Root};
use transport::Topic;

use crate::{CommandDispatcher, Gateway, GatewayPoller, Publisher, Registry};

#[derive(Default)]
pub struct RecordingPublisher {
    messages: Mutex<Vec<(Topic, Vec<u8>)>>,
}

impl RecordingPublisher {
    pub fn topics(&self) -> Vec<String> {
        let messages = self.messages.lock().unwrap();
        messages.iter().map(|(topic, _)| topic.to_string()).collect()
    }

    pub fn payloads(&self, topic: &str) -> Vec<serde_json::Value> {
        let messages = self.messages.lock().unwrap();
        messages
            .iter()
            .filter(|(t, _)| t.to_string() == topic)
            .map(|(_, payload)| serde_json::from_slice(payload).unwrap())
            .collect()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, topic: Topic, payload: Vec<u8>) {
        self.messages.lock().unwrap().push((topic, payload));
    }
}

pub fn registry() -> (Arc<Registry>, Arc<RecordingPublisher>) {
    let publisher = Arc::new(RecordingPublisher::default());
    let registry = Registry::new("local".to_string(), "isy99".to_string(), publisher.clone());
    (Arc::new(registry), publisher)
}

/// Dispatcher over a gateway that was set up and polled once.
pub async fn dispatcher(gateway: Arc<FakeGateway>) -> (CommandDispatcher, Arc<Registry>) {
    let (registry, _) = registry();

    let poller = Arc::new(GatewayPoller::new(
        "gateway".to_string(),
        gateway.clone(),
        registry.clone(),
    ));
    poller.setup_gateway_node().await;
    poller.poll().await;

    (CommandDispatcher::new(poller, gateway, registry.clone()), registry)
}

pub fn isy_node(address: &str, name: &str, property_id: &str, value: &str) -> Node {
    Node {
        address: address.to_string(),
        name: name.to_string(),
        device_type: "2.42.67.0".to_string(),
        properties: vec![property(property_id, value)],
    }
}

pub fn property(id: &str, value: &str) -> Property {
    Property {
        id: id.to_string(),
        value: value.to_string(),
    }
}

pub fn configuration() -> Configuration {
    Configuration {
        device_specs: DeviceSpecs {
            make: "Universal Devices Inc.".to_string(),
            model: "Insteon Web Controller".to_string(),
        },
        app: "Insteon_UD99".to_string(),
        app_version: "3.3.10".to_string(),
        platform: "ISY-C-99".to_string(),
        root: Root {
            id: "00:21:b9:00:e7:08".to_string(),
            name: "ISY".to_string(),
        },
        product: Product {
            id: "1020".to_string(),
            description: "ISY 99i 256".to_string(),
        },
    }
}

/// In-memory gateway. Switch writes are reflected in the `ST` property of
/// the written node, like a real device would report on the next read.
pub struct FakeGateway {
    state: Mutex<FakeState>,
}

struct FakeState {
    reachable: bool,
    nodes_readable: bool,
    writes_accepted: bool,
    configuration: Configuration,
    nodes: Vec<Node>,
    writes: Vec<(String, bool)>,
    gateway_reads: usize,
}

impl FakeGateway {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                reachable: true,
                nodes_readable: true,
                writes_accepted: true,
                configuration: configuration(),
                nodes,
                writes: vec![],
                gateway_reads: 0,
            }),
        }
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.state.lock().unwrap().reachable = reachable;
    }

    pub fn set_nodes_readable(&self, readable: bool) {
        self.state.lock().unwrap().nodes_readable = readable;
    }

    pub fn set_writes_accepted(&self, accepted: bool) {
        self.state.lock().unwrap().writes_accepted = accepted;
    }

    pub fn set_configuration(&self, configuration: Configuration) {
        self.state.lock().unwrap().configuration = configuration;
    }

    pub fn set_nodes(&self, nodes: Vec<Node>) {
        self.state.lock().unwrap().nodes = nodes;
    }

    pub fn writes(&self) -> Vec<(String, bool)> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn gateway_reads(&self) -> usize {
        self.state.lock().unwrap().gateway_reads
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    fn address(&self) -> String {
        "192.168.1.10".to_string()
    }

    async fn read_gateway(&self) -> isy::Result<Configuration> {
        let mut state = self.state.lock().unwrap();
        state.gateway_reads += 1;

        if state.reachable {
            Ok(state.configuration.clone())
        } else {
            Err(isy::Error::Status(503))
        }
    }

    async fn read_nodes(&self) -> isy::Result<Vec<Node>> {
        let state = self.state.lock().unwrap();

        if state.nodes_readable {
            Ok(state.nodes.clone())
        } else {
            Err(isy::Error::Status(500))
        }
    }

    async fn write_on_off(&self, device_id: &str, is_enabled: bool) -> isy::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.writes.push((device_id.to_string(), is_enabled));

        if !state.writes_accepted {
            return Err(isy::Error::CommandRejected(device_id.to_string()));
        }

        let properties = state
            .nodes
            .iter_mut()
            .filter(|node| node.address == device_id)
            .flat_map(|node| node.properties.iter_mut())
            .filter(|property| property.id == "ST");

        for property in properties {
            property.value = if is_enabled { "255" } else { "0" }.to_string();
        }

        Ok(())
    }
}
