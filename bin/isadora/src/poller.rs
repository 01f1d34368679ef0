use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::Mutex;
use tokio::time::Instant;

use transport::discovery::ConfigAttr;
use transport::{DataType, NodeAttr, NodeStatus, NodeType, RunState};

use crate::{Gateway, NodeSync, Registry};

/// Connectivity of the ISY gateway as last observed by the poller.
#[derive(Clone, Debug, PartialEq)]
pub struct GatewayStatus {
    pub address: String,
    pub run_state: RunState,
    pub last_error: String,
    pub latency_ms: u128,
}

impl GatewayStatus {
    pub fn new(address: String) -> Self {
        Self {
            address,
            run_state: RunState::Unknown,
            last_error: String::new(),
            latency_ms: 0,
        }
    }

    /// Moves to `run_state`. Returns `false` and leaves the status untouched
    /// when already in that state.
    pub fn transition(&mut self, run_state: RunState, message: String) -> bool {
        if self.run_state == run_state {
            return false;
        }

        self.run_state = run_state;
        self.last_error = message;
        true
    }
}

pub struct GatewayPoller {
    gateway_id: String,
    gateway: Arc<dyn Gateway>,
    registry: Arc<Registry>,
    node_sync: NodeSync,
    poll_guard: Mutex<()>,
    status: Mutex<GatewayStatus>,
}

impl GatewayPoller {
    pub fn new(gateway_id: String, gateway: Arc<dyn Gateway>, registry: Arc<Registry>) -> Self {
        let status = GatewayStatus::new(gateway.address());

        Self {
            gateway_id,
            gateway,
            node_sync: NodeSync::new(registry.clone()),
            registry,
            poll_guard: Mutex::new(()),
            status: Mutex::new(status),
        }
    }

    pub async fn status(&self) -> GatewayStatus {
        self.status.lock().await.clone()
    }

    /// Creates the gateway node and describes its connection settings.
    pub async fn setup_gateway_node(&self) {
        info!("setting up gateway node {}", self.gateway_id);

        self.registry
            .create_node(&self.gateway_id, NodeType::Gateway)
            .await;

        let settings = [
            (NodeAttr::LocalIp, "ISY gateway IP address"),
            (NodeAttr::LoginName, "ISY gateway login name"),
            (NodeAttr::Password, "ISY gateway login password"),
        ];

        for (attr, description) in settings {
            let config = ConfigAttr {
                data_type: DataType::String,
                description: description.to_string(),
                default: String::new(),
                secret: true,
            };

            self.registry
                .update_node_config(&self.gateway_id, attr, config)
                .await;
        }
    }

    /// Runs one synchronization cycle. Concurrent calls are serialized.
    pub async fn poll(&self) {
        let _guard = self.poll_guard.lock().await;

        if !self.read_gateway().await {
            return;
        }

        let nodes = match self.gateway.read_nodes().await {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!(
                    "Error reading nodes of gateway {}: {err}",
                    self.gateway.address()
                );
                return;
            }
        };

        debug!("syncing {} nodes", nodes.len());

        for node in nodes.iter() {
            self.node_sync.sync(node).await;
        }
    }

    /// Returns whether the gateway answered.
    async fn read_gateway(&self) -> bool {
        let address = self.gateway.address();

        let start = Instant::now();
        let result = self.gateway.read_gateway().await;
        let latency = start.elapsed();

        let mut status = self.status.lock().await;

        let configuration = match result {
            Ok(configuration) => configuration,
            Err(err) => {
                debug!("Error reading gateway {address}: {err}");

                let message = format!("Gateway not reachable on address {address}");
                if status.transition(RunState::Error, message) {
                    warn!("{}", status.last_error);

                    self.registry
                        .set_node_status(
                            &self.gateway_id,
                            HashMap::from([
                                (NodeStatus::RunState, RunState::Error.to_string()),
                                (NodeStatus::LastError, status.last_error.clone()),
                            ]),
                        )
                        .await;
                }

                return false;
            }
        };

        status.latency_ms = latency.as_millis();

        let mut node_status = HashMap::from([(
            NodeStatus::LatencyMsec,
            latency.as_millis().to_string(),
        )]);

        let message = format!("Connection restored to address {address}");
        if status.transition(RunState::Ready, message) {
            warn!("{}", status.last_error);

            node_status.insert(NodeStatus::RunState, RunState::Ready.to_string());
            node_status.insert(NodeStatus::LastError, status.last_error.clone());
        }

        self.registry
            .set_node_status(&self.gateway_id, node_status)
            .await;

        self.registry
            .set_node_attr(
                &self.gateway_id,
                HashMap::from([
                    (NodeAttr::Name, configuration.platform.clone()),
                    (NodeAttr::SoftwareVersion, configuration.software_version()),
                    (NodeAttr::Model, configuration.product.description.clone()),
                    (NodeAttr::Manufacturer, configuration.device_specs.make.clone()),
                    (NodeAttr::LocalIp, address),
                    (NodeAttr::Mac, configuration.root.id.clone()),
                ]),
            )
            .await;

        true
    }
}
