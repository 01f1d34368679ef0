use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::task::JoinHandle;

use transport::discovery::InputDiscovery;
use transport::{InputType, OutputType};

use crate::{Error, Gateway, GatewayPoller, Registry, Result};

/// Time given to a device to report its new state after a write.
const SETTLE_DELAY: Duration = Duration::from_millis(300);

pub struct CommandDispatcher {
    poller: Arc<GatewayPoller>,
    gateway: Arc<dyn Gateway>,
    registry: Arc<Registry>,
}

impl CommandDispatcher {
    pub fn new(
        poller: Arc<GatewayPoller>,
        gateway: Arc<dyn Gateway>,
        registry: Arc<Registry>,
    ) -> Self {
        Self {
            poller,
            gateway,
            registry,
        }
    }

    /// Switches the node owning `input_address`. Only switch inputs are
    /// supported, anything else is ignored. Every command is followed by a
    /// resync once the device had time to settle, written or not.
    pub async fn dispatch(&self, input_address: &str, raw_value: &str) -> Result<()> {
        let Some(input) = self.registry.input_by_address(input_address).await else {
            warn!("Ignoring command for unknown input {input_address}");
            self.schedule_resync();
            return Ok(());
        };

        if input.input_type != InputType::Switch {
            warn!(
                "Ignoring command for {input_address}: {} input is not a switch",
                input.input_type
            );
            self.schedule_resync();
            return Ok(());
        }

        let is_enabled = parse_on_off(raw_value);

        let previous = self
            .registry
            .output_value(
                &input.node_id,
                OutputType::from(input.input_type),
                &input.instance,
            )
            .await
            .map(|value| value.value)
            .unwrap_or_else(|| "n/a".to_string());

        info!("switch {input_address}: previous value {previous}, new value {is_enabled}");

        let result = self.write(&input, is_enabled).await;
        self.schedule_resync();

        result
    }

    async fn write(&self, input: &InputDiscovery, is_enabled: bool) -> Result<()> {
        let address = input.address.to_string();

        let node = self
            .registry
            .node_by_address(&address)
            .await
            .ok_or_else(|| Error::UnknownNode(input.node_id.clone()))?;

        if let Err(err) = self.gateway.write_on_off(&node.node_id, is_enabled).await {
            let status = self.poller.status().await;
            error!(
                "Error writing {address} to gateway {} ({}): {err}",
                status.address, status.run_state
            );
            return Err(err.into());
        }

        Ok(())
    }

    /// Polls the gateway after the settle delay without blocking the caller.
    pub fn schedule_resync(&self) -> JoinHandle<()> {
        let poller = self.poller.clone();

        tokio::spawn(async move {
            tokio::time::sleep(SETTLE_DELAY).await;
            poller.poll().await;
        })
    }

    /// Node configuration can't be changed through the gateway.
    pub fn handle_config_command(
        &self,
        node_address: &str,
        attr: &HashMap<String, String>,
    ) -> HashMap<String, String> {
        warn!(
            "Ignoring configuration of {node_address} ({} attributes): not supported",
            attr.len()
        );

        HashMap::new()
    }
}

/// `0`, `off` and `false` switch off. Anything else switches on.
pub fn parse_on_off(value: &str) -> bool {
    !(value == "0" || value.eq_ignore_ascii_case("off") || value.eq_ignore_ascii_case("false"))
}
