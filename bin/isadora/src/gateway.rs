use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use isy::{Configuration, Node};

/// Access to the ISY gateway used by the poller and the dispatcher.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Gateway: Send + Sync {
    fn address(&self) -> String;

    async fn read_gateway(&self) -> isy::Result<Configuration>;

    async fn read_nodes(&self) -> isy::Result<Vec<Node>>;

    async fn write_on_off(&self, device_id: &str, is_enabled: bool) -> isy::Result<()>;
}

#[async_trait]
impl Gateway for isy::Client {
    fn address(&self) -> String {
        isy::Client::address(self).to_string()
    }

    async fn read_gateway(&self) -> isy::Result<Configuration> {
        isy::Client::read_gateway(self).await
    }

    async fn read_nodes(&self) -> isy::Result<Vec<Node>> {
        isy::Client::read_nodes(self).await
    }

    async fn write_on_off(&self, device_id: &str, is_enabled: bool) -> isy::Result<()> {
        isy::Client::write_on_off(self, device_id, is_enabled).await
    }
}
