mod config;
pub use config::Config;

mod error;
pub use error::Error;

mod gateway;
pub use gateway::Gateway;

mod publisher;
pub use publisher::{MqttPublisher, Publisher};

mod registry;
pub use registry::Registry;

mod node_sync;
pub use node_sync::NodeSync;

mod poller;
pub use poller::{GatewayPoller, GatewayStatus};

mod dispatcher;
pub use dispatcher::CommandDispatcher;

mod inbound;
pub use inbound::{handle_message, subscriptions_and_qos};

#[cfg(test)]
mod testing;

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
