use async_trait::async_trait;
use log::{error, trace};
use paho_mqtt::{AsyncClient as MqClient, MessageBuilder, QOS_1};

use transport::Topic;

/// Sink for records published by the registry.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, topic: Topic, payload: Vec<u8>);
}

pub struct MqttPublisher {
    client: MqClient,
}

impl MqttPublisher {
    pub fn new(client: MqClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Publisher for MqttPublisher {
    async fn publish(&self, topic: Topic, payload: Vec<u8>) {
        let topic = topic.to_string();
        trace!("publish to {topic}: {}", String::from_utf8_lossy(&payload));

        let message = MessageBuilder::new()
            .topic(&topic)
            .payload(payload)
            .qos(QOS_1)
            .retained(true)
            .finalize();

        match self.client.publish(message).await {
            Ok(()) => (),
            Err(err) => error!("Error publishing to {topic}: {err}"),
        }
    }
}
