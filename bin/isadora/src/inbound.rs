use log::{debug, error, warn};
use paho_mqtt::QOS_1;

use transport::command::{ConfigureNode, SetInput};
use transport::Topic;

use crate::CommandDispatcher;

pub fn subscriptions_and_qos(domain: &str, publisher_id: &str) -> (Vec<String>, Vec<i32>) {
    let topics = Topic::subscriptions(domain, publisher_id).to_vec();
    let qos = vec![QOS_1; topics.len()];

    (topics, qos)
}

/// Routes one inbound MQTT message. Malformed messages are logged and dropped.
pub async fn handle_message(topic: &str, payload: &[u8], dispatcher: &CommandDispatcher) {
    let topic = match topic.parse::<Topic>() {
        Ok(topic) => topic,
        Err(err) => {
            error!("Error parsing topic {topic}: {err}");
            return;
        }
    };

    match topic {
        Topic::SetInput(address) => {
            let command: SetInput = match serde_json::from_slice(payload) {
                Ok(command) => command,
                Err(err) => {
                    error!("Error parsing command for {address}: {err}");
                    return;
                }
            };

            if let Some(target) = command.address.as_ref().filter(|target| **target != address) {
                warn!("Ignoring command on {address} addressed to {target}");
                return;
            }

            if let Err(err) = dispatcher
                .dispatch(&address.to_string(), &command.value)
                .await
            {
                error!("Error setting {address} to {}: {err}", command.value);
            }
        }
        Topic::ConfigureNode(address) => {
            let command: ConfigureNode = match serde_json::from_slice(payload) {
                Ok(command) => command,
                Err(err) => {
                    error!("Error parsing configuration for {address}: {err}");
                    return;
                }
            };

            dispatcher.handle_config_command(&address.to_string(), &command.attr);
        }
        topic => debug!("ignoring message on {topic}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dispatcher, isy_node, FakeGateway};
    use serde_json::json;
    use std::sync::Arc;

    const SET_TOPIC: &str = "local/isy99/15 2D A 1/switch/0/$set";

    fn fake() -> Arc<FakeGateway> {
        Arc::new(FakeGateway::new(vec![isy_node(
            "15 2D A 1",
            "Deck Lights",
            "ST",
            "255",
        )]))
    }

    fn payload(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_subscriptions() {
        let (topics, qos) = subscriptions_and_qos("local", "isy99");

        assert_eq!(
            topics,
            vec!["local/isy99/+/+/+/$set", "local/isy99/+/$configure"]
        );
        assert_eq!(qos, vec![QOS_1, QOS_1]);
    }

    #[tokio::test]
    async fn test_set_input() {
        let fake = fake();
        let (dispatcher, _) = dispatcher(fake.clone()).await;

        handle_message(SET_TOPIC, &payload(json!({ "value": "off" })), &dispatcher).await;

        handle_message(
            SET_TOPIC,
            &payload(json!({
                "address": "local/isy99/15 2D A 1/switch/0",
                "value": "on",
            })),
            &dispatcher,
        )
        .await;

        assert_eq!(
            fake.writes(),
            vec![
                ("15 2D A 1".to_string(), false),
                ("15 2D A 1".to_string(), true)
            ]
        );
    }

    #[tokio::test]
    async fn test_mismatched_address_is_dropped() {
        let fake = fake();
        let (dispatcher, _) = dispatcher(fake.clone()).await;

        handle_message(
            SET_TOPIC,
            &payload(json!({
                "address": "local/isy99/13 8B 8C 1/switch/0",
                "value": "on",
            })),
            &dispatcher,
        )
        .await;

        assert!(fake.writes().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_messages_are_dropped() {
        let fake = fake();
        let (dispatcher, _) = dispatcher(fake.clone()).await;

        handle_message(SET_TOPIC, b"off", &dispatcher).await;
        handle_message(SET_TOPIC, &payload(json!({ "state": "off" })), &dispatcher).await;
        handle_message("local/isy99/$set", &payload(json!({ "value": "off" })), &dispatcher).await;
        handle_message("garbage", b"{}", &dispatcher).await;

        assert!(fake.writes().is_empty());
    }

    #[tokio::test]
    async fn test_configure_and_outbound_topics_do_nothing() {
        let fake = fake();
        let (dispatcher, registry) = dispatcher(fake.clone()).await;
        let gateway = registry.node("gateway").await;

        handle_message(
            "local/isy99/gateway/$configure",
            &payload(json!({ "attr": { "local_ip": "192.168.1.20" } })),
            &dispatcher,
        )
        .await;

        handle_message(
            "local/isy99/15 2D A 1/switch/0/$value",
            &payload(json!({ "value": "false" })),
            &dispatcher,
        )
        .await;

        assert!(fake.writes().is_empty());
        assert_eq!(registry.node("gateway").await, gateway);
    }
}
