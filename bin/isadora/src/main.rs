use isadora::{
    handle_message, subscriptions_and_qos, CommandDispatcher, Config, ErasedError, Gateway,
    GatewayPoller, MqttPublisher, Registry,
};
use transport::connect_mqtt;

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use log::{debug, error, info};
use paho_mqtt::AsyncClient as MqClient;
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::{self, MissedTickBehavior};
use tokio::task;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), ErasedError> {
    pretty_env_logger::init_timed();

    info!("isadora version {VERSION}");

    let config = Config::from_env()?;

    let gateway: Arc<dyn Gateway> = Arc::new(isy::Client::new(
        config.gateway_address.clone(),
        config.login.clone(),
        config.password.clone(),
    )?);

    let mqtt_client = connect_mqtt(
        config.mqtt_address.clone(),
        config.mqtt_username.clone(),
        config.mqtt_password.clone(),
        "isadora",
    )
    .await?;
    info!("connected mqtt");

    let registry = Arc::new(Registry::new(
        config.domain.clone(),
        config.publisher_id.clone(),
        Arc::new(MqttPublisher::new(mqtt_client.clone())),
    ));

    let poller = Arc::new(GatewayPoller::new(
        config.gateway_id.clone(),
        gateway.clone(),
        registry.clone(),
    ));
    poller.setup_gateway_node().await;

    let dispatcher = Arc::new(CommandDispatcher::new(poller.clone(), gateway, registry));

    let poll_handle = task::spawn(poll_gateway(poller, config.poll_interval));
    let subscribe_handle = task::spawn(subscribe_commands(mqtt_client, dispatcher, config));

    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = poll_handle => {},
        result = subscribe_handle => result??,
        _ = sigterm.recv() => { info!("got SIGTERM, exiting...") },
    };

    Ok(())
}

async fn poll_gateway(poller: Arc<GatewayPoller>, poll_interval: Duration) {
    let mut interval = time::interval(poll_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        debug!("polling gateway");
        poller.poll().await;
    }
}

async fn subscribe_commands(
    mut mqtt: MqClient,
    dispatcher: Arc<CommandDispatcher>,
    config: Config,
) -> Result<(), ErasedError> {
    let mut stream = mqtt.get_stream(None);

    let (topics, qos) = subscriptions_and_qos(&config.domain, &config.publisher_id);
    mqtt.subscribe_many(&topics, &qos).await?;

    info!("Subscribed to topics: {:?}", topics);

    while let Some(msg_opt) = stream.next().await {
        if let Some(msg) = msg_opt {
            let dispatcher = dispatcher.clone();

            task::spawn(async move {
                handle_message(msg.topic(), msg.payload(), &dispatcher).await;
            });
        } else {
            error!("Lost MQTT connection. Attempting reconnect.");
            while let Err(err) = mqtt.reconnect().await {
                error!("Error MQTT reconnecting: {err}");
                time::sleep(Duration::from_secs(1)).await;
            }

            mqtt.subscribe_many(&topics, &qos).await?;
        }
    }

    Ok(())
}
