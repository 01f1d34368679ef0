use std::time::Duration;

use log::debug;
use paho_mqtt as mqtt;

pub async fn connect_mqtt(
    address: String,
    username: String,
    password: String,
    client_id: &str,
) -> mqtt::Result<mqtt::AsyncClient> {
    let create_opts = mqtt::CreateOptionsBuilder::new_v3()
        .server_uri(address)
        .client_id(client_id)
        .finalize();

    let client = mqtt::AsyncClient::new(create_opts)?;

    let conn_opts = mqtt::ConnectOptionsBuilder::new_v3()
        .keep_alive_interval(Duration::from_secs(30))
        .clean_session(false)
        .user_name(username)
        .password(password)
        .finalize();

    client.connect(conn_opts).await?;
    debug!("connected to mqtt as {client_id}");

    Ok(client)
}
