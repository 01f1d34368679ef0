use std::time::Duration;

use log::{debug, trace};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{Configuration, Error, Node, Nodes, RestResponse, Result};

const TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Client {
    address: String,
    login: String,
    password: String,
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// `address` is the hostname or IP address of the gateway, optionally
    /// with a port.
    pub fn new(address: String, login: String, password: String) -> Result<Client> {
        let base_url = Url::parse(&format!("http://{address}/rest/"))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidAddress(address));
        }

        let http = reqwest::Client::builder().timeout(TIMEOUT).build()?;

        Ok(Client {
            address,
            login,
            password,
            base_url,
            http,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub async fn read_gateway(&self) -> Result<Configuration> {
        let url = self.url(&["config"])?;
        self.get(url).await
    }

    pub async fn read_nodes(&self) -> Result<Vec<Node>> {
        let url = self.url(&["nodes"])?;
        let nodes: Nodes = self.get(url).await?;

        debug!("read {} nodes from {}", nodes.nodes.len(), self.address);

        Ok(nodes.nodes)
    }

    /// Switches the node with the given Insteon address on or off.
    pub async fn write_on_off(&self, node_address: &str, is_enabled: bool) -> Result<()> {
        let command = if is_enabled { "DON" } else { "DOF" };
        let url = self.url(&["nodes", node_address, "cmd", command])?;

        let response: RestResponse = self.get(url).await?;

        if response.succeeded {
            Ok(())
        } else {
            Err(Error::CommandRejected(format!(
                "{command} for {node_address} (status {})",
                response.status
            )))
        }
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| Error::InvalidAddress(self.address.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        trace!("GET {url}");

        let response = self
            .http
            .get(url)
            .basic_auth(&self.login, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.text().await?;
        trace!("response: {body}");

        Ok(quick_xml::de::from_str(&body)?)
    }
}
