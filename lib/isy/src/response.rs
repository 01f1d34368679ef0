use serde::Deserialize;

/// Answer of `/rest/nodes/<address>/cmd/<command>`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RestResponse {
    #[serde(rename = "@succeeded", default)]
    pub succeeded: bool,
    #[serde(default)]
    pub status: String,
}
