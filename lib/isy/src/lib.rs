//! Client for the REST interface of ISY99x Insteon gateways.

mod client;
pub use client::Client;

mod configuration;
pub use configuration::{Configuration, DeviceSpecs, Product, Root};

mod nodes;
pub use nodes::{Node, Nodes, Property};

mod response;
pub use response::RestResponse;

mod error;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
