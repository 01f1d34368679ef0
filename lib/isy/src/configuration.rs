use serde::Deserialize;

/// Answer of `/rest/config`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Configuration {
    #[serde(rename = "deviceSpecs")]
    pub device_specs: DeviceSpecs,
    pub app: String,
    pub app_version: String,
    pub platform: String,
    pub root: Root,
    pub product: Product,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeviceSpecs {
    pub make: String,
    pub model: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Root {
    /// MAC address of the gateway.
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Product {
    pub id: String,
    #[serde(rename = "desc")]
    pub description: String,
}

impl Configuration {
    pub fn software_version(&self) -> String {
        format!("{} - {}", self.app, self.app_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<configuration>
    <deviceSpecs>
        <make>Universal Devices Inc.</make>
        <manufacturerURL>http://www.universal-devices.com</manufacturerURL>
        <model>Insteon Web Controller</model>
        <icon>/web/udlogo.jpg</icon>
        <queryOnInit>true</queryOnInit>
    </deviceSpecs>
    <upnpSpecs>
        <deviceType>urn:udi-com:device:X_Insteon_Lighting_Device:1</deviceType>
    </upnpSpecs>
    <app>Insteon_UD99</app>
    <app_version>3.3.10</app_version>
    <platform>ISY-C-99</platform>
    <build_timestamp>2013-04-10-00:56:51</build_timestamp>
    <root>
        <id>00:21:b9:00:e7:08</id>
        <name>ISY</name>
    </root>
    <product>
        <id>1020</id>
        <desc>ISY 99i 256</desc>
    </product>
    <triggers>true</triggers>
</configuration>"#;

    #[test]
    fn test_deserialization() {
        let configuration: Configuration = quick_xml::de::from_str(CONFIG).unwrap();

        assert_eq!(
            configuration,
            Configuration {
                device_specs: DeviceSpecs {
                    make: "Universal Devices Inc.".to_string(),
                    model: "Insteon Web Controller".to_string(),
                },
                app: "Insteon_UD99".to_string(),
                app_version: "3.3.10".to_string(),
                platform: "ISY-C-99".to_string(),
                root: Root {
                    id: "00:21:b9:00:e7:08".to_string(),
                    name: "ISY".to_string(),
                },
                product: Product {
                    id: "1020".to_string(),
                    description: "ISY 99i 256".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_software_version() {
        let configuration = Configuration {
            app: "Insteon_UD99".to_string(),
            app_version: "3.3.10".to_string(),
            ..Default::default()
        };

        assert_eq!(configuration.software_version(), "Insteon_UD99 - 3.3.10");
    }
}
