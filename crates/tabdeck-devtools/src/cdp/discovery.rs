use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tabdeck_config::schema::InterceptorConfig;

use super::transport::CdpChannel;
use crate::channel::{AttachTarget, DebugChannel, DebugConnector};
use crate::error::DevToolsError;

/// One entry of the endpoint's `/json/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetInfo {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "webSocketDebuggerUrl")]
    pub ws_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VersionInfo {
    #[serde(rename = "Protocol-Version")]
    protocol_version: String,
}

/// Pick the page target for a surface created with `hint_url`.
///
/// An exact URL match wins; otherwise a lone page target is taken.
pub fn select_target<'a>(targets: &'a [TargetInfo], hint_url: &str) -> Option<&'a TargetInfo> {
    let pages: Vec<&TargetInfo> = targets
        .iter()
        .filter(|t| t.kind == "page" && t.ws_url.is_some())
        .collect();

    pages
        .iter()
        .copied()
        .find(|t| t.url == hint_url)
        .or_else(|| match pages.as_slice() {
            [only] => Some(*only),
            _ => None,
        })
}

/// Connects to surfaces through the remote-debugging HTTP endpoint.
///
/// `default_port` is used for targets whose host did not assign a port.
pub struct CdpConnector {
    host: String,
    default_port: u16,
    protocol_version: String,
    client: reqwest::Client,
}

impl CdpConnector {
    pub fn new(host: &str, default_port: u16, protocol_version: impl Into<String>) -> Self {
        Self {
            host: host.to_string(),
            default_port,
            protocol_version: protocol_version.into(),
            client: reqwest::Client::new(),
        }
    }

    fn base_url(&self, port: Option<u16>) -> String {
        format!("http://{}:{}", self.host, port.unwrap_or(self.default_port))
    }

    pub fn from_config(config: &InterceptorConfig) -> Self {
        Self::new(
            &config.devtools_host,
            config.devtools_port,
            config.protocol_version.clone(),
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        base_url: &str,
        path: &str,
    ) -> Result<T, DevToolsError> {
        let url = format!("{base_url}{path}");
        self.client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| DevToolsError::Discovery(format!("{url}: {e}")))?
            .json::<T>()
            .await
            .map_err(|e| DevToolsError::Discovery(format!("{url}: {e}")))
    }

    async fn check_version(&self, base_url: &str) -> Result<(), DevToolsError> {
        let info: VersionInfo = self.get_json(base_url, "/json/version").await?;
        if info.protocol_version != self.protocol_version {
            return Err(DevToolsError::VersionMismatch {
                expected: self.protocol_version.clone(),
                actual: info.protocol_version,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DebugConnector for CdpConnector {
    async fn attach(&self, target: &AttachTarget) -> Result<Arc<dyn DebugChannel>, DevToolsError> {
        let base_url = self.base_url(target.port);
        self.check_version(&base_url).await?;

        let targets: Vec<TargetInfo> = self.get_json(&base_url, "/json/list").await?;
        let hint_url = target.hint_url.as_str();
        let page = select_target(&targets, hint_url)
            .ok_or_else(|| DevToolsError::NoTarget(hint_url.to_string()))?;
        let ws_url = page
            .ws_url
            .as_deref()
            .ok_or_else(|| DevToolsError::NoTarget(hint_url.to_string()))?;

        tracing::debug!(key = %target.key, target = %page.id, "attaching debug channel");
        let channel = CdpChannel::connect(ws_url).await?;
        Ok(Arc::new(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(kind: &str, url: &str, ws: bool) -> TargetInfo {
        TargetInfo {
            id: url.to_string(),
            kind: kind.to_string(),
            url: url.to_string(),
            ws_url: ws.then(|| format!("ws://127.0.0.1:9222/devtools/page/{url}")),
        }
    }

    #[test]
    fn exact_url_wins() {
        let targets = vec![
            target("page", "https://a.test/", true),
            target("page", "https://b.test/", true),
        ];
        let picked = select_target(&targets, "https://b.test/").unwrap();
        assert_eq!(picked.url, "https://b.test/");
    }

    #[test]
    fn lone_page_is_fallback() {
        let targets = vec![
            target("service_worker", "https://a.test/sw.js", true),
            target("page", "https://redirected.test/", true),
        ];
        let picked = select_target(&targets, "https://a.test/").unwrap();
        assert_eq!(picked.url, "https://redirected.test/");
    }

    #[test]
    fn ambiguous_or_missing_is_none() {
        let targets = vec![
            target("page", "https://a.test/", true),
            target("page", "https://b.test/", true),
        ];
        assert!(select_target(&targets, "https://c.test/").is_none());
        assert!(select_target(&[], "https://c.test/").is_none());
    }

    #[test]
    fn targets_without_socket_are_skipped() {
        let targets = vec![target("page", "https://a.test/", false)];
        assert!(select_target(&targets, "https://a.test/").is_none());
    }

    #[test]
    fn parses_list_entry() {
        let json = r#"[{
            "description": "",
            "id": "ABC",
            "title": "Example",
            "type": "page",
            "url": "https://example.com/",
            "webSocketDebuggerUrl": "ws://127.0.0.1:9222/devtools/page/ABC"
        }]"#;
        let targets: Vec<TargetInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(targets[0].kind, "page");
        assert_eq!(
            targets[0].ws_url.as_deref(),
            Some("ws://127.0.0.1:9222/devtools/page/ABC")
        );
    }

    #[test]
    fn assigned_port_overrides_default() {
        let connector = CdpConnector::from_config(&InterceptorConfig::default());
        assert_eq!(connector.base_url(None), "http://127.0.0.1:9222");
        assert_eq!(connector.base_url(Some(9300)), "http://127.0.0.1:9300");
        assert_eq!(connector.protocol_version, "1.3");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_discovery_error() {
        // Port 9 (discard) is not an HTTP endpoint.
        let connector = CdpConnector::new("127.0.0.1", 9, "1.3");
        let target = AttachTarget {
            key: "a".into(),
            hint_url: "https://a.test/".into(),
            port: None,
        };
        let err = connector
            .attach(&target)
            .await
            .err()
            .unwrap();
        assert!(matches!(err, DevToolsError::Discovery(_)));
    }
}
