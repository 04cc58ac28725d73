//! Per-surface network interception.
//!
//! One task per surface: attach, enable network events, and capture the
//! bodies of image responses. The task ends when the debugger detaches or
//! the channel closes. Tab switches and releases do not cancel it.
//!
//! A session signals readiness once `Network.enable` has been acknowledged,
//! so the surface can hold its first real load until responses are seen.
//! A session that fails before that point drops the signal instead.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};
use tabdeck_config::schema::InterceptorConfig;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};

use crate::capture::{write_capture, ResponseBody};
use crate::cdp::CdpConnector;
use crate::channel::{AttachTarget, DebugChannel, DebugConnector};
use crate::error::DevToolsError;
use crate::filter::{capture_file_name, is_image_url};

/// What to capture and where.
#[derive(Debug, Clone)]
pub struct InterceptorSettings {
    pub image_extensions: Vec<String>,
    pub capture_dir: PathBuf,
}

/// A spawned interception task.
pub struct Session {
    pub task: JoinHandle<()>,
    /// Resolves once network events are enabled. Closed without a value
    /// when the session could not get that far.
    pub ready: oneshot::Receiver<()>,
}

/// Spawns interception tasks for newly created surfaces.
#[derive(Clone)]
pub struct Interceptor {
    connector: Arc<dyn DebugConnector>,
    settings: Arc<InterceptorSettings>,
}

impl Interceptor {
    pub fn new(connector: Arc<dyn DebugConnector>, settings: InterceptorSettings) -> Self {
        Self {
            connector,
            settings: Arc::new(settings),
        }
    }

    /// CDP-backed interceptor. `default_capture_dir` applies when the config
    /// does not name one.
    pub fn from_config(config: &InterceptorConfig, default_capture_dir: PathBuf) -> Self {
        let capture_dir = config
            .capture_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or(default_capture_dir);
        Self::new(
            Arc::new(CdpConnector::from_config(config)),
            InterceptorSettings {
                image_extensions: config.image_extensions.clone(),
                capture_dir,
            },
        )
    }

    pub fn settings(&self) -> &InterceptorSettings {
        &self.settings
    }

    /// Start intercepting `target` on `handle`.
    pub fn spawn(&self, handle: &Handle, target: AttachTarget) -> Session {
        let connector = Arc::clone(&self.connector);
        let settings = Arc::clone(&self.settings);
        let (ready_tx, ready) = oneshot::channel();
        let task = handle.spawn(run(connector, settings, target, Some(ready_tx)));
        Session { task, ready }
    }
}

/// Body fetches of one session. Finished fetches are reaped as the session
/// goes, so the set only holds what is still in flight.
struct Fetches {
    set: JoinSet<()>,
}

impl Fetches {
    fn new() -> Self {
        Self { set: JoinSet::new() }
    }

    fn spawn(&mut self, fetch: impl std::future::Future<Output = ()> + Send + 'static) {
        self.reap();
        self.set.spawn(fetch);
    }

    fn reap(&mut self) {
        while self.set.try_join_next().is_some() {}
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.set.len()
    }

    /// Wait for the fetches still in flight.
    async fn finish(mut self) {
        while self.set.join_next().await.is_some() {}
    }
}

/// Drive one surface's debugging session until it ends.
///
/// `ready` fires after `Network.enable` succeeds.
pub async fn run(
    connector: Arc<dyn DebugConnector>,
    settings: Arc<InterceptorSettings>,
    target: AttachTarget,
    ready: Option<oneshot::Sender<()>>,
) {
    let key = &target.key;
    let channel = match connector.attach(&target).await {
        Ok(channel) => channel,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "debugger attach failed, interception disabled");
            return;
        }
    };

    if let Err(e) = channel.send_command("Network.enable", json!({})).await {
        tracing::warn!(key = %key, error = %e, "Network.enable failed");
        return;
    }
    tracing::info!(key = %key, "network interceptor attached");
    if let Some(ready) = ready {
        // The receiver is gone when the surface was released meanwhile.
        let _ = ready.send(());
    }

    let mut fetches = Fetches::new();
    let reason = loop {
        fetches.reap();
        let Some(event) = channel.next_event().await else {
            break "channel closed".to_string();
        };
        match event.method.as_str() {
            "Network.responseReceived" => {
                let Some((request_id, url)) = response_target(&event.params) else {
                    continue;
                };
                tracing::debug!(key = %key, url = %url, "response received");
                if is_image_url(&url, &settings.image_extensions) {
                    fetches.spawn(capture_body(
                        Arc::clone(&channel),
                        Arc::clone(&settings),
                        request_id,
                        url,
                    ));
                }
            }
            "Inspector.detached" => {
                break event.params["reason"]
                    .as_str()
                    .unwrap_or("unknown")
                    .to_string();
            }
            _ => {}
        }
    };
    tracing::info!(key = %key, reason = %reason, "debugger detached");

    // In-flight body fetches still get written.
    fetches.finish().await;
}

fn response_target(params: &Value) -> Option<(String, String)> {
    let request_id = params.get("requestId")?.as_str()?;
    let url = params.get("response")?.get("url")?.as_str()?;
    Some((request_id.to_string(), url.to_string()))
}

async fn capture_body(
    channel: Arc<dyn DebugChannel>,
    settings: Arc<InterceptorSettings>,
    request_id: String,
    url: String,
) {
    match fetch_and_write(channel.as_ref(), &settings, &request_id, &url).await {
        Ok(path) => tracing::debug!(url = %url, path = %path.display(), "captured response body"),
        Err(e) => tracing::debug!(url = %url, error = %e, "response body capture failed"),
    }
}

async fn fetch_and_write(
    channel: &dyn DebugChannel,
    settings: &InterceptorSettings,
    request_id: &str,
    url: &str,
) -> Result<PathBuf, DevToolsError> {
    let result = channel
        .send_command("Network.getResponseBody", json!({ "requestId": request_id }))
        .await?;
    let body: ResponseBody =
        serde_json::from_value(result).map_err(|e| DevToolsError::Protocol(e.to_string()))?;
    let bytes = body.decode()?;
    let name = capture_file_name(url, request_id);
    write_capture(&settings.capture_dir, &name, &bytes).await
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    use super::*;
    use crate::channel::DebugEvent;

    /// Replays scripted events and answers body requests from a map.
    struct FakeChannel {
        events: Mutex<VecDeque<DebugEvent>>,
        bodies: HashMap<String, Value>,
        commands: Mutex<Vec<(String, Value)>>,
        fail_enable: bool,
    }

    impl FakeChannel {
        fn new(events: Vec<DebugEvent>, bodies: HashMap<String, Value>) -> Self {
            Self {
                events: Mutex::new(events.into()),
                bodies,
                commands: Mutex::new(Vec::new()),
                fail_enable: false,
            }
        }

        fn methods(&self) -> Vec<String> {
            self.commands
                .lock()
                .unwrap()
                .iter()
                .map(|(m, _)| m.clone())
                .collect()
        }
    }

    #[async_trait]
    impl DebugChannel for FakeChannel {
        async fn send_command(&self, method: &str, params: Value) -> Result<Value, DevToolsError> {
            self.commands
                .lock()
                .unwrap()
                .push((method.to_string(), params.clone()));
            match method {
                "Network.enable" if self.fail_enable => Err(DevToolsError::Closed),
                "Network.getResponseBody" => {
                    let id = params["requestId"].as_str().unwrap_or_default();
                    self.bodies
                        .get(id)
                        .cloned()
                        .ok_or_else(|| DevToolsError::Protocol("no body".into()))
                }
                _ => Ok(json!({})),
            }
        }

        async fn next_event(&self) -> Option<DebugEvent> {
            self.events.lock().unwrap().pop_front()
        }
    }

    struct FakeConnector {
        channel: Option<Arc<FakeChannel>>,
        attached: Mutex<Vec<AttachTarget>>,
    }

    #[async_trait]
    impl DebugConnector for FakeConnector {
        async fn attach(
            &self,
            target: &AttachTarget,
        ) -> Result<Arc<dyn DebugChannel>, DevToolsError> {
            self.attached.lock().unwrap().push(target.clone());
            match &self.channel {
                Some(channel) => Ok(Arc::clone(channel) as Arc<dyn DebugChannel>),
                None => Err(DevToolsError::NoTarget(target.hint_url.clone())),
            }
        }
    }

    fn response(request_id: &str, url: &str) -> DebugEvent {
        DebugEvent::new(
            "Network.responseReceived",
            json!({ "requestId": request_id, "response": { "url": url, "status": 200 } }),
        )
    }

    fn png_body(bytes: &[u8]) -> Value {
        json!({ "body": STANDARD.encode(bytes), "base64Encoded": true })
    }

    fn target(key: &str, url: &str) -> AttachTarget {
        AttachTarget {
            key: key.into(),
            hint_url: url.into(),
            port: None,
        }
    }

    fn settings(dir: &std::path::Path) -> Arc<InterceptorSettings> {
        Arc::new(InterceptorSettings {
            image_extensions: vec!["png".into()],
            capture_dir: dir.to_path_buf(),
        })
    }

    async fn run_with(channel: Arc<FakeChannel>, dir: &std::path::Path) -> Arc<FakeConnector> {
        let connector = Arc::new(FakeConnector {
            channel: Some(channel),
            attached: Mutex::new(Vec::new()),
        });
        run(
            connector.clone(),
            settings(dir),
            target("tab-1", "https://site.test/"),
            None,
        )
        .await;
        connector
    }

    #[tokio::test]
    async fn captures_png_responses() {
        let tmp = tempfile::tempdir().unwrap();
        let channel = Arc::new(FakeChannel::new(
            vec![
                response("1", "https://site.test/app.js"),
                response("2", "https://site.test/img/Logo.PNG?v=2"),
            ],
            HashMap::from([("2".to_string(), png_body(b"\x89PNG"))]),
        ));

        run_with(channel.clone(), tmp.path()).await;

        assert_eq!(
            std::fs::read(tmp.path().join("Logo.PNG")).unwrap(),
            b"\x89PNG"
        );
        assert!(!tmp.path().join("app.js").exists());
        let methods = channel.methods();
        assert_eq!(methods[0], "Network.enable");
        assert_eq!(
            methods
                .iter()
                .filter(|m| *m == "Network.getResponseBody")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn attach_failure_ends_quietly() {
        let tmp = tempfile::tempdir().unwrap();
        let connector = Arc::new(FakeConnector {
            channel: None,
            attached: Mutex::new(Vec::new()),
        });
        let (ready_tx, mut ready) = oneshot::channel();
        run(
            connector.clone(),
            settings(tmp.path()),
            target("a", "https://a.test/"),
            Some(ready_tx),
        )
        .await;
        assert!(matches!(
            ready.try_recv(),
            Err(oneshot::error::TryRecvError::Closed)
        ));
        assert_eq!(
            connector.attached.lock().unwrap().as_slice(),
            &[target("a", "https://a.test/")]
        );
    }

    #[tokio::test]
    async fn enable_failure_stops_before_events() {
        let tmp = tempfile::tempdir().unwrap();
        let mut channel = FakeChannel::new(
            vec![response("1", "https://site.test/a.png")],
            HashMap::from([("1".to_string(), png_body(b"x"))]),
        );
        channel.fail_enable = true;
        let channel = Arc::new(channel);

        run_with(channel.clone(), tmp.path()).await;

        assert_eq!(channel.methods(), vec!["Network.enable".to_string()]);
        assert!(!tmp.path().join("a.png").exists());
    }

    #[tokio::test]
    async fn detach_stops_processing() {
        let tmp = tempfile::tempdir().unwrap();
        let channel = Arc::new(FakeChannel::new(
            vec![
                DebugEvent::new("Inspector.detached", json!({ "reason": "target_closed" })),
                response("1", "https://site.test/late.png"),
            ],
            HashMap::from([("1".to_string(), png_body(b"x"))]),
        ));

        run_with(channel.clone(), tmp.path()).await;

        assert!(!tmp.path().join("late.png").exists());
        // The event after the detach was never consumed.
        assert_eq!(channel.events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn body_failure_is_dropped() {
        let tmp = tempfile::tempdir().unwrap();
        let channel = Arc::new(FakeChannel::new(
            vec![
                response("1", "https://site.test/missing.png"),
                response("2", "https://site.test/ok.png"),
            ],
            HashMap::from([("2".to_string(), png_body(b"ok"))]),
        ));

        run_with(channel, tmp.path()).await;

        assert!(!tmp.path().join("missing.png").exists());
        assert_eq!(std::fs::read(tmp.path().join("ok.png")).unwrap(), b"ok");
    }

    #[tokio::test]
    async fn plain_body_written_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let channel = Arc::new(FakeChannel::new(
            vec![response("9.1", "https://site.test/pixel.png")],
            HashMap::from([(
                "9.1".to_string(),
                json!({ "body": "plain", "base64Encoded": false }),
            )]),
        ));
        run_with(channel, tmp.path()).await;
        assert_eq!(
            std::fs::read(tmp.path().join("pixel.png")).unwrap(),
            b"plain"
        );
    }

    #[tokio::test]
    async fn spawn_runs_on_handle() {
        let tmp = tempfile::tempdir().unwrap();
        let channel = Arc::new(FakeChannel::new(
            vec![response("1", "https://site.test/s.png")],
            HashMap::from([("1".to_string(), png_body(b"s"))]),
        ));
        let interceptor = Interceptor::new(
            Arc::new(FakeConnector {
                channel: Some(channel),
                attached: Mutex::new(Vec::new()),
            }),
            InterceptorSettings {
                image_extensions: vec!["png".into()],
                capture_dir: tmp.path().to_path_buf(),
            },
        );
        let session = interceptor.spawn(&Handle::current(), target("k", "https://site.test/"));
        session.ready.await.unwrap();
        session.task.await.unwrap();
        assert_eq!(std::fs::read(tmp.path().join("s.png")).unwrap(), b"s");
    }

    #[tokio::test]
    async fn ready_fires_after_network_enable() {
        let tmp = tempfile::tempdir().unwrap();
        let channel = Arc::new(FakeChannel::new(Vec::new(), HashMap::new()));
        let connector = Arc::new(FakeConnector {
            channel: Some(channel.clone()),
            attached: Mutex::new(Vec::new()),
        });
        let (ready_tx, mut ready) = oneshot::channel();

        run(connector, settings(tmp.path()), target("a", "about:blank"), Some(ready_tx)).await;

        assert!(ready.try_recv().is_ok());
        assert_eq!(channel.methods(), vec!["Network.enable".to_string()]);
    }

    #[tokio::test]
    async fn finished_fetches_do_not_accumulate() {
        let mut fetches = Fetches::new();
        for _ in 0..64 {
            fetches.spawn(async {});
        }
        for _ in 0..64 {
            tokio::task::yield_now().await;
        }
        fetches.spawn(async {});
        assert!(fetches.len() < 64, "{} fetches retained", fetches.len());

        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        fetches.reap();
        assert_eq!(fetches.len(), 0);
    }

    #[tokio::test]
    async fn many_images_in_one_session_are_all_captured() {
        let tmp = tempfile::tempdir().unwrap();
        let events = (0..40)
            .map(|i| response(&i.to_string(), &format!("https://site.test/{i}.png")))
            .collect();
        let bodies = (0..40)
            .map(|i| (i.to_string(), png_body(b"img")))
            .collect();
        let channel = Arc::new(FakeChannel::new(events, bodies));

        run_with(channel, tmp.path()).await;

        for i in 0..40 {
            assert!(tmp.path().join(format!("{i}.png")).exists());
        }
    }

    #[test]
    fn from_config_defaults_capture_dir() {
        let interceptor =
            Interceptor::from_config(&InterceptorConfig::default(), PathBuf::from("/data/captures"));
        assert_eq!(
            interceptor.settings().capture_dir,
            PathBuf::from("/data/captures")
        );

        let mut config = InterceptorConfig::default();
        config.capture_dir = Some("/tmp/elsewhere".into());
        let interceptor = Interceptor::from_config(&config, PathBuf::from("/data/captures"));
        assert_eq!(
            interceptor.settings().capture_dir,
            PathBuf::from("/tmp/elsewhere")
        );
    }
}
