use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::channel::{DebugChannel, DebugEvent};
use crate::error::DevToolsError;

type Pending = Arc<Mutex<HashMap<u64, oneshot::Sender<Result<Value, DevToolsError>>>>>;

/// A CDP session on one page target.
///
/// A writer task owns the socket sink and a reader task owns the stream.
/// The reader routes replies to the waiting `send_command` call by id and
/// forwards everything else as events. When the socket closes, pending
/// commands fail with [`DevToolsError::Closed`] and the event stream ends.
pub struct CdpChannel {
    next_id: AtomicU64,
    outbound: mpsc::UnboundedSender<Message>,
    pending: Pending,
    events: Mutex<mpsc::UnboundedReceiver<DebugEvent>>,
}

impl CdpChannel {
    pub async fn connect(ws_url: &str) -> Result<Self, DevToolsError> {
        let (ws, _) = connect_async(ws_url)
            .await
            .map_err(|e| DevToolsError::Connect(e.to_string()))?;
        let (mut sink, mut stream) = ws.split();

        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<Message>();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let pending: Pending = Arc::new(Mutex::new(HashMap::new()));

        tokio::spawn(async move {
            while let Some(msg) = out_rx.recv().await {
                if sink.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let reader_pending = Arc::clone(&pending);
        let reader_out = out_tx.clone();
        tokio::spawn(async move {
            loop {
                match stream.next().await {
                    Some(Ok(Message::Text(text))) => {
                        route_frame(&text, &reader_pending, &event_tx).await;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = reader_out.send(Message::Pong(data));
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::debug!(error = %e, "debug socket error");
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
            // Dropping the senders fails every waiting command.
            reader_pending.lock().await.clear();
        });

        Ok(Self {
            next_id: AtomicU64::new(1),
            outbound: out_tx,
            pending,
            events: Mutex::new(event_rx),
        })
    }
}

async fn route_frame(
    text: &str,
    pending: &Pending,
    events: &mpsc::UnboundedSender<DebugEvent>,
) {
    let frame: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "unparseable debug frame");
            return;
        }
    };

    if let Some(id) = frame.get("id").and_then(Value::as_u64) {
        let Some(tx) = pending.lock().await.remove(&id) else {
            return;
        };
        let result = match frame.get("error") {
            Some(err) => Err(DevToolsError::Protocol(
                err.get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            )),
            None => Ok(frame.get("result").cloned().unwrap_or(Value::Null)),
        };
        let _ = tx.send(result);
    } else if let Some(method) = frame.get("method").and_then(Value::as_str) {
        let params = frame.get("params").cloned().unwrap_or(Value::Null);
        let _ = events.send(DebugEvent::new(method, params));
    }
}

#[async_trait]
impl DebugChannel for CdpChannel {
    async fn send_command(&self, method: &str, params: Value) -> Result<Value, DevToolsError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id, tx);

        let frame = json!({ "id": id, "method": method, "params": params }).to_string();
        if self.outbound.send(Message::Text(frame.into())).is_err() {
            self.pending.lock().await.remove(&id);
            return Err(DevToolsError::Closed);
        }
        rx.await.map_err(|_| DevToolsError::Closed)?
    }

    async fn next_event(&self) -> Option<DebugEvent> {
        self.events.lock().await.recv().await
    }
}
