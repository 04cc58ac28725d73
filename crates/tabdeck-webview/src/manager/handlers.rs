use tabdeck_common::TabKey;
use tracing::{debug, warn};
use wry::{PageLoadEvent, WebViewBuilder};

use crate::events::{HostEvent, SurfaceEvent};
use crate::ipc::IpcMessage;
use crate::keys::KeyPress;

use super::{push_event, EventSink};

/// Record finished main-frame navigations.
pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    key: TabKey,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        if !matches!(event, PageLoadEvent::Finished) {
            return;
        }
        debug!(key = %key, url = %url, "navigated");
        push_event(
            &events,
            HostEvent::Surface(SurfaceEvent::Navigated {
                key: key.clone(),
                url,
            }),
        );
    })
}

/// Deny popups; the orchestrator loads the URL in place instead.
pub(super) fn attach_new_window_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    key: TabKey,
) -> WebViewBuilder<'a> {
    builder.with_new_window_req_handler(move |url| {
        debug!(key = %key, url = %url, "window open denied");
        push_event(
            &events,
            HostEvent::Surface(SurfaceEvent::WindowOpenRequested {
                key: key.clone(),
                url,
            }),
        );
        false
    })
}

/// Front-end commands and forwarded key presses from the chrome view.
pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        let Some(msg) = IpcMessage::from_json(body) else {
            warn!(body_len = body.len(), "IPC message rejected: failed to parse");
            return;
        };
        match KeyPress::from_ipc(&msg) {
            Some(press) => push_event(&events, HostEvent::Key(press)),
            None => {
                debug!(kind = %msg.kind, id = ?msg.id, "IPC message from front-end");
                push_event(&events, HostEvent::Ipc(msg));
            }
        }
    })
}

/// Key presses from a tab surface. Pages get no other IPC.
pub(super) fn attach_key_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    key: TabKey,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        match IpcMessage::from_json(request.body())
            .as_ref()
            .and_then(KeyPress::from_ipc)
        {
            Some(press) => push_event(&events, HostEvent::Key(press)),
            None => debug!(key = %key, "ignored IPC message from page"),
        }
    })
}
