//! WebSocket Transport
//!
//! Browser WebSocket implementation of [`Transport`]. The event closures live
//! inside the handle and are detached before the socket is closed, so nothing
//! outlives the stream that created it.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use super::stream::{ConnectionHandle, LinkStatus, MessageSink, Transport};
use crate::config::Endpoint;
use crate::error::ConnectionError;

/// Opens browser WebSockets
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSocketTransport;

/// A browser WebSocket plus the handlers attached to it
pub struct WebSocketHandle {
    socket: WebSocket,
    _on_open: Closure<dyn FnMut(Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl Transport for WebSocketTransport {
    type Handle = WebSocketHandle;

    fn open(&self, endpoint: &Endpoint, sink: MessageSink) -> Result<WebSocketHandle, ConnectionError> {
        let socket = WebSocket::new(endpoint.as_str()).map_err(|e| ConnectionError::Open {
            endpoint: endpoint.to_string(),
            reason: describe(&e),
        })?;

        // On open
        let open_sink = sink.clone();
        let on_open = Closure::wrap(Box::new(move |_: Event| {
            tracing::info!(stream_id = %open_sink.stream_id(), "WebSocket connected");
            open_sink.report(LinkStatus::Live);
        }) as Box<dyn FnMut(Event)>);
        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        // On message
        let message_sink = sink.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            match event.data().dyn_into::<js_sys::JsString>() {
                Ok(text) => {
                    let text: String = text.into();
                    message_sink.deliver(text);
                }
                Err(_) => {
                    tracing::debug!(stream_id = %message_sink.stream_id(), "Ignoring non-text frame");
                }
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        // On error
        let error_sink = sink.clone();
        let on_error = Closure::wrap(Box::new(move |e: Event| {
            tracing::warn!(stream_id = %error_sink.stream_id(), event = %e.type_(), "WebSocket error");
            error_sink.report(LinkStatus::Lost);
        }) as Box<dyn FnMut(Event)>);
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        // On close
        let close_sink = sink;
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            tracing::info!(
                stream_id = %close_sink.stream_id(),
                code = event.code(),
                reason = %event.reason(),
                "WebSocket closed"
            );
            close_sink.report(LinkStatus::Lost);
        }) as Box<dyn FnMut(CloseEvent)>);
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(WebSocketHandle {
            socket,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        })
    }
}

impl ConnectionHandle for WebSocketHandle {
    fn close(&mut self) -> Result<(), ConnectionError> {
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        self.socket.set_onclose(None);

        // A no-op for sockets already closing or closed
        self.socket.close().map_err(|e| ConnectionError::Close {
            reason: describe(&e),
        })
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
