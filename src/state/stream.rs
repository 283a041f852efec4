//! Log Stream Lifecycle
//!
//! A [`LogStream`] owns the single connection behind one mounted log view.
//! Opening it asks a [`Transport`] for a [`ConnectionHandle`]; dropping or
//! releasing it closes that handle exactly once. Inbound events reach the
//! view through a [`MessageSink`], which refuses everything after release so
//! late frames on the old socket never touch the log.
//!
//! Everything here is single-threaded: the browser delivers socket events on
//! the UI thread, so shared state uses `Rc` and `Cell`.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use super::log::Message;
use crate::config::Endpoint;
use crate::error::ConnectionError;

/// Identifies one mounted stream in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamId(Uuid);

impl StreamId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StreamId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Lifecycle of a stream. There is no way back from `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Connection requested and handle live (includes "still connecting")
    Open,
    /// Handle released, or never acquired
    Closed,
}

/// Passive health of the connection, reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    #[default]
    Connecting,
    Live,
    /// Failed to open, errored or closed by the remote end. Never retried.
    Lost,
}

impl LinkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LinkStatus::Connecting => "Connecting…",
            LinkStatus::Live => "Live",
            LinkStatus::Lost => "Stream lost",
        }
    }
}

/// Receives the events of one stream
pub trait StreamObserver {
    fn on_message(&self, message: Message);

    fn on_status(&self, _status: LinkStatus) {}
}

/// A live connection that can be told to close
pub trait ConnectionHandle {
    /// Signal closure to the remote end. Must tolerate sockets that are still
    /// connecting or already closed.
    fn close(&mut self) -> Result<(), ConnectionError>;
}

/// Opens connections to an endpoint
pub trait Transport {
    type Handle: ConnectionHandle;

    /// Start connecting. Inbound frames and status changes go to `sink`.
    fn open(&self, endpoint: &Endpoint, sink: MessageSink) -> Result<Self::Handle, ConnectionError>;
}

/// Delivery gate between a transport and the observer of one stream
#[derive(Clone)]
pub struct MessageSink {
    inner: Rc<SinkInner>,
}

struct SinkInner {
    stream_id: StreamId,
    released: Cell<bool>,
    observer: Box<dyn StreamObserver>,
}

impl MessageSink {
    fn new(stream_id: StreamId, observer: Box<dyn StreamObserver>) -> Self {
        Self {
            inner: Rc::new(SinkInner {
                stream_id,
                released: Cell::new(false),
                observer,
            }),
        }
    }

    pub fn stream_id(&self) -> StreamId {
        self.inner.stream_id
    }

    pub fn is_released(&self) -> bool {
        self.inner.released.get()
    }

    /// Forward an inbound payload. Returns false once the stream is released.
    pub fn deliver(&self, text: impl Into<String>) -> bool {
        if self.is_released() {
            tracing::debug!(
                stream_id = %self.inner.stream_id,
                "Dropping message delivered after release"
            );
            return false;
        }
        self.inner.observer.on_message(Message::received_now(text));
        true
    }

    /// Forward a link status change. Returns false once the stream is released.
    pub fn report(&self, status: LinkStatus) -> bool {
        if self.is_released() {
            return false;
        }
        self.inner.observer.on_status(status);
        true
    }

    fn release(&self) {
        self.inner.released.set(true);
    }
}

impl fmt::Debug for MessageSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("stream_id", &self.inner.stream_id)
            .field("released", &self.inner.released.get())
            .finish()
    }
}

/// Scoped owner of one connection and its delivery gate
pub struct LogStream<H: ConnectionHandle> {
    id: StreamId,
    endpoint: Endpoint,
    sink: MessageSink,
    handle: Option<H>,
    state: StreamState,
}

impl<H: ConnectionHandle> LogStream<H> {
    /// Open exactly one connection to `endpoint`.
    ///
    /// A transport that refuses to open is reported as [`LinkStatus::Lost`];
    /// the stream still counts as open until it is released.
    pub fn open<T>(transport: &T, endpoint: &Endpoint, observer: impl StreamObserver + 'static) -> Self
    where
        T: Transport<Handle = H>,
    {
        let id = StreamId::new();
        let sink = MessageSink::new(id, Box::new(observer));
        sink.report(LinkStatus::Connecting);

        let handle = match transport.open(endpoint, sink.clone()) {
            Ok(handle) => {
                tracing::info!(
                    stream_id = %id,
                    endpoint = %endpoint,
                    secure = endpoint.is_secure(),
                    "Log stream opened"
                );
                Some(handle)
            }
            Err(e) => {
                tracing::warn!(stream_id = %id, endpoint = %endpoint, error = %e, "Log stream failed to open");
                sink.report(LinkStatus::Lost);
                None
            }
        };

        Self {
            id,
            endpoint: endpoint.clone(),
            sink,
            handle,
            state: StreamState::Open,
        }
    }

    pub fn id(&self) -> StreamId {
        self.id
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    /// True while a connection handle is held
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Close the connection and stop delivery. Later calls do nothing.
    pub fn release(&mut self) {
        if self.state == StreamState::Closed {
            return;
        }
        self.state = StreamState::Closed;

        // Gate first: closing may synchronously fire close/error callbacks
        self.sink.release();

        if let Some(mut handle) = self.handle.take() {
            if let Err(e) = handle.close() {
                tracing::warn!(stream_id = %self.id, error = %e, "Log stream close failed");
            }
        }

        tracing::info!(stream_id = %self.id, "Log stream released");
    }
}

impl<H: ConnectionHandle> Drop for LogStream<H> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<H: ConnectionHandle> fmt::Debug for LogStream<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogStream")
            .field("id", &self.id)
            .field("endpoint", &self.endpoint)
            .field("state", &self.state)
            .field("has_handle", &self.handle.is_some())
            .finish()
    }
}
