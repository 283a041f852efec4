//! State Management
//!
//! Message log, stream lifecycle and the WebSocket transport behind the log view.

pub mod feed;
pub mod log;
pub mod stream;
pub mod websocket;

pub use feed::LogFeed;
pub use log::{Message, MessageLog};
pub use stream::{
    ConnectionHandle, LinkStatus, LogStream, MessageSink, StreamId, StreamObserver, StreamState,
    Transport,
};
pub use websocket::{WebSocketHandle, WebSocketTransport};
