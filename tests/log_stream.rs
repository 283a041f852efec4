//! Log stream lifecycle against a scripted transport, observed through the
//! same reactive feed the log view renders from.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fsm_dashboard::pages::attach_stream;
use fsm_dashboard::state::{
    ConnectionHandle, LinkStatus, LogFeed, LogStream, MessageLog, MessageSink, StreamState,
    Transport,
};
use fsm_dashboard::{ConnectionError, Endpoint};
use leptos::*;

/// Records every connection it opens and how often each was closed
#[derive(Default)]
struct ScriptedTransport {
    refuse: bool,
    connections: RefCell<Vec<ScriptedConnection>>,
}

struct ScriptedConnection {
    endpoint: Endpoint,
    sink: MessageSink,
    closes: Rc<Cell<u32>>,
}

struct ScriptedHandle {
    closes: Rc<Cell<u32>>,
}

impl ConnectionHandle for ScriptedHandle {
    fn close(&mut self) -> Result<(), ConnectionError> {
        self.closes.set(self.closes.get() + 1);
        Ok(())
    }
}

impl Transport for ScriptedTransport {
    type Handle = ScriptedHandle;

    fn open(&self, endpoint: &Endpoint, sink: MessageSink) -> Result<ScriptedHandle, ConnectionError> {
        if self.refuse {
            return Err(ConnectionError::Open {
                endpoint: endpoint.to_string(),
                reason: "unreachable".to_string(),
            });
        }
        let closes = Rc::new(Cell::new(0));
        self.connections.borrow_mut().push(ScriptedConnection {
            endpoint: endpoint.clone(),
            sink,
            closes: Rc::clone(&closes),
        });
        Ok(ScriptedHandle { closes })
    }
}

impl ScriptedTransport {
    fn opened(&self) -> usize {
        self.connections.borrow().len()
    }

    fn push(&self, connection: usize, text: &str) -> bool {
        self.connections.borrow()[connection].sink.deliver(text)
    }

    fn report(&self, connection: usize, status: LinkStatus) -> bool {
        self.connections.borrow()[connection].sink.report(status)
    }

    fn closes(&self, connection: usize) -> u32 {
        self.connections.borrow()[connection].closes.get()
    }
}

fn texts(feed: &LogFeed) -> Vec<String> {
    feed.log
        .with_untracked(|log| log.iter().map(|m| m.text().to_string()).collect())
}

fn rows(feed: &LogFeed) -> usize {
    feed.log.with_untracked(MessageLog::len)
}

#[test]
fn mount_deliver_unmount_scenario() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    let feed = LogFeed::new();

    let stream = LogStream::open(&transport, &Endpoint::default(), feed);
    assert_eq!(transport.opened(), 1);
    assert_eq!(transport.connections.borrow()[0].endpoint, Endpoint::default());

    transport.push(0, "file A moved");
    assert_eq!(texts(&feed), vec!["file A moved"]);

    transport.push(0, "file B moved");
    assert_eq!(texts(&feed), vec!["file A moved", "file B moved"]);

    drop(stream);
    assert_eq!(transport.closes(0), 1);

    runtime.dispose();
}

#[test]
fn zero_messages_render_no_rows() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    let feed = LogFeed::new();

    let _stream = LogStream::open(&transport, &Endpoint::default(), feed);
    assert_eq!(rows(&feed), 0);
    assert!(feed.log.with_untracked(MessageLog::is_empty));

    runtime.dispose();
}

#[test]
fn late_message_after_unmount_is_not_appended() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    let feed = LogFeed::new();

    let stream = LogStream::open(&transport, &Endpoint::default(), feed);
    transport.push(0, "file A moved");
    drop(stream);

    assert!(!transport.push(0, "file B moved"));
    assert!(!transport.report(0, LinkStatus::Lost));
    assert_eq!(rows(&feed), 1);
    assert_eq!(feed.status.get_untracked(), LinkStatus::Connecting);

    runtime.dispose();
}

#[test]
fn arrival_order_is_preserved_and_log_only_grows() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    let feed = LogFeed::new();
    let _stream = LogStream::open(&transport, &Endpoint::default(), feed);

    let sent: Vec<String> = (0..50).map(|i| format!("moved file-{i:02}.log")).collect();
    let mut previous_len = 0;
    for text in &sent {
        transport.push(0, text);
        let len = rows(&feed);
        assert_eq!(len, previous_len + 1);
        previous_len = len;
    }

    assert_eq!(texts(&feed), sent);
    runtime.dispose();
}

#[test]
fn repeated_payloads_are_not_deduplicated() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    let feed = LogFeed::new();
    let _stream = LogStream::open(&transport, &Endpoint::default(), feed);

    transport.push(0, "heartbeat");
    transport.push(0, "heartbeat");
    transport.push(0, "");

    assert_eq!(texts(&feed), vec!["heartbeat", "heartbeat", ""]);
    runtime.dispose();
}

#[test]
fn each_mount_gets_its_own_connection_and_log() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    let first_feed = LogFeed::new();
    let second_feed = LogFeed::new();

    let first = LogStream::open(&transport, &Endpoint::default(), first_feed);
    let second = LogStream::open(&transport, &Endpoint::default(), second_feed);
    assert_eq!(transport.opened(), 2);
    assert_ne!(first.id(), second.id());

    transport.push(0, "from first");
    transport.push(1, "from second");
    drop(first);

    assert_eq!(transport.closes(0), 1);
    assert_eq!(transport.closes(1), 0);
    assert_eq!(texts(&first_feed), vec!["from first"]);
    assert_eq!(texts(&second_feed), vec!["from second"]);

    drop(second);
    assert_eq!(transport.closes(1), 1);
    runtime.dispose();
}

#[test]
fn link_status_follows_transport_without_clearing_log() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    let feed = LogFeed::new();
    let stream = LogStream::open(&transport, &Endpoint::default(), feed);
    assert_eq!(feed.status.get_untracked(), LinkStatus::Connecting);

    transport.report(0, LinkStatus::Live);
    transport.push(0, "file A moved");
    transport.report(0, LinkStatus::Lost);

    assert_eq!(feed.status.get_untracked(), LinkStatus::Lost);
    assert_eq!(rows(&feed), 1);
    assert_eq!(stream.state(), StreamState::Open);
    assert_eq!(transport.opened(), 1);

    drop(stream);
    assert_eq!(transport.closes(0), 1);
    runtime.dispose();
}

#[test]
fn unreachable_endpoint_shows_lost_and_still_releases() {
    let runtime = create_runtime();
    let transport = ScriptedTransport {
        refuse: true,
        ..Default::default()
    };
    let feed = LogFeed::new();

    let mut stream = LogStream::open(&transport, &Endpoint::default(), feed);
    assert_eq!(feed.status.get_untracked(), LinkStatus::Lost);
    assert_eq!(stream.state(), StreamState::Open);
    assert_eq!(rows(&feed), 0);

    stream.release();
    assert_eq!(stream.state(), StreamState::Closed);
    runtime.dispose();
}

#[test]
fn disposing_the_owner_releases_an_attached_stream() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    // created outside the child scope so the signals outlive it
    let feed = LogFeed::new();

    let mount = as_child_of_current_owner(|feed: LogFeed| {
        attach_stream(&transport, &Endpoint::default(), feed)
    });
    let (_id, disposer) = mount(feed);
    assert_eq!(transport.opened(), 1);
    assert_eq!(transport.closes(0), 0);

    assert!(transport.push(0, "file A moved"));
    assert_eq!(texts(&feed), vec!["file A moved"]);

    drop(disposer);
    assert_eq!(transport.closes(0), 1);
    assert!(!transport.push(0, "late"));
    assert_eq!(texts(&feed), vec!["file A moved"]);

    runtime.dispose();
    assert_eq!(transport.closes(0), 1);
}

#[test]
fn attaching_at_the_root_keeps_the_stream_open() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    let feed = LogFeed::new();

    attach_stream(&transport, &Endpoint::default(), feed);
    assert_eq!(transport.opened(), 1);
    assert_eq!(transport.closes(0), 0);
    assert!(transport.push(0, "file A moved"));
    assert_eq!(texts(&feed), vec!["file A moved"]);

    runtime.dispose();
}

#[test]
fn disposing_an_outer_scope_releases_nested_streams() {
    let runtime = create_runtime();
    let transport = ScriptedTransport::default();
    let outer_feed = LogFeed::new();
    let inner_feed = LogFeed::new();

    let mount = as_child_of_current_owner(|(outer, inner): (LogFeed, LogFeed)| {
        attach_stream(&transport, &Endpoint::default(), outer);
        let nested = as_child_of_current_owner(|feed: LogFeed| {
            attach_stream(&transport, &Endpoint::default(), feed)
        });
        // the inner disposer is forgotten so only the outer scope owns it
        let (_, inner_disposer) = nested(inner);
        std::mem::forget(inner_disposer);
    });
    let (_, disposer) = mount((outer_feed, inner_feed));
    assert_eq!(transport.opened(), 2);

    drop(disposer);
    assert_eq!(transport.closes(0), 1);
    assert_eq!(transport.closes(1), 1);
    assert!(!transport.push(1, "late"));
    assert_eq!(rows(&inner_feed), 0);

    runtime.dispose();
}
