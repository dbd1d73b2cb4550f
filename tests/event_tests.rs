//! Event channel tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ledgerlink::config::ContractConfig;
use ledgerlink::contract::{Contract, ExecutionContext, Identity, Value};
use ledgerlink::storage::{KeyValueStore, MemoryStorage};
use ledgerlink::system::event::{Event, EventBus, EventHandler, EventPayload, EventType};

struct FailingHandler {
    calls: AtomicUsize,
}

impl EventHandler for FailingHandler {
    fn handle(&self, _event: &Event) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err("indexer offline".into())
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn interested_events(&self) -> Vec<EventType> {
        vec![EventType::Notify, EventType::UrlAdd]
    }
}

fn contract_with_bus(bus: Arc<EventBus>) -> Contract {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStorage::new());
    Contract::with_event_bus(ContractConfig::default(), storage, bus)
}

#[test]
fn test_subscriber_sees_notify_before_urladd() {
    let bus = Arc::new(EventBus::new(10));
    let mut rx = bus.subscribe();
    let contract = contract_with_bus(bus);

    let ctx = ExecutionContext::application(100).with_sender(Identity::new([1; 20]));
    contract
        .invoke(&ctx, "addURL", &[Value::from("https://example.com")])
        .unwrap();

    let first = rx.try_recv().unwrap();
    let second = rx.try_recv().unwrap();
    assert_eq!(first.event_type, EventType::Notify);
    assert_eq!(second.event_type, EventType::UrlAdd);
    match second.payload {
        EventPayload::UrlAdd { code, url } => {
            assert_eq!(&code, first.code());
            assert_eq!(url, b"https://example.com".to_vec());
        }
        other => panic!("unexpected payload: {:?}", other),
    }
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_failing_handler_does_not_fail_add() {
    let bus = Arc::new(EventBus::new(10));
    let handler = Arc::new(FailingHandler {
        calls: AtomicUsize::new(0),
    });
    bus.register_handler(handler.clone());
    let contract = contract_with_bus(bus);

    let ctx = ExecutionContext::application(100).with_sender(Identity::new([1; 20]));
    let outcome = contract
        .invoke(&ctx, "addURL", &[Value::from("https://example.com")])
        .unwrap();

    assert!(!outcome.is_rejected());
    assert_eq!(handler.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_lookups_emit_nothing() {
    let bus = Arc::new(EventBus::new(10));
    let contract = contract_with_bus(bus.clone());

    let ctx = ExecutionContext::application(1);
    contract.invoke(&ctx, "getURL", &[Value::from("x")]).unwrap();
    contract.invoke(&ctx, "getURLInfo", &[Value::from("x")]).unwrap();
    contract.invoke(&ctx, "shortenerURL", &[]).unwrap();

    assert!(bus.get_history().is_empty());
}

#[test]
fn test_clear_history() {
    let bus = EventBus::new(10);
    bus.publish(Event::notify(&"abc".into()));
    assert_eq!(bus.get_history().len(), 1);
    bus.clear_history();
    assert!(bus.get_history().is_empty());
}
