use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use formdom::{Element, PointerDown, Subscription, Surface};

#[test]
fn test_subscribe_and_dispatch() {
    let surface = Surface::new();
    let hits = Arc::new(AtomicUsize::new(0));

    let hits_clone = Arc::clone(&hits);
    let _sub = surface.subscribe(move |_| {
        hits_clone.fetch_add(1, Ordering::SeqCst);
    });

    surface.dispatch(&PointerDown::nowhere(3, 4));
    surface.dispatch(&PointerDown::nowhere(5, 6));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn test_drop_unsubscribes() {
    let surface = Surface::new();
    let hits = Arc::new(AtomicUsize::new(0));

    let hits_clone = Arc::clone(&hits);
    let sub = surface.subscribe(move |_| {
        hits_clone.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(surface.listener_count(), 1);

    drop(sub);
    assert_eq!(surface.listener_count(), 0);

    surface.dispatch(&PointerDown::nowhere(0, 0));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn test_listener_can_drop_its_own_subscription() {
    let surface = Surface::new();
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let slot_clone = Arc::clone(&slot);
    let sub = surface.subscribe(move |_| {
        let taken = slot_clone.lock().unwrap().take();
        drop(taken);
    });
    *slot.lock().unwrap() = Some(sub);

    surface.dispatch(&PointerDown::nowhere(0, 0));
    assert_eq!(surface.listener_count(), 0);
}

#[test]
fn test_subscription_outliving_surface() {
    let surface = Surface::new();
    let sub = surface.subscribe(|_| {});
    drop(surface);
    // Dropping after the surface is gone must not panic.
    drop(sub);
}

#[test]
fn test_pointer_down_builds_path() {
    let surface = Surface::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_clone = Arc::clone(&seen);
    let _sub = surface.subscribe(move |event| {
        seen_clone.lock().unwrap().push(event.clone());
    });

    let root = Element::col()
        .id("page")
        .child(Element::row().id("select").child(Element::text("x").id("select-label")));

    surface.pointer_down(&root, "select-label");
    surface.pointer_down(&root, "elsewhere");

    let seen = seen.lock().unwrap();
    assert!(seen[0].is_within("select"));
    assert_eq!(seen[0].target.as_deref(), Some("select-label"));
    assert!(!seen[1].is_within("select"));
    assert_eq!(seen[1].target, None);
}
