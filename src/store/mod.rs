//! Router-bit collection store.
//!
//! Holds the ordered list of router bits and notifies observers with an
//! immutable snapshot after every mutation. The sequence itself is never
//! handed out mutably; `add` and `remove` are the only writers.

use std::sync::Arc;

use tracing::debug;

use crate::context::ServiceContext;
use crate::model::{NewRouterBit, RouterBit};

/// Immutable view of the whole collection at one point in time.
///
/// Every mutation produces a fresh allocation, so observers can detect a
/// change with [`Arc::ptr_eq`].
pub type Snapshot = Arc<[RouterBit]>;

/// Handle returned by [`RouterBitStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<'a> = Box<dyn FnMut(&Snapshot) + 'a>;

/// Ordered collection of router bits with synchronous change notification.
///
/// Identifiers are minted through `ctx.id_gen`, so the store works with
/// live, recording, and replaying generators alike.
pub struct RouterBitStore<'a> {
    ctx: &'a ServiceContext,
    bits: Snapshot,
    observers: Vec<(SubscriptionId, Observer<'a>)>,
    next_subscription: u64,
}

impl<'a> RouterBitStore<'a> {
    /// Creates an empty store that draws identifiers from `ctx`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx, bits: Arc::from(Vec::new()), observers: Vec::new(), next_subscription: 0 }
    }

    /// Assigns a fresh identifier to `bit` and appends it.
    ///
    /// Input fields are stored as given. All observers are notified before
    /// this returns.
    pub fn add(&mut self, bit: NewRouterBit) {
        let bit = bit.with_id(self.ctx.id_gen.generate_id());
        debug!(id = %bit.id, name = %bit.name, "adding router bit");
        self.bits = self.bits.iter().cloned().chain(std::iter::once(bit)).collect();
        self.notify();
    }

    /// Drops every bit whose identifier equals `id`, keeping the rest in order.
    ///
    /// Observers are notified even when nothing matched.
    pub fn remove(&mut self, id: &str) {
        let before = self.bits.len();
        self.bits = self.bits.iter().filter(|bit| bit.id != id).cloned().collect();
        debug!(id, removed = before - self.bits.len(), "removing router bit");
        self.notify();
    }

    /// Registers `observer`, calling it at once with the current snapshot
    /// and then after every mutation until [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&mut self, observer: impl FnMut(&Snapshot) + 'a) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        let mut observer: Observer<'a> = Box::new(observer);
        observer(&self.bits);
        self.observers.push((id, observer));
        debug!(subscription = id.0, observers = self.observers.len(), "observer subscribed");
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `false` if `id` was not (or is no longer) registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        before != self.observers.len()
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.bits)
    }

    /// Number of bits in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.bits);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicU64, Ordering};

    use proptest::prelude::*;

    use super::*;
    use crate::adapters::live::id_gen::LiveIdGenerator;
    use crate::ports::IdGenerator;

    /// Predictable ids ("bit-0", "bit-1", ...) for asserting on exact values.
    struct CountingIdGenerator(AtomicU64);

    impl IdGenerator for CountingIdGenerator {
        fn generate_id(&self) -> String {
            format!("bit-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn counting_context() -> ServiceContext {
        ServiceContext::with_id_gen(Box::new(CountingIdGenerator(AtomicU64::new(0))))
    }

    fn end_mill() -> NewRouterBit {
        NewRouterBit::new("1/4 End Mill", "flat", 6.35, "roughing")
    }

    fn ids(snapshot: &Snapshot) -> Vec<String> {
        snapshot.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let ctx = counting_context();
        let store = RouterBitStore::new(&ctx);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn add_then_remove_leaves_store_empty() {
        let ctx = ServiceContext::with_id_gen(Box::new(LiveIdGenerator::new()));
        let mut store = RouterBitStore::new(&ctx);

        store.add(end_mill());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id.len(), 36);
        assert!((snapshot[0].diameter - 6.35).abs() < f64::EPSILON);

        let id = snapshot[0].id.clone();
        store.remove(&id);
        assert!(store.is_empty());
    }

    #[test]
    fn removing_first_of_two_keeps_second() {
        let ctx = counting_context();
        let mut store = RouterBitStore::new(&ctx);

        store.add(NewRouterBit::new("A", "flat", 3.0, ""));
        store.add(NewRouterBit::new("B", "ball", 6.0, ""));
        store.remove("bit-0");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0], NewRouterBit::new("B", "ball", 6.0, "").with_id("bit-1"));
    }

    #[test]
    fn remove_unknown_id_keeps_content_but_replaces_snapshot() {
        let ctx = counting_context();
        let mut store = RouterBitStore::new(&ctx);
        store.add(end_mill());

        let before = store.snapshot();
        store.remove("missing");
        let after = store.snapshot();

        assert_eq!(&*before, &*after);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn add_does_not_touch_previous_snapshot() {
        let ctx = counting_context();
        let mut store = RouterBitStore::new(&ctx);
        store.add(end_mill());

        let before = store.snapshot();
        store.add(end_mill());

        assert_eq!(before.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn subscriber_sees_initial_and_every_mutation() {
        let ctx = counting_context();
        let mut store = RouterBitStore::new(&ctx);
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();

        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| sink.borrow_mut().push(ids(snapshot)));

        store.add(end_mill());
        store.add(end_mill());
        store.remove("bit-0");
        store.remove("bit-0");

        assert_eq!(
            *seen.borrow(),
            vec![
                vec![],
                vec!["bit-0".to_string()],
                vec!["bit-0".to_string(), "bit-1".to_string()],
                vec!["bit-1".to_string()],
                vec!["bit-1".to_string()],
            ]
        );
    }

    #[test]
    fn late_subscriber_receives_current_snapshot() {
        let ctx = counting_context();
        let mut store = RouterBitStore::new(&ctx);
        store.add(end_mill());

        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.len()));

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn subscribers_are_notified_in_subscription_order() {
        let ctx = counting_context();
        let mut store = RouterBitStore::new(&ctx);
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();

        let first = Rc::clone(&order);
        store.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        store.subscribe(move |_| second.borrow_mut().push("second"));
        order.borrow_mut().clear();

        store.add(end_mill());
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_observer_stops_receiving() {
        let ctx = counting_context();
        let mut store = RouterBitStore::new(&ctx);
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        let sub = store.subscribe(move |_| *sink.borrow_mut() += 1);
        store.add(end_mill());
        assert!(store.unsubscribe(sub));
        store.add(end_mill());

        assert_eq!(*count.borrow(), 2);
        assert!(!store.unsubscribe(sub));
    }

    proptest! {
        #[test]
        fn adds_yield_distinct_ids(n in 0usize..40) {
            let ctx = ServiceContext::with_id_gen(Box::new(LiveIdGenerator::new()));
            let mut store = RouterBitStore::new(&ctx);
            for i in 0..n {
                store.add(NewRouterBit::new(format!("bit {i}"), "flat", 3.175, ""));
            }
            let snapshot = store.snapshot();
            let unique: HashSet<&str> = snapshot.iter().map(|b| b.id.as_str()).collect();
            prop_assert_eq!(snapshot.len(), n);
            prop_assert_eq!(unique.len(), n);
        }

        #[test]
        fn remove_present_id_drops_exactly_that_record(
            n in 1usize..20,
            pick in any::<prop::sample::Index>(),
        ) {
            let ctx = counting_context();
            let mut store = RouterBitStore::new(&ctx);
            for _ in 0..n {
                store.add(end_mill());
            }
            let original = ids(&store.snapshot());
            let target = original[pick.index(n)].clone();

            store.remove(&target);
            let expected: Vec<String> =
                original.iter().filter(|id| **id != target).cloned().collect();
            prop_assert_eq!(ids(&store.snapshot()), expected.clone());

            store.remove(&target);
            prop_assert_eq!(ids(&store.snapshot()), expected);
        }

        #[test]
        fn one_notification_per_mutation(ops in prop::collection::vec(any::<bool>(), 0..30)) {
            let ctx = counting_context();
            let mut store = RouterBitStore::new(&ctx);
            let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
            let sink = Rc::clone(&seen);
            store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.len()));

            let mut expected = vec![0];
            for add in &ops {
                let snapshot = store.snapshot();
                if *add {
                    store.add(end_mill());
                } else if let Some(first) = snapshot.first() {
                    store.remove(&first.id);
                } else {
                    store.remove("nothing");
                }
                expected.push(store.len());
            }
            prop_assert_eq!(seen.borrow().clone(), expected);
        }
    }
}
