use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wiring::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

trait Store: Send + Sync {
    fn put(&mut self, v: u64);
    fn len(&self) -> usize;
}

struct FixedClock(u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

#[derive(Default)]
struct VecStore(Vec<u64>);

impl Store for VecStore {
    fn put(&mut self, v: u64) {
        self.0.push(v);
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Default, Clone, Dependent)]
struct Recorder {
    clock: Depends<dyn Clock>,
    store: Depends<dyn Store>,
    label: String,
}

impl Recorder {
    fn record(&mut self) -> Result<u64, InjectionError> {
        let now = self.require::<dyn Clock>()?.now();
        self.dependency_mut::<dyn Store>()
            .ok_or_else(InjectionError::unresolved::<dyn Store>)?
            .put(now);
        Ok(now)
    }
}

#[derive(Default, Dependent)]
struct Tuple(Depends<dyn Clock>, u32, Depends<dyn Store>);

#[derive(Default, Dependent)]
struct NoDependencies {
    #[allow(dead_code)]
    seconds: u64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_depends_empty_by_default() {
    let slot = Depends::<dyn Clock>::default();

    assert!(slot.get().is_none());
    assert!(slot.handle().is_empty());
    assert_eq!(format!("{slot:?}"), "Depends(Handle(<empty>))");
}

#[test]
fn test_depends_inject_and_take() {
    let mut slot = Depends::<dyn Clock>::new();

    slot.inject(Handle::from_arc(Arc::new(FixedClock(5))));
    assert_eq!(slot.get().unwrap().now(), 5);

    let taken = slot.take();
    assert!(slot.get().is_none());
    assert_eq!(taken.get().unwrap().now(), 5);
}

#[test]
fn test_derived_dependencies() {
    let recorder = Recorder::default();

    assert_eq!(
        recorder.dependencies(),
        vec![TypeInfo::of::<dyn Clock>(), TypeInfo::of::<dyn Store>()]
    );
    assert_eq!(recorder.type_info(), TypeInfo::of::<Recorder>());

    assert!(NoDependencies::default().dependencies().is_empty());
}

#[test]
fn test_derived_slot_lookup() {
    let mut recorder = Recorder::default();

    let slot = recorder.slot_for(TypeId::of::<dyn Clock>()).unwrap();
    assert!(slot.is::<Depends<dyn Clock>>());

    let slot = recorder.slot_for(TypeId::of::<dyn Store>()).unwrap();
    assert!(slot.is::<Depends<dyn Store>>());

    assert!(recorder.slot_for(TypeId::of::<u32>()).is_none());
    assert!(NoDependencies::default()
        .slot_for(TypeId::of::<dyn Clock>())
        .is_none());
}

#[test]
fn test_tuple_struct_slots() {
    let mut tuple = Tuple::default();
    assert_eq!(
        tuple.dependencies(),
        vec![TypeInfo::of::<dyn Clock>(), TypeInfo::of::<dyn Store>()]
    );

    tuple.inject::<dyn Clock>(Handle::from_arc(Arc::new(FixedClock(9))));
    assert_eq!(tuple.0.get().unwrap().now(), 9);
    assert_eq!(tuple.1, 0);

    let slot = tuple.slot_for(TypeId::of::<dyn Store>()).unwrap();
    let slot = slot.downcast_mut::<Depends<dyn Store>>().unwrap();
    slot.inject(Handle::<dyn Store>::from_fn(|| Box::new(VecStore::default())));
    assert!(tuple.dependency::<dyn Store>().is_some());
}

#[test]
fn test_uses_accessors() {
    let mut recorder = Recorder::default();

    let err = recorder.record().unwrap_err();
    assert!(err.is_for::<dyn Clock>());

    recorder.inject::<dyn Clock>(Handle::from_arc(Arc::new(FixedClock(42))));
    let err = recorder.record().unwrap_err();
    assert!(err.is_for::<dyn Store>());

    recorder.inject::<dyn Store>(Handle::<dyn Store>::from_fn(|| Box::new(VecStore::default())));
    assert_eq!(recorder.record(), Ok(42));
    assert_eq!(recorder.record(), Ok(42));
    assert_eq!(recorder.dependency::<dyn Store>().unwrap().len(), 2);
}

#[test]
fn test_consumer_clone_follows_handle_rules() {
    let created = Arc::new(AtomicUsize::new(0));
    let created_fn = created.clone();

    let mut recorder = Recorder {
        label: "original".to_owned(),
        ..Default::default()
    };
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(1));
    recorder.inject::<dyn Clock>(Handle::from_arc(clock.clone()));
    recorder.inject::<dyn Store>(Handle::<dyn Store>::from_fn(move || {
        created_fn.fetch_add(1, Ordering::SeqCst);
        Box::new(VecStore::default())
    }));
    recorder.record().unwrap();

    let mut copy = recorder.clone();
    assert_eq!(copy.label, "original");
    assert_eq!(created.load(Ordering::SeqCst), 2);

    // Shared dependency aliases, owned one is a fresh instance
    assert!(copy.clock.handle().same_instance(recorder.clock.handle()));
    assert_eq!(Arc::strong_count(&clock), 3);
    assert_eq!(copy.dependency::<dyn Store>().unwrap().len(), 0);
    assert_eq!(recorder.dependency::<dyn Store>().unwrap().len(), 1);

    copy.record().unwrap();
    assert_eq!(recorder.dependency::<dyn Store>().unwrap().len(), 1);
}

#[test]
fn test_uses_through_mut_reference() {
    fn tick(recorder: &mut Recorder) -> Option<u64> {
        let now = recorder.dependency::<dyn Clock>()?.now();
        recorder.dependency_mut::<dyn Store>()?.put(now);
        Some(now)
    }

    let mut recorder = Recorder::default();
    assert_eq!(tick(&mut recorder), None);

    let by_ref = &mut recorder;
    by_ref.inject::<dyn Clock>(Handle::from_arc(Arc::new(FixedClock(7))));
    by_ref.inject::<dyn Store>(Handle::<dyn Store>::from_fn(|| Box::new(VecStore::default())));
    assert_eq!(by_ref.require::<dyn Clock>().map(Clock::now), Ok(7));

    assert_eq!(tick(&mut recorder), Some(7));
    assert_eq!(recorder.dependency::<dyn Store>().unwrap().len(), 1);
}
