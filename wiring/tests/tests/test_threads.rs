use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use wiring::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

trait Counter: Send + Sync {
    fn next(&self) -> usize;
}

#[derive(Default)]
struct AtomicCounter(AtomicUsize);

impl Counter for AtomicCounter {
    fn next(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct Named(String);

impl Greeter for Named {
    fn greet(&self) -> String {
        format!("hi {}", self.0)
    }
}

#[container]
struct Services {
    counter: Shared<dyn Counter, AtomicCounter>,
    greeter: Factory<dyn Greeter>,
}

#[derive(Default, Dependent)]
struct Job {
    counter: Depends<dyn Counter>,
    greeter: Depends<dyn Greeter>,
}

const THREADS: usize = 8;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_shared_instance_across_threads() {
    let services = Arc::new(Services::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let services = services.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                let job: Job = services.make_default();
                let counter = job.dependency::<dyn Counter>().unwrap();
                counter.next();
                counter as *const dyn Counter as *const () as usize
            })
        })
        .collect();

    let addrs: Vec<_> = workers.into_iter().map(|w| w.join().unwrap()).collect();
    assert!(addrs.iter().all(|a| *a == addrs[0]));

    // Every thread incremented the single instance
    let counter = services.resolve::<dyn Counter>();
    assert!(counter.get().unwrap().next() >= THREADS);
}

#[test]
fn test_factory_installed_on_one_thread_used_on_others() {
    let services = Arc::new(Services::new());

    {
        let services = services.clone();
        thread::spawn(move || {
            services
                .set_factory::<dyn Greeter>(|| Arc::new(Named("there".to_owned())))
                .unwrap();
        })
        .join()
        .unwrap();
    }

    let greetings: Vec<_> = (0..THREADS)
        .map(|_| {
            let services = services.clone();
            thread::spawn(move || {
                let job: Job = services.make_default();
                job.dependency::<dyn Greeter>().map(Greeter::greet)
            })
        })
        .map(|t| t.join().unwrap())
        .collect();

    assert_eq!(greetings, vec![Some("hi there".to_owned()); THREADS]);
}

#[test]
fn test_concurrent_install_and_resolve() {
    let services = Arc::new(Services::new());
    let installs = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(THREADS));

    let workers: Vec<_> = (0..THREADS)
        .map(|i| {
            let services = services.clone();
            let installs = installs.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                if i % 2 == 0 {
                    services
                        .set_factory::<dyn Greeter>(move || Arc::new(Named(i.to_string())))
                        .unwrap();
                    installs.fetch_add(1, Ordering::SeqCst);
                }
                // Either empty or produced by one of the installed closures
                services
                    .resolve::<dyn Greeter>()
                    .get()
                    .map(Greeter::greet)
            })
        })
        .collect();

    for w in workers {
        if let Some(greeting) = w.join().unwrap() {
            assert!(greeting.starts_with("hi "));
        }
    }

    assert_eq!(installs.load(Ordering::SeqCst), THREADS / 2);
    assert!(services.resolve::<dyn Greeter>().get().is_some());
}
