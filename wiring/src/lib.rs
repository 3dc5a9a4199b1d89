//! Dependency injection with a statically fixed set of bindings.
//!
//! # Examples
//!
//! ## Wiring a consumer
//!
//! Interfaces are traits, implementations are bound to them in a container
//! using one of three strategies:
//! - [`Owner`] - every resolution constructs a fresh, exclusively owned
//!   instance
//! - [`Shared`] - one lazily constructed instance for the life of the process
//! - [`Factory`] - instances come from a closure installed at runtime
//!
//! Consumers declare a [`Depends`] slot per interface they need and the
//! container populates the slots it has bindings for.
//!
//! ```
//! use wiring::*;
//!
//! trait Storage: Send + Sync {
//!     fn load(&self) -> Vec<u32>;
//! }
//!
//! trait Summer: Send + Sync {
//!     fn sum(&self, values: &[u32]) -> u32;
//! }
//!
//! #[derive(Default)]
//! struct MemStorage;
//! impl Storage for MemStorage {
//!     fn load(&self) -> Vec<u32> {
//!         vec![1, 2, 3]
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Adder;
//! impl Summer for Adder {
//!     fn sum(&self, values: &[u32]) -> u32 {
//!         values.iter().sum()
//!     }
//! }
//!
//! #[container]
//! struct App {
//!     storage: Owner<dyn Storage, MemStorage>,
//!     summer: Shared<dyn Summer, Adder>,
//! }
//!
//! #[derive(Dependent)]
//! struct Report {
//!     storage: Depends<dyn Storage>,
//!     summer: Depends<dyn Summer>,
//!     title: String,
//! }
//!
//! impl Report {
//!     fn new(title: &str) -> Self {
//!         Self {
//!             storage: Depends::new(),
//!             summer: Depends::new(),
//!             title: title.to_owned(),
//!         }
//!     }
//!
//!     fn render(&self) -> Result<String, InjectionError> {
//!         let values = self.require::<dyn Storage>()?.load();
//!         let total = self.require::<dyn Summer>()?.sum(&values);
//!         Ok(format!("{}: {}", self.title, total))
//!     }
//! }
//!
//! let app = App::new();
//! let report = app.make(Report::new("total"));
//! assert_eq!(report.render().unwrap(), "total: 6");
//!
//! // Interfaces can also be resolved directly
//! let summer = app.resolve::<dyn Summer>();
//! assert_eq!(summer.get().unwrap().sum(&[4, 5]), 9);
//! ```
//!
//! ## Factories
//!
//! A [`Factory`] binding resolves to an empty handle until a closure is
//! installed, and to whatever the latest closure returns afterwards.
//!
//! ```
//! use std::sync::Arc;
//! use wiring::*;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct Polite(String);
//! impl Greeter for Polite {
//!     fn greet(&self) -> String {
//!         format!("good day, {}", self.0)
//!     }
//! }
//!
//! #[container]
//! struct App {
//!     greeter: Factory<dyn Greeter>,
//! }
//!
//! let app = App::new();
//! assert!(app.resolve::<dyn Greeter>().is_empty());
//!
//! app.set_factory::<dyn Greeter>(|| Arc::new(Polite("sir".to_owned())))
//!     .unwrap();
//! assert_eq!(
//!     app.resolve::<dyn Greeter>().get().unwrap().greet(),
//!     "good day, sir"
//! );
//! ```
//!
//! ## Static guarantees
//!
//! Binding one interface twice does not compile:
//!
//! ```compile_fail
//! use wiring::*;
//!
//! trait Greeter: Send + Sync {}
//!
//! #[derive(Default)]
//! struct A;
//! impl Greeter for A {}
//!
//! #[derive(Default)]
//! struct B;
//! impl Greeter for B {}
//!
//! #[container]
//! struct Ambiguous {
//!     a: Owner<dyn Greeter, A>,
//!     b: Shared<dyn Greeter, B>,
//! }
//! ```
//!
//! Not even when spelled differently:
//!
//! ```compile_fail
//! use wiring::*;
//!
//! trait Greeter: Send + Sync {}
//! type AlsoGreeter = dyn Greeter;
//!
//! #[derive(Default)]
//! struct A;
//! impl Greeter for A {}
//!
//! #[container]
//! struct Ambiguous {
//!     a: Owner<dyn Greeter, A>,
//!     b: Factory<AlsoGreeter>,
//! }
//! ```
//!
//! Resolving an interface the container does not bind is rejected as well
//! (use [`Container::get`] for a lookup that tolerates missing bindings):
//!
//! ```compile_fail
//! use wiring::*;
//!
//! trait Greeter: Send + Sync {}
//! trait Farewell: Send + Sync {}
//!
//! #[derive(Default)]
//! struct A;
//! impl Greeter for A {}
//!
//! #[container]
//! struct App {
//!     a: Owner<dyn Greeter, A>,
//! }
//!
//! let _ = App::new().resolve::<dyn Farewell>();
//! ```
//!
//! A consumer can only use interfaces it declared a slot for:
//!
//! ```compile_fail
//! use wiring::*;
//!
//! trait Greeter: Send + Sync {}
//! trait Farewell: Send + Sync {}
//!
//! #[derive(Default, Dependent)]
//! struct Host {
//!     greeter: Depends<dyn Greeter>,
//! }
//!
//! let host = Host::default();
//! let _ = host.dependency::<dyn Farewell>();
//! ```
//!
//! Nor declare two slots for the same interface:
//!
//! ```compile_fail
//! use wiring::*;
//!
//! trait Greeter: Send + Sync {}
//!
//! #[derive(Default, Dependent)]
//! struct Host {
//!     first: Depends<dyn Greeter>,
//!     second: Depends<dyn Greeter>,
//! }
//! ```

extern crate self as wiring;

pub use wiring_impl::*;

mod bindings;
pub use bindings::*;

mod container;
pub use container::*;

mod depends;
pub use depends::*;

mod errors;
pub use errors::*;

mod handle;
pub use handle::*;

mod registry;
pub use registry::*;

mod type_info;
pub use type_info::*;

pub mod utils;
