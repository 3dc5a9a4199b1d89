mod callback;
mod services_impl;

pub use callback::*;
pub use services_impl::*;
