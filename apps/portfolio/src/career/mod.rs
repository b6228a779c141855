pub mod handlers;
pub mod provider;
pub mod timeline;
pub mod view;

pub use provider::CareerProvider;
