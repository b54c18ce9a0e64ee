pub mod decompression;
pub mod dispatch;
pub mod games;
pub mod layout;
pub mod orchestrator;
pub mod page;
pub mod presenter;
pub mod probe;
pub mod registry;
pub mod remote;
pub mod store;
