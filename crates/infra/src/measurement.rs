pub mod dispatcher;
pub mod strategies;

pub use dispatcher::FileDispatcher;
