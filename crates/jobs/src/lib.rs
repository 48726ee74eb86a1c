pub mod worker;

pub use worker::ResolutionWorker;
