pub mod cors;
pub mod no_store;
pub mod request_trace;
pub mod structured_logger;

pub use cors::cors_middleware;
pub use no_store::no_store;
pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;

pub mod trace_span;
pub use trace_span::TraceSpan;
