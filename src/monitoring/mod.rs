/*!
 * Monitoring
 * Structured tracing for critical sections
 */

mod tracer;

pub(crate) use tracer::env_flag;
pub use tracer::{init_tracing, CriticalSection};
