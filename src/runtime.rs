//! Background execution of resolution cycles
//!
//! With the `tokio-runtime` feature a task goes onto the Tokio runtime the
//! caller is running in. Outside any runtime, or without the feature, the task
//! runs to completion on the calling thread before [`spawn`] returns, so
//! callers never need to know which executor the host uses.

use std::future::Future;

/// Handle to a task started by [`spawn`]
pub trait AsyncHandle: Send + Sync {
    fn is_finished(&self) -> bool;
}

/// Starts `future` in the background when a runtime is available
pub fn spawn<F>(future: F) -> Box<dyn AsyncHandle>
where
    F: Future<Output = ()> + Send + 'static,
{
    #[cfg(feature = "tokio-runtime")]
    {
        if let Ok(handle) = ::tokio::runtime::Handle::try_current() {
            log::trace!("spawning task on the current tokio runtime");
            return Box::new(TokioHandle(handle.spawn(future)));
        }
    }

    log::trace!("no async runtime on this thread, running task inline");
    futures::executor::block_on(future);
    Box::new(Completed)
}

#[cfg(feature = "tokio-runtime")]
struct TokioHandle(::tokio::task::JoinHandle<()>);

#[cfg(feature = "tokio-runtime")]
impl AsyncHandle for TokioHandle {
    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

struct Completed;

impl AsyncHandle for Completed {
    fn is_finished(&self) -> bool {
        true
    }
}
