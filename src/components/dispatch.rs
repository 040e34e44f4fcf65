// SPDX-License-Identifier: MPL-2.0
//! Marshals component invocations onto one designated execution context.
//!
//! A [`Dispatcher`] feeds jobs to a [`DispatchLoop`] task; a [`Proxy`] wraps
//! a component so every invocation runs as such a job. `Sync` marshalling
//! blocks the calling thread until the job has run and returns its result;
//! `Async` marshalling enqueues and returns immediately. Either way the
//! component is only ever touched from the dispatch context.

use crate::error::{Error, Result};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// How a proxied invocation is delivered to the dispatch context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Block the caller until the invocation has run; results come back.
    Sync,
    /// Enqueue and return immediately; results are not observable.
    Async,
}

/// Handle for submitting jobs to the dispatch context.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Job>,
}

/// The dispatch context itself: a task draining jobs in submission order.
pub struct DispatchLoop {
    rx: mpsc::UnboundedReceiver<Job>,
}

impl Dispatcher {
    /// Creates a dispatcher and the loop the host must run
    /// (`tokio::spawn(dispatch_loop.run())`).
    pub fn new() -> (Self, DispatchLoop) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, DispatchLoop { rx })
    }

    /// Adopts a component: from here on it is only touched by jobs running
    /// on the dispatch context, through the returned proxy.
    pub fn proxy<T: Send + 'static>(&self, component: T, mode: DispatchMode) -> Proxy<T> {
        Proxy {
            tx: self.tx.clone(),
            mode,
            cell: Arc::new(Mutex::new(component)),
        }
    }
}

impl DispatchLoop {
    /// Runs jobs in submission order until every `Dispatcher` and `Proxy`
    /// is gone.
    pub async fn run(mut self) {
        while let Some(job) = self.rx.recv().await {
            job();
        }
    }
}

/// A component wrapped so invocations execute on the dispatch context.
pub struct Proxy<T> {
    tx: mpsc::UnboundedSender<Job>,
    mode: DispatchMode,
    cell: Arc<Mutex<T>>,
}

impl<T> Clone for Proxy<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            mode: self.mode,
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Send + 'static> Proxy<T> {
    /// The mode fixed when the proxy was created.
    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Invokes `f` on the dispatch context and blocks for its result.
    ///
    /// Only valid on a [`DispatchMode::Sync`] proxy, and must be called from
    /// a thread that is not running the dispatch loop itself.
    ///
    /// # Errors
    ///
    /// [`Error::Dispatch`] if this proxy is `Async`, the dispatch context is
    /// gone, or the job was dropped without replying.
    pub fn call<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R + Send + 'static,
        R: Send + 'static,
    {
        if self.mode != DispatchMode::Sync {
            return Err(Error::Dispatch(
                "async proxy cannot return a result; use post()".into(),
            ));
        }
        let (done_tx, done_rx) = oneshot::channel();
        let cell = Arc::clone(&self.cell);
        let job: Job = Box::new(move || {
            if let Ok(mut component) = cell.lock() {
                let _ = done_tx.send(f(&mut component));
            }
        });
        self.tx
            .send(job)
            .map_err(|_| Error::Dispatch("dispatch context is gone".into()))?;
        done_rx
            .blocking_recv()
            .map_err(|_| Error::Dispatch("dispatched call dropped without a reply".into()))
    }

    /// Enqueues `f` to run on the dispatch context and returns immediately.
    /// Valid in either mode.
    ///
    /// # Errors
    ///
    /// [`Error::Dispatch`] if the dispatch context is gone.
    pub fn post<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut T) + Send + 'static,
    {
        let cell = Arc::clone(&self.cell);
        let job: Job = Box::new(move || {
            if let Ok(mut component) = cell.lock() {
                f(&mut component);
            }
        });
        self.tx
            .send(job)
            .map_err(|_| Error::Dispatch("dispatch context is gone".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: u32,
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn sync_call_runs_on_dispatch_context_and_returns() {
        let (dispatcher, dispatch_loop) = Dispatcher::new();
        tokio::spawn(dispatch_loop.run());
        let proxy = dispatcher.proxy(Counter { value: 0 }, DispatchMode::Sync);

        let result = tokio::task::spawn_blocking(move || {
            proxy.call(|counter| {
                counter.value += 1;
                counter.value
            })
        })
        .await
        .unwrap();

        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn async_post_is_observable_through_a_reply_channel() {
        let (dispatcher, dispatch_loop) = Dispatcher::new();
        tokio::spawn(dispatch_loop.run());
        let proxy = dispatcher.proxy(Counter { value: 41 }, DispatchMode::Async);

        let (reply_tx, reply_rx) = oneshot::channel();
        proxy
            .post(move |counter| {
                counter.value += 1;
                let _ = reply_tx.send(counter.value);
            })
            .unwrap();

        assert_eq!(reply_rx.await.unwrap(), 42);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn call_on_async_proxy_fails_loudly() {
        let (dispatcher, dispatch_loop) = Dispatcher::new();
        tokio::spawn(dispatch_loop.run());
        let proxy = dispatcher.proxy(Counter { value: 0 }, DispatchMode::Async);

        let result =
            tokio::task::spawn_blocking(move || proxy.call(|counter| counter.value))
                .await
                .unwrap();

        assert!(matches!(result, Err(Error::Dispatch(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dead_context_surfaces_as_dispatch_error() {
        let (dispatcher, dispatch_loop) = Dispatcher::new();
        drop(dispatch_loop);
        let proxy = dispatcher.proxy(Counter { value: 0 }, DispatchMode::Sync);

        let result = tokio::task::spawn_blocking(move || proxy.call(|counter| counter.value))
            .await
            .unwrap();

        assert!(matches!(result, Err(Error::Dispatch(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn jobs_run_in_submission_order() {
        let (dispatcher, dispatch_loop) = Dispatcher::new();
        tokio::spawn(dispatch_loop.run());
        let proxy = dispatcher.proxy(Counter { value: 0 }, DispatchMode::Async);

        for _ in 0..5 {
            proxy.post(|counter| counter.value += 1).unwrap();
        }
        let (reply_tx, reply_rx) = oneshot::channel();
        proxy
            .post(move |counter| {
                let _ = reply_tx.send(counter.value);
            })
            .unwrap();

        assert_eq!(reply_rx.await.unwrap(), 5);
    }
}
