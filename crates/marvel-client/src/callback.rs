//! # Result Delivery
//!
//! A [`ResultCallback`] receives the outcome of exactly one request.
//! `complete` takes `self` by value, so a callback cannot be invoked twice.
//! [`Delivery`] covers the other half of the contract: if a transport drops
//! a pending request without completing it, the callback still fires, with
//! [`MarvelApiError::Cancelled`].
//!
//! Callers that prefer awaiting over callbacks can use [`reply_channel`].

use std::marker::PhantomData;

use tokio::sync::oneshot;

use crate::error::MarvelApiError;

/// Consumer-supplied sink for one request's result.
pub trait ResultCallback<T>: Send + 'static {
    fn complete(self, result: Result<T, MarvelApiError>);
}

impl<T, F> ResultCallback<T> for F
where
    F: FnOnce(Result<T, MarvelApiError>) + Send + 'static,
{
    fn complete(self, result: Result<T, MarvelApiError>) {
        self(result)
    }
}

/// A callback that forwards its result into a oneshot channel.
///
/// The receiver yields `Err(RecvError)` only if the callback was dropped
/// without running, which a conforming transport never does.
pub fn reply_channel<T: Send + 'static>() -> (
    impl ResultCallback<T>,
    oneshot::Receiver<Result<T, MarvelApiError>>,
) {
    let (tx, rx) = oneshot::channel();
    let callback = move |result: Result<T, MarvelApiError>| {
        let _ = tx.send(result);
    };
    (callback, rx)
}

/// Holds a callback until its request resolves.
///
/// Dropping an undelivered `Delivery` completes the callback with
/// `Cancelled`.
pub struct Delivery<T, C: ResultCallback<T>> {
    endpoint: String,
    callback: Option<C>,
    _payload: PhantomData<fn(T)>,
}

impl<T, C: ResultCallback<T>> Delivery<T, C> {
    pub fn new(endpoint: impl Into<String>, callback: C) -> Self {
        Self {
            endpoint: endpoint.into(),
            callback: Some(callback),
            _payload: PhantomData,
        }
    }

    /// Hand `result` to the callback.
    pub fn deliver(mut self, result: Result<T, MarvelApiError>) {
        if let Some(callback) = self.callback.take() {
            callback.complete(result);
        }
    }
}

impl<T, C: ResultCallback<T>> Drop for Delivery<T, C> {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            tracing::warn!(endpoint = %self.endpoint, "request dropped before completion");
            callback.complete(Err(MarvelApiError::Cancelled {
                endpoint: std::mem::take(&mut self.endpoint),
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn closure_is_a_callback() {
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let cb = move |r: Result<u32, MarvelApiError>| {
            *sink.lock().unwrap() = Some(r.unwrap());
        };
        cb.complete(Ok(7));
        assert_eq!(*seen.lock().unwrap(), Some(7));
    }

    #[test]
    fn deliver_invokes_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();
        let delivery = Delivery::new("GET /characters", move |r: Result<(), MarvelApiError>| {
            assert!(r.is_ok());
            c.fetch_add(1, Ordering::SeqCst);
        });
        delivery.deliver(Ok(()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reply_channel_yields_the_result() {
        let (callback, rx) = reply_channel::<u32>();
        callback.complete(Ok(3));
        assert_eq!(rx.await.unwrap().unwrap(), 3);
    }

    #[test]
    fn dropped_delivery_reports_cancelled() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let delivery = Delivery::new("GET /characters/1", move |r: Result<(), MarvelApiError>| {
            sink.lock().unwrap().push(r.unwrap_err().to_string());
        });
        drop(delivery);
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["request to GET /characters/1 was dropped before completion".to_string()]
        );
    }
}
