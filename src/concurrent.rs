//! Poll-driven fan-out.
//!
//! `join_all` drives every future on the caller's task, so nothing needs to
//! be `'static` or `Send`; the dashboard uses it to fire one request per
//! category and wait for all of them to settle.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Run all futures concurrently and collect their outputs in input order.
///
/// Outputs are kept whether they are `Ok` or `Err`; one failing request
/// never cancels the others.
pub fn join_all<F>(futures: impl IntoIterator<Item = F>) -> JoinAll<F>
where
    F: Future,
{
    let slots = futures
        .into_iter()
        .map(|f| Slot::Running(Box::pin(f)))
        .collect();
    JoinAll { slots }
}

enum Slot<F: Future> {
    Running(Pin<Box<F>>),
    Settled(F::Output),
    Taken,
}

impl<F: Future> Slot<F> {
    /// Poll once; true when the output is available.
    fn poll_settle(&mut self, cx: &mut Context<'_>) -> bool {
        match self {
            Slot::Running(fut) => match fut.as_mut().poll(cx) {
                Poll::Ready(output) => {
                    *self = Slot::Settled(output);
                    true
                }
                Poll::Pending => false,
            },
            Slot::Settled(_) | Slot::Taken => true,
        }
    }

    fn take(&mut self) -> Option<F::Output> {
        match std::mem::replace(self, Slot::Taken) {
            Slot::Settled(output) => Some(output),
            _ => None,
        }
    }
}

/// Future returned by [`join_all`]
pub struct JoinAll<F: Future> {
    slots: Vec<Slot<F>>,
}

impl<F: Future> Future for JoinAll<F> {
    type Output = Vec<F::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        let mut pending = false;
        for slot in &mut this.slots {
            pending |= !slot.poll_settle(cx);
        }
        if pending {
            return Poll::Pending;
        }

        Poll::Ready(this.slots.iter_mut().filter_map(Slot::take).collect())
    }
}

// Futures are boxed and outputs are never pinned
impl<F: Future> Unpin for JoinAll<F> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_input_is_ready_immediately() {
        let futures: Vec<std::future::Ready<i32>> = vec![];
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);

        let mut join = join_all(futures);
        match Pin::new(&mut join).poll(&mut cx) {
            Poll::Ready(results) => assert!(results.is_empty()),
            Poll::Pending => panic!("empty join_all should complete immediately"),
        }
    }

    #[tokio::test]
    async fn keeps_input_order_and_failures() {
        let finished = Rc::new(RefCell::new(Vec::new()));

        let tasks = (0..4u32).map(|i| {
            let finished = finished.clone();
            async move {
                // Later inputs finish first
                for _ in 0..(4 - i) {
                    tokio::task::yield_now().await;
                }
                finished.borrow_mut().push(i);
                if i == 2 { Err(format!("task {i} failed")) } else { Ok(i * 10) }
            }
        });

        let results = join_all(tasks).await;

        assert_eq!(
            results,
            vec![Ok(0), Ok(10), Err("task 2 failed".to_string()), Ok(30)]
        );
        assert_eq!(*finished.borrow(), vec![3, 2, 1, 0]);
    }
}
