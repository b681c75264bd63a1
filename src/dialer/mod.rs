use std::fmt::Debug;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use async_lock::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::Error;
use crate::transport::{Connection, Transport};

pub mod config;
mod token;

pub use config::DialQueueConfig;
pub use token::CancelToken;

/// Outcome of one dial attempt, delivered exactly once to that attempt's
/// callback.
pub enum DialOutcome<A> {
    /// This attempt won the race; the connection is the caller's to use.
    Success {
        addr: A,
        connection: Box<dyn Connection>,
    },
    /// The transport failed or the attempt timed out.
    Error(Error),
    /// A sibling attempt already won. Any connection obtained here was torn
    /// down; it was never the caller's to use.
    Cancelled,
}

type DialCallback<A> = Box<dyn FnOnce(DialOutcome<A>) + Send>;

struct DialTask<A> {
    transport: Arc<dyn Transport<A>>,
    addr: A,
    token: CancelToken,
    callback: DialCallback<A>,
}

/// Bounded-concurrency queue of outbound dial attempts.
///
/// At most `limit` dials are in flight at any time; excess tasks wait in FIFO
/// order for a free slot. Each attempt runs under `dial_timeout` and reports
/// one [`DialOutcome`] to its own callback. Attempts sharing a [`CancelToken`]
/// race: the first success claims the token, and every successful sibling
/// after it tears its connection down and reports [`DialOutcome::Cancelled`].
///
/// Dropping the last handle closes the queue; already-enqueued tasks still
/// run to completion before the workers exit.
pub struct DialQueue<A> {
    task_sender: UnboundedSender<DialTask<A>>,
}

impl<A: Debug + Send + Sync + 'static> DialQueue<A> {
    /// Construct a dial queue with the specified configuration, spawning its
    /// worker pool on the current tokio runtime.
    pub fn new(config: DialQueueConfig) -> io::Result<DialQueue<A>> {
        config.check()?;
        let (task_sender, task_receiver) = mpsc::unbounded_channel();
        let task_receiver = Arc::new(Mutex::new(task_receiver));
        for _ in 0..config.limit {
            let task_receiver = task_receiver.clone();
            let dial_timeout = config.dial_timeout;
            tokio::spawn(worker_loop(task_receiver, dial_timeout));
        }
        Ok(DialQueue { task_sender })
    }

    /// Enqueue one dial attempt. Never blocks; the callback fires exactly
    /// once, on a worker task, never from inside `push`.
    pub fn push<F>(&self, transport: Arc<dyn Transport<A>>, addr: A, token: CancelToken, callback: F)
    where
        F: FnOnce(DialOutcome<A>) + Send + 'static,
    {
        let task = DialTask {
            transport,
            addr,
            token,
            callback: Box::new(callback),
        };
        // Workers outlive every queue handle, so the channel is open here.
        _ = self.task_sender.send(task);
    }
}

/// One worker slot. The slot is free only while this loop waits on the
/// receiver; it is occupied for the full duration of one timed dial attempt
/// and released on every exit path by looping back.
async fn worker_loop<A: Debug + Send + Sync + 'static>(
    task_receiver: Arc<Mutex<UnboundedReceiver<DialTask<A>>>>,
    dial_timeout: Duration,
) {
    loop {
        let task = match task_receiver.lock().await.recv().await {
            Some(task) => task,
            None => return,
        };
        do_work(task, dial_timeout).await;
    }
}

async fn do_work<A: Debug>(task: DialTask<A>, dial_timeout: Duration) {
    let DialTask {
        transport,
        addr,
        token,
        callback,
    } = task;
    log::debug!("dial start {addr:?}");
    let outcome = match tokio::time::timeout(dial_timeout, transport.dial(&addr)).await {
        Err(_) => {
            // The abandoned dial is dropped with its future; its eventual
            // result has nowhere to land.
            log::debug!("dial timeout {addr:?}");
            DialOutcome::Error(Error::Timeout(dial_timeout))
        }
        Ok(Err(e)) => {
            log::debug!("dial error {addr:?},{e:?}");
            DialOutcome::Error(Error::Dial(e))
        }
        Ok(Ok(connection)) => {
            if token.claim() {
                log::debug!("dial success {addr:?}");
                DialOutcome::Success { addr, connection }
            } else {
                log::debug!("dial cancelled {addr:?}");
                teardown(connection).await;
                DialOutcome::Cancelled
            }
        }
    };
    callback(outcome);
}

/// Tear down a connection discarded by a losing attempt. The teardown must be
/// attempted so neither side leaks; its result is ignored.
async fn teardown(mut connection: Box<dyn Connection>) {
    _ = connection.drain().await;
    _ = connection.close().await;
}
