//! # limit-dialer - Bounded Outbound Dial Queue
//!
//! `limit-dialer` coordinates concurrent outbound dial attempts for a
//! peer-to-peer networking stack. It runs at most `limit` dials at a time,
//! applies a per-attempt timeout, and implements "first success wins":
//! attempts that share a [`CancelToken`](dialer::CancelToken) race, the first
//! successful one claims the token, and every other successful sibling tears
//! its connection down and reports itself cancelled.
//!
//! ## Architecture
//!
//! - [`dialer`] - The dial queue, its configuration and the cancellation token
//! - [`transport`] - The `Transport`/`Connection` seam the queue dials through
//! - [`error`] - Dial failure taxonomy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use limit_dialer::dialer::{CancelToken, DialOutcome, DialQueue, DialQueueConfig};
//! use limit_dialer::transport::tcp::TcpTransport;
//!
//! # #[tokio::main]
//! # async fn main() -> std::io::Result<()> {
//! let queue = DialQueue::new(DialQueueConfig::default().set_limit(4))?;
//! let transport = Arc::new(TcpTransport);
//! let token = CancelToken::new();
//!
//! // Try every known address of the peer; the first dial to succeed wins.
//! for addr in ["203.0.113.7:4001".parse::<std::net::SocketAddr>().unwrap()] {
//!     let token = token.clone();
//!     queue.push(transport.clone(), addr, token, |outcome| match outcome {
//!         DialOutcome::Success { addr, connection: _ } => {
//!             println!("connected via {addr}");
//!         }
//!         DialOutcome::Error(e) => println!("dial failed: {e}"),
//!         DialOutcome::Cancelled => {}
//!     });
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! All public types are thread-safe and can be shared across async tasks.
//! The library uses Tokio for the async runtime; [`dialer::DialQueue::new`]
//! must be called from within a runtime because it spawns the worker pool.

pub mod dialer;
pub mod error;
pub mod transport;
