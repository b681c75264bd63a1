use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use tokio::sync::mpsc;

use limit_dialer::dialer::{CancelToken, DialOutcome, DialQueue, DialQueueConfig};
use limit_dialer::transport::tcp::TcpTransport;
use limit_dialer::transport::Connection;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Candidate addresses of the peer; the first dial to succeed wins
    #[arg(required = true)]
    addrs: Vec<SocketAddr>,
    /// Max concurrent dial attempts
    #[arg(short, long, default_value_t = 4)]
    limit: usize,
    /// Per-attempt dial timeout in milliseconds
    #[arg(short, long, default_value_t = 5000)]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = DialQueueConfig::default()
        .set_limit(args.limit)
        .set_dial_timeout(Duration::from_millis(args.timeout));
    let queue = DialQueue::new(config).unwrap();
    let transport = Arc::new(TcpTransport);
    let token = CancelToken::new();
    let (sender, mut receiver) = mpsc::unbounded_channel();

    let total = args.addrs.len();
    for addr in args.addrs {
        let sender = sender.clone();
        queue.push(transport.clone(), addr, token.clone(), move |outcome| {
            _ = sender.send(outcome);
        });
    }
    drop(sender);

    for _ in 0..total {
        match receiver.recv().await.unwrap() {
            DialOutcome::Success {
                addr,
                mut connection,
            } => {
                log::info!("connected via {addr}");
                _ = connection.close().await;
            }
            DialOutcome::Error(e) => log::warn!("{e}"),
            DialOutcome::Cancelled => {}
        }
    }
}
