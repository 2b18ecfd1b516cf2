#![allow(dead_code)]

use async_trait::async_trait;
use dnsdiff_application::ports::{DnsTransport, NameServerLookup, RawResponse};
use dnsdiff_domain::{DnsQuery, DomainError, RecordKind};
use hickory_proto::op::ResponseCode;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type ScriptKey = (SocketAddr, String, RecordKind);

/// Scripted transport. Each (server, hostname, kind) has a queue of
/// outcomes; the last one repeats once the queue is down to one entry.
/// Unscripted queries get an empty authoritative NOERROR.
#[derive(Clone, Default)]
pub struct MockTransport {
    scripts: Arc<Mutex<HashMap<ScriptKey, VecDeque<Result<RawResponse, DomainError>>>>>,
    server_failures: Arc<Mutex<HashMap<SocketAddr, (usize, DomainError)>>>,
    delay: Arc<Mutex<Option<Duration>>>,
    calls: Arc<Mutex<Vec<DnsQuery>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, server: SocketAddr, hostname: &str, kind: RecordKind, response: RawResponse) {
        self.push(server, hostname, kind, Ok(response));
    }

    /// Appends to the queue instead of replacing it.
    pub fn push(
        &self,
        server: SocketAddr,
        hostname: &str,
        kind: RecordKind,
        outcome: Result<RawResponse, DomainError>,
    ) {
        self.scripts
            .lock()
            .unwrap()
            .entry((server, hostname.to_string(), kind))
            .or_default()
            .push_back(outcome);
    }

    /// The next `times` exchanges with `server` fail with `error`, whatever
    /// the question.
    pub fn fail_server(&self, server: SocketAddr, times: usize, error: DomainError) {
        self.server_failures
            .lock()
            .unwrap()
            .insert(server, (times, error));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, server: SocketAddr) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.server == server)
            .count()
    }

    fn next_outcome(&self, query: &DnsQuery) -> Result<RawResponse, DomainError> {
        {
            let mut failures = self.server_failures.lock().unwrap();
            if let Some((remaining, error)) = failures.get_mut(&query.server) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(error.clone());
                }
            }
        }

        let key = (query.server, query.hostname.to_string(), query.kind);
        let mut scripts = self.scripts.lock().unwrap();
        match scripts.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Ok(RawResponse::new(ResponseCode::NoError, true)),
        }
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn exchange(
        &self,
        query: &DnsQuery,
        _timeout: Duration,
    ) -> Result<RawResponse, DomainError> {
        self.calls.lock().unwrap().push(query.clone());

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.next_outcome(query)
    }
}

#[derive(Clone, Default)]
pub struct MockNameServerLookup {
    addresses: Arc<Mutex<HashMap<String, Vec<SocketAddr>>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockNameServerLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_addresses(&self, hostname: &str, addrs: Vec<SocketAddr>) {
        self.addresses
            .lock()
            .unwrap()
            .insert(hostname.to_string(), addrs);
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameServerLookup for MockNameServerLookup {
    async fn lookup(&self, hostname: &str, port: u16) -> Result<Vec<SocketAddr>, DomainError> {
        self.lookups.lock().unwrap().push(hostname.to_string());

        match self.addresses.lock().unwrap().get(hostname) {
            Some(addrs) => Ok(addrs
                .iter()
                .map(|a| SocketAddr::new(a.ip(), port))
                .collect()),
            None => Err(DomainError::TransportIo(format!(
                "no such host: {}",
                hostname
            ))),
        }
    }
}
