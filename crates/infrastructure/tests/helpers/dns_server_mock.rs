#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

/// How the mock server answers every question it receives.
#[derive(Debug, Clone, Default)]
pub struct MockBehavior {
    pub authoritative: bool,
    pub rcode: Option<ResponseCode>,
    pub answers: Vec<Record>,
    /// UDP replies carry the TC bit and no records; TCP gets the answers.
    pub truncate_udp: bool,
    /// Reply with a transaction ID that does not match the query.
    pub wrong_id: bool,
    /// Never reply over UDP.
    pub silent: bool,
}

/// UDP + TCP DNS server on one loopback port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let behavior = Arc::new(behavior);

        let udp_count = udp_queries.clone();
        let tcp_count = tcp_queries.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if behavior.silent {
                                continue;
                            }
                            if let Some(response) = build_response(&buf[..len], &behavior, true) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            tokio::spawn(serve_tcp(stream, behavior.clone()));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            udp_queries,
            tcp_queries,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: TcpStream, behavior: Arc<MockBehavior>) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }

    if let Some(response) = build_response(&query, &behavior, false) {
        let _ = stream
            .write_all(&(response.len() as u16).to_be_bytes())
            .await;
        let _ = stream.write_all(&response).await;
    }
}

fn build_response(query: &[u8], behavior: &MockBehavior, over_udp: bool) -> Option<Vec<u8>> {
    let request = Message::from_vec(query).ok()?;

    let id = if behavior.wrong_id {
        request.id().wrapping_add(1)
    } else {
        request.id()
    };

    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.set_authoritative(behavior.authoritative);
    response.set_recursion_desired(request.recursion_desired());
    response.set_response_code(behavior.rcode.unwrap_or(ResponseCode::NoError));
    for question in request.queries() {
        response.add_query(question.clone());
    }

    if over_udp && behavior.truncate_udp {
        response.set_truncated(true);
    } else {
        for record in &behavior.answers {
            response.add_answer(record.clone());
        }
    }

    response.to_vec().ok()
}
