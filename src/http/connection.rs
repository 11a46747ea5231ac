use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::static_files::StaticResponder;

/// Size of the single receive buffer. A request larger than this is truncated
/// and parsed from whatever fit.
const RECV_BUFSIZE: usize = 4096;

pub struct Connection {
    stream: TcpStream,
    responder: StaticResponder,
    state: ConnectionState,
}

pub enum ConnectionState {
    Receiving,
    Responding(Result<Request, ParseError>),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, responder: StaticResponder) -> Self {
        Self {
            stream,
            responder,
            state: ConnectionState::Receiving,
        }
    }

    /// Drives the connection through `Receiving → Responding → Writing →
    /// Closed`, exactly one request per connection.
    ///
    /// An invalid request still flows through Responding (it is answered with
    /// a 400), but a peer that closes before sending anything, and any socket
    /// or local file error, aborts the connection with nothing sent.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Receiving => {
                    match self.receive().await? {
                        Some(parsed) => {
                            self.state = ConnectionState::Responding(parsed);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Responding(parsed) => {
                    let response = self.responder.respond(parsed).await?;

                    tracing::info!(status = response.status().as_u16(), "Responding");

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request with a single receive. Returns `None` when the peer
    /// closed the connection without sending anything.
    async fn receive(&mut self) -> anyhow::Result<Option<Result<Request, ParseError>>> {
        let mut buffer = BytesMut::with_capacity(RECV_BUFSIZE);

        let n = self.stream.read_buf(&mut buffer).await?;
        if n == 0 {
            tracing::debug!("Peer closed before sending a request");
            return Ok(None);
        }

        let parsed = parse_request(&buffer[..n]);

        match &parsed {
            Ok(req) => tracing::info!(
                method = %req.method,
                target = %req.target,
                version = %req.version,
                "Parsed request"
            ),
            Err(e) => tracing::warn!("Malformed request: {:?}", e),
        }

        Ok(Some(parsed))
    }
}
