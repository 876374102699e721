//! DNS message exchange over UDP with TCP fallback.
//!
//! A query is sent once over UDP. If the answer comes back truncated it is
//! sent once more over TCP to the same server. Each transport gets a single
//! attempt bounded by `DNS_TIMEOUT`; there are no other retries.

use std::fmt::Display;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use log::debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::timeout;

use crate::config::{DNS_TIMEOUT, DNS_TIMEOUT_SECS, MAX_UDP_MESSAGE_SIZE};
use crate::error_handling::{Result, SdgetError};

fn transport_error(nameserver: &str, reason: impl Display) -> SdgetError {
    SdgetError::DnsTransportError {
        nameserver: nameserver.to_string(),
        reason: reason.to_string(),
    }
}

/// Builds a recursive query for `record_type` records of `name`.
pub fn build_query(name: Name, record_type: RecordType) -> Message {
    let mut query = Message::new();
    query
        .set_id(rand::random::<u16>())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(Query::query(name, record_type));
    query
}

/// Sends `query` to `nameserver` and returns the response.
///
/// # Errors
///
/// Returns `SdgetError::DnsTransportError` if the nameserver address cannot
/// be resolved, the exchange fails or times out, or the response cannot be
/// decoded or does not answer the query.
pub async fn exchange(query: &Message, nameserver: &str) -> Result<Message> {
    let server = resolve_server(nameserver).await?;
    let request = query
        .to_vec()
        .map_err(|e| transport_error(nameserver, format!("error encoding query: {e}")))?;

    let response = exchange_udp(&request, server, nameserver).await?;
    let response = if response.truncated() {
        debug!("Response from {nameserver} truncated, retrying over TCP");
        exchange_tcp(&request, server, nameserver).await?
    } else {
        response
    };

    if response.id() != query.id() {
        return Err(transport_error(
            nameserver,
            format!(
                "response id {} does not match query id {}",
                response.id(),
                query.id()
            ),
        ));
    }
    Ok(response)
}

async fn resolve_server(nameserver: &str) -> Result<SocketAddr> {
    tokio::net::lookup_host(nameserver)
        .await
        .map_err(|e| transport_error(nameserver, format!("error resolving nameserver: {e}")))?
        .next()
        .ok_or_else(|| transport_error(nameserver, "nameserver has no addresses"))
}

async fn exchange_udp(request: &[u8], server: SocketAddr, nameserver: &str) -> Result<Message> {
    let bind_addr = if server.is_ipv4() {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    };
    let io = async {
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(server).await?;
        socket.send(request).await?;
        let mut buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];
        let len = socket.recv(&mut buf).await?;
        buf.truncate(len);
        Ok::<_, std::io::Error>(buf)
    };
    let response = timeout(DNS_TIMEOUT, io)
        .await
        .map_err(|_| transport_error(nameserver, format!("UDP query timed out after {DNS_TIMEOUT_SECS}s")))?
        .map_err(|e| transport_error(nameserver, format!("UDP exchange failed: {e}")))?;
    decode_response(&response, nameserver)
}

async fn exchange_tcp(request: &[u8], server: SocketAddr, nameserver: &str) -> Result<Message> {
    let length = u16::try_from(request.len())
        .map_err(|_| transport_error(nameserver, "query too large for TCP framing"))?;
    let io = async {
        let mut stream = TcpStream::connect(server).await?;
        let mut framed = Vec::with_capacity(request.len() + 2);
        framed.extend_from_slice(&length.to_be_bytes());
        framed.extend_from_slice(request);
        stream.write_all(&framed).await?;

        let response_length = stream.read_u16().await?;
        let mut buf = vec![0u8; usize::from(response_length)];
        stream.read_exact(&mut buf).await?;
        Ok::<_, std::io::Error>(buf)
    };
    let response = timeout(DNS_TIMEOUT, io)
        .await
        .map_err(|_| transport_error(nameserver, format!("TCP query timed out after {DNS_TIMEOUT_SECS}s")))?
        .map_err(|e| transport_error(nameserver, format!("TCP exchange failed: {e}")))?;
    decode_response(&response, nameserver)
}

fn decode_response(bytes: &[u8], nameserver: &str) -> Result<Message> {
    let response = Message::from_vec(bytes)
        .map_err(|e| transport_error(nameserver, format!("malformed DNS response: {e}")))?;
    if response.message_type() != MessageType::Response {
        return Err(transport_error(nameserver, "reply is not a DNS response"));
    }
    Ok(response)
}
