// WebSocket client utilities for testing

use std::time::Duration;

use futures_util::StreamExt;
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

/// What the server sent next.
#[derive(Debug)]
pub enum Frame {
    Json(Value),
    Closed,
}

pub struct WebSocketClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketClient {
    /// Connect, retrying until the server accepts or `timeout` elapses.
    pub async fn connect_retry(
        url: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let start = tokio::time::Instant::now();
        loop {
            match connect_async(url).await {
                Ok((stream, _)) => return Ok(Self { stream }),
                Err(err) => {
                    if start.elapsed() >= timeout {
                        return Err(Box::new(err));
                    }
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
        }
    }

    /// Next text frame as JSON, or `Closed`. Pings and pongs are skipped.
    pub async fn next_frame(
        &mut self,
        timeout: Duration,
    ) -> Result<Frame, Box<dyn std::error::Error>> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let next = tokio::time::timeout_at(deadline, self.stream.next())
                .await
                .map_err(|_| "timeout waiting for frame")?;
            match next {
                None | Some(Ok(Message::Close(_))) => return Ok(Frame::Closed),
                Some(Ok(Message::Text(text))) => {
                    return Ok(Frame::Json(serde_json::from_str(text.as_str())?))
                }
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(Box::new(err)),
            }
        }
    }

    /// Next JSON frame; a close is an error.
    pub async fn recv_json(&mut self, timeout: Duration) -> Result<Value, Box<dyn std::error::Error>> {
        match self.next_frame(timeout).await? {
            Frame::Json(value) => Ok(value),
            Frame::Closed => Err("socket closed".into()),
        }
    }

    pub async fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.close(None).await?;
        Ok(())
    }
}
