use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::config::enums::wire_encoding::WireEncoding;
use crate::config::structs::tcp_server_config::TcpServerConfig;
use crate::protocol::enums::wire_error::WireError;
use crate::protocol::structs::wire_codec::WireCodec;

const FRAME_HEADER_SIZE: usize = 4;

impl WireCodec {
    pub fn new(encoding: WireEncoding, max_frame_size: u32) -> WireCodec
    {
        WireCodec {
            encoding,
            max_frame_size,
        }
    }

    pub fn from_config(config: &TcpServerConfig) -> WireCodec
    {
        WireCodec::new(config.encoding, config.max_frame_size)
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, WireError>
    {
        match self.encoding {
            WireEncoding::msgpack => rmp_serde::to_vec(value)
                .map_err(|e| WireError::Encode(e.to_string())),
            WireEncoding::json => serde_json::to_vec(value)
                .map_err(|e| WireError::Encode(e.to_string())),
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, WireError>
    {
        match self.encoding {
            WireEncoding::msgpack => rmp_serde::from_slice(data)
                .map_err(|e| WireError::Decode(e.to_string())),
            WireEncoding::json => serde_json::from_slice(data)
                .map_err(|e| WireError::Decode(e.to_string())),
        }
    }

    /// Reads one frame body.
    ///
    /// `Ok(None)` means the stream ended cleanly before the first header byte; an end
    /// of stream anywhere later is `WireError::UnexpectedEof`.
    pub async fn read_frame<R: AsyncRead + Unpin>(&self, reader: &mut R) -> Result<Option<Vec<u8>>, WireError>
    {
        let mut header = [0u8; FRAME_HEADER_SIZE];
        let mut filled = 0;
        while filled < FRAME_HEADER_SIZE {
            let read = reader.read(&mut header[filled..]).await?;
            if read == 0 {
                if filled == 0 {
                    return Ok(None);
                }
                return Err(WireError::UnexpectedEof);
            }
            filled += read;
        }

        let size = u32::from_be_bytes(header);
        if size > self.max_frame_size {
            return Err(WireError::FrameTooLarge { size: size as u64, max: self.max_frame_size });
        }

        // Grows with the bytes actually received, not with the announced size.
        let mut body = Vec::new();
        (&mut *reader).take(u64::from(size)).read_to_end(&mut body).await?;
        if body.len() < size as usize {
            return Err(WireError::UnexpectedEof);
        }
        Ok(Some(body))
    }

    pub async fn write_frame<W: AsyncWrite + Unpin>(&self, writer: &mut W, body: &[u8]) -> Result<(), WireError>
    {
        let size = match u32::try_from(body.len()) {
            Ok(size) if size <= self.max_frame_size => size,
            _ => return Err(WireError::FrameTooLarge { size: body.len() as u64, max: self.max_frame_size }),
        };

        writer.write_u32(size).await?;
        writer.write_all(body).await?;
        writer.flush().await?;
        Ok(())
    }

    /// Reads and decodes one value, `Ok(None)` on a clean end of stream.
    pub async fn read_value<T: DeserializeOwned, R: AsyncRead + Unpin>(&self, reader: &mut R) -> Result<Option<T>, WireError>
    {
        match self.read_frame(reader).await? {
            None => Ok(None),
            Some(body) => self.decode(&body).map(Some),
        }
    }

    /// Like `read_value`, but a clean end of stream is an error.
    pub async fn expect_value<T: DeserializeOwned, R: AsyncRead + Unpin>(&self, reader: &mut R) -> Result<T, WireError>
    {
        self.read_value(reader).await?.ok_or(WireError::ConnectionClosed)
    }

    pub async fn write_value<T: Serialize + ?Sized, W: AsyncWrite + Unpin>(&self, writer: &mut W, value: &T) -> Result<(), WireError>
    {
        let body = self.encode(value)?;
        self.write_frame(writer, &body).await
    }

    /// Consumes one frame without decoding it, returning its length.
    pub async fn skip_frame<R: AsyncRead + Unpin>(&self, reader: &mut R) -> Result<usize, WireError>
    {
        match self.read_frame(reader).await? {
            None => Err(WireError::ConnectionClosed),
            Some(body) => Ok(body.len()),
        }
    }
}

impl Default for WireCodec {
    fn default() -> Self {
        WireCodec::new(WireEncoding::default(), crate::config::impls::configuration::DEFAULT_MAX_FRAME_SIZE)
    }
}
