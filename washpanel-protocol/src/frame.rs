//! Link framing
//!
//! A frame is `START LEN TYPE PAYLOAD CRC`. The CRC byte is the XOR of
//! `LEN`, `TYPE` and every payload byte, which is enough for a short
//! point-to-point cable and cheap to compute on both ends.

use heapless::Vec;

/// Synchronization byte that opens every frame
pub const FRAME_START: u8 = 0x7E;

/// Largest payload the link carries
pub const MAX_PAYLOAD: usize = 64;

/// START + LEN + TYPE + payload + CRC
pub const MAX_FRAME_LEN: usize = MAX_PAYLOAD + 4;

/// Framing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload does not fit in a frame
    PayloadTooLarge,
    /// CRC byte did not match the frame contents
    BadCrc,
    /// Length byte announced more than `MAX_PAYLOAD` bytes
    BadLength,
    /// Frame type or payload shape not understood
    Malformed,
    /// Output buffer too small for the encoded frame
    BufferTooSmall,
}

/// One link frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type byte
    pub kind: u8,
    /// Type-specific payload
    pub payload: Vec<u8, MAX_PAYLOAD>,
}

fn crc(len: u8, kind: u8, payload: &[u8]) -> u8 {
    payload.iter().fold(len ^ kind, |acc, b| acc ^ b)
}

impl Frame {
    /// Build a frame from a payload slice
    pub fn new(kind: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { kind, payload })
    }

    /// Build a frame without payload
    pub fn bare(kind: u8) -> Self {
        Self {
            kind,
            payload: Vec::new(),
        }
    }

    /// Number of bytes `encode` writes
    pub fn encoded_len(&self) -> usize {
        self.payload.len() + 4
    }

    /// Encode into `out`, returning the number of bytes written
    pub fn encode(&self, out: &mut [u8]) -> Result<usize, FrameError> {
        let n = self.encoded_len();
        if out.len() < n {
            return Err(FrameError::BufferTooSmall);
        }

        let len = self.payload.len() as u8;
        out[0] = FRAME_START;
        out[1] = len;
        out[2] = self.kind;
        out[3..3 + self.payload.len()].copy_from_slice(&self.payload);
        out[n - 1] = crc(len, self.kind, &self.payload);
        Ok(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Sync,
    Len,
    Kind,
    Payload,
    Crc,
}

/// Byte-at-a-time frame decoder
///
/// Bytes outside a frame are skipped until the next `FRAME_START`, so the
/// parser recovers on its own after line noise or a dropped byte.
#[derive(Debug, Clone)]
pub struct FrameParser {
    stage: Stage,
    len: u8,
    kind: u8,
    payload: Vec<u8, MAX_PAYLOAD>,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    pub const fn new() -> Self {
        Self {
            stage: Stage::Sync,
            len: 0,
            kind: 0,
            payload: Vec::new(),
        }
    }

    /// Drop any partial frame and wait for the next start byte
    pub fn reset(&mut self) {
        self.stage = Stage::Sync;
        self.len = 0;
        self.kind = 0;
        self.payload.clear();
    }

    /// Feed one byte
    ///
    /// Returns `Ok(Some(frame))` once a frame completes, `Ok(None)` while
    /// more bytes are needed.
    pub fn push(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.stage {
            Stage::Sync => {
                if byte == FRAME_START {
                    self.stage = Stage::Len;
                }
            }
            Stage::Len => {
                if byte as usize > MAX_PAYLOAD {
                    self.reset();
                    return Err(FrameError::BadLength);
                }
                self.len = byte;
                self.stage = Stage::Kind;
            }
            Stage::Kind => {
                self.kind = byte;
                self.payload.clear();
                self.stage = if self.len == 0 {
                    Stage::Crc
                } else {
                    Stage::Payload
                };
            }
            Stage::Payload => {
                // Length was bounded in Stage::Len
                let _ = self.payload.push(byte);
                if self.payload.len() == self.len as usize {
                    self.stage = Stage::Crc;
                }
            }
            Stage::Crc => {
                let ok = byte == crc(self.len, self.kind, &self.payload);
                let frame = Frame {
                    kind: self.kind,
                    payload: self.payload.clone(),
                };
                self.reset();
                return if ok {
                    Ok(Some(frame))
                } else {
                    Err(FrameError::BadCrc)
                };
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(parser: &mut FrameParser, bytes: &[u8]) -> Option<Frame> {
        let mut out = None;
        for &b in bytes {
            if let Ok(Some(f)) = parser.push(b) {
                out = Some(f);
            }
        }
        out
    }

    #[test]
    fn test_bare_frame_layout() {
        let mut buf = [0u8; 8];
        let n = Frame::bare(0x31).encode(&mut buf).unwrap();
        assert_eq!(n, 4);
        assert_eq!(&buf[..4], &[FRAME_START, 0, 0x31, 0x31]);
    }

    #[test]
    fn test_payload_frame_decodes() {
        let frame = Frame::new(0x01, &[7, 0x34, 0x12, 0x00, 0x08, 0x20]).unwrap();
        let mut buf = [0u8; MAX_FRAME_LEN];
        let n = frame.encode(&mut buf).unwrap();

        let mut parser = FrameParser::new();
        assert_eq!(decode_all(&mut parser, &buf[..n]), Some(frame));
    }

    #[test]
    fn test_noise_before_frame_is_skipped() {
        let mut buf = [0u8; 16];
        buf[..3].copy_from_slice(&[0x00, 0x55, 0xFF]);
        let n = Frame::bare(0x02).encode(&mut buf[3..]).unwrap();

        let mut parser = FrameParser::new();
        let frame = decode_all(&mut parser, &buf[..3 + n]).unwrap();
        assert_eq!(frame.kind, 0x02);
    }

    #[test]
    fn test_bad_crc_rejected() {
        let mut buf = [0u8; 8];
        let n = Frame::new(0x02, &[1]).unwrap().encode(&mut buf).unwrap();
        buf[n - 1] ^= 0x01;

        let mut parser = FrameParser::new();
        let mut result = Ok(None);
        for &b in &buf[..n] {
            result = parser.push(b);
        }
        assert_eq!(result, Err(FrameError::BadCrc));
    }

    #[test]
    fn test_oversize_length_rejected() {
        let mut parser = FrameParser::new();
        assert_eq!(parser.push(FRAME_START), Ok(None));
        assert_eq!(parser.push(MAX_PAYLOAD as u8 + 1), Err(FrameError::BadLength));
    }

    #[test]
    fn test_encode_into_short_buffer() {
        let frame = Frame::new(0x10, &[0; 10]).unwrap();
        let mut buf = [0u8; 8];
        assert_eq!(frame.encode(&mut buf), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_oversize_payload() {
        assert_eq!(
            Frame::new(0x10, &[0; MAX_PAYLOAD + 1]),
            Err(FrameError::PayloadTooLarge)
        );
    }

    proptest::proptest! {
        #[test]
        fn test_line_noise_never_yields_oversize_frame(
            noise in proptest::collection::vec(proptest::num::u8::ANY, 0..512)
        ) {
            let mut parser = FrameParser::new();
            for b in noise {
                if let Ok(Some(frame)) = parser.push(b) {
                    proptest::prop_assert!(frame.payload.len() <= MAX_PAYLOAD);
                }
            }
        }
    }
}
