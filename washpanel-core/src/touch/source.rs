//! Touch sample source

pub use washpanel_protocol::RawTouch as TouchSample;

/// Why a sample could not be read
///
/// Every variant is transient: the caller drops the sample and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadFailure {
    /// Nothing was queued when the read happened
    Empty,
    /// The report could not be decoded
    Corrupt,
    /// Bus or link error while reading
    Bus,
}

/// Source of raw touch samples
///
/// The sequence is lazy and restartable: `pending` may become true again
/// at any time after it returned false.
pub trait TouchSource {
    /// A sample is waiting to be read
    fn pending(&self) -> bool;

    /// Read the next sample, consuming it even when decoding fails
    fn read(&mut self) -> Result<TouchSample, ReadFailure>;
}
