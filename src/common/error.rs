// src/common/error.rs

// thiserror is used with default-features off, so this stays no_std.
#[derive(Debug, thiserror::Error)]
pub enum Max30100Error<E = ()>
where
    E: core::fmt::Debug, // Debug is all the `Bus` message needs
{
    /// The bus transport reported a failure (e.g. the device did not ACK).
    /// The transport's own error is carried unmodified.
    #[error("Bus error: {0:?}")]
    Bus(E),

    /// `probe` read a part ID other than the MAX30100's.
    #[error("Unexpected part ID: {0:#04x}")]
    UnexpectedPartId(u8),

    /// The diagnostic sink passed to `dump_registers` refused a write.
    #[error("Diagnostic output sink failed")]
    Format,

    /// A register bit pattern has no matching variant for the named field.
    #[error("Invalid bit pattern {bits:#04x} for {field}")]
    InvalidBits { field: &'static str, bits: u8 },
}

impl<E: core::fmt::Debug> Max30100Error<E> {
    /// Returns the transport error, if this is one.
    pub fn bus_error(&self) -> Option<&E> {
        match self {
            Max30100Error::Bus(e) => Some(e),
            _ => None,
        }
    }
}

impl<E: core::fmt::Debug> From<core::fmt::Error> for Max30100Error<E> {
    fn from(_: core::fmt::Error) -> Self {
        Max30100Error::Format
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct MockBusError;

    #[test]
    fn test_bus_error_accessor() {
        let err: Max30100Error<MockBusError> = Max30100Error::Bus(MockBusError);
        assert_eq!(err.bus_error(), Some(&MockBusError));

        let err: Max30100Error<MockBusError> = Max30100Error::UnexpectedPartId(0x15);
        assert_eq!(err.bus_error(), None);
    }

    #[test]
    fn test_fmt_error_maps_to_format() {
        let err: Max30100Error<MockBusError> = core::fmt::Error.into();
        assert!(matches!(err, Max30100Error::Format));
    }
}
