/// A codec the container layer drives once per raw record.
///
/// The container walks its record directory and calls [`decode`] on each
/// record's bytes; a record that fails surfaces as its own `Err` and never
/// aborts decoding of its siblings. [`encode`] is the inverse and cannot
/// fail: invalid states are unrepresentable in the record type.
///
/// All methods take `&self`; codecs hold configuration, never per-record
/// state, so one codec may serve any number of records concurrently.
///
/// [`decode`]: RecordCodec::decode
/// [`encode`]: RecordCodec::encode
pub trait RecordCodec {
    type Record;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decodes one raw record buffer into its structured form.
    fn decode(&self, data: &[u8]) -> Result<Self::Record, Self::Error>;

    /// Re-serializes a record for writing back into the container.
    fn encode(&self, record: &Self::Record) -> Vec<u8>;
}

impl<C: RecordCodec> RecordCodec for &C {
    type Record = C::Record;
    type Error = C::Error;

    fn decode(&self, data: &[u8]) -> Result<Self::Record, Self::Error> {
        (*self).decode(data)
    }

    fn encode(&self, record: &Self::Record) -> Vec<u8> {
        (*self).encode(record)
    }
}
