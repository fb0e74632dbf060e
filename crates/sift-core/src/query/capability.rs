/// Capabilities a query object declares at construction time.
///
/// Consumers check these once, up front, instead of probing per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// The query exposes an out-of-band hint table.
    pub hint_attachment: bool,

    /// WHERE fragments can be appended incrementally.
    pub incremental_append: bool,
}
