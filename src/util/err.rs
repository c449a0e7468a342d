/// Converts errors from their error type (of the submodule) to that of
/// a `rendezvous::Error` variant, or of another module's error enum.
///
/// ```rust,ignore
/// use rendezvous::trajectory::IngestError;
/// rendezvous::impl_err!(IngestError, Ingest);
///
/// use rendezvous::geo::GeoError;
/// rendezvous::impl_err!(GeoError, MatchError, Geo);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $variant:ident) => {
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        };
        ($from:ty, $to:ident, $variant:ident) => {
            impl From<$from> for $to {
                fn from(value: $from) -> Self {
                    $to::$variant(value)
                }
            }
        };
    }

    pub use impl_err;
}
