/// Generates the conversions from module errors into variants of
/// [`stoplink::Error`](crate::Error), so that `?` lifts them.
///
/// ```rust,ignore
/// stoplink::impl_err! {
///     GtfsError => Gtfs,
///     DumpError => Dump,
/// }
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($($from:ty => $variant:ident),+ $(,)?) => {
            $(
                impl From<$from> for $crate::Error {
                    fn from(value: $from) -> Self {
                        $crate::Error::$variant(value)
                    }
                }
            )+
        };
    }

    pub use impl_err;
}
