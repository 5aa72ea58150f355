/// Creates a [`SyncSeq`](crate::SyncSeq) with the `vec!` syntax.
///
/// ```
/// use syncseq::sync_seq;
///
/// let empty: syncseq::SyncSeq<u8> = sync_seq![];
/// let listed = sync_seq![1, 2, 3];
/// let filled = sync_seq!["x"; 5];
///
/// assert!(empty.is_empty());
/// assert_eq!(listed, [1, 2, 3]);
/// assert_eq!(filled.upper_bound(), 5);
/// ```
#[macro_export]
macro_rules! sync_seq {
    () => {
        $crate::SyncSeq::new(::std::vec::Vec::new())
    };

    ($elem:expr ; $len:expr) => {
        $crate::SyncSeq::filled($len, $elem)
    };

    // this is last because everything can match this
    ($($elem:expr),+$(,)?) => {
        $crate::SyncSeq::from(::std::vec![$($elem),*])
    };
}
