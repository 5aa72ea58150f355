use {
    std::{sync::Arc, thread},
    syncseq::sync_seq,
};

fn main() {
    // initialize the sequence with elements `1, 2, 3`
    let seq = Arc::new(sync_seq![1, 2, 3]);

    // single reads and writes lock and unlock on their own
    assert_eq!(seq.get(0), Ok(1));
    assert_eq!(seq.set(1, 20), Ok(2));
    assert!(seq.get(3).is_err());

    // many threads may append at once, none of the appends is lost
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let seq = Arc::clone(&seq);
            thread::spawn(move || seq.append(10 * t))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(seq.upper_bound(), 7);

    // hold the write lock to check and act in one step
    {
        let mut w = seq.write();
        if w.len() > 3 {
            w.truncate(3);
        }
    }
    assert_eq!(seq.snapshot_description(), "[1, 20, 3]");

    // hold the read lock for a consistent traversal
    let r = seq.read();
    assert_eq!(r.iter().sum::<i32>(), 24);
}
