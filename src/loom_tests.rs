//! Run with `RUSTFLAGS="--cfg loom" cargo test --lib --release`.

use {
    crate::SyncSeq,
    loom::{sync::Arc, thread},
};

#[test]
fn appends_not_lost() {
    loom::model(|| {
        let seq = Arc::new(SyncSeq::default());
        let other = Arc::clone(&seq);
        let handle = thread::spawn(move || other.append(1));
        seq.append(2);
        handle.join().unwrap();

        let mut elems = seq.snapshot();
        elems.sort_unstable();
        assert_eq!(elems, vec![1, 2]);
    });
}

#[test]
fn reader_sees_whole_write() {
    loom::model(|| {
        let seq = Arc::new(SyncSeq::filled(2, 0));
        let other = Arc::clone(&seq);
        let handle = thread::spawn(move || {
            let mut w = other.write();
            w[0] = 1;
            w[1] = 1;
        });
        {
            let r = seq.read();
            assert_eq!(r[0], r[1]);
        }
        handle.join().unwrap();
        assert_eq!(*seq, [1, 1]);
    });
}

#[test]
fn remove_races_with_get() {
    loom::model(|| {
        let seq = Arc::new(SyncSeq::new(vec![7]));
        let other = Arc::clone(&seq);
        let handle = thread::spawn(move || other.remove_at(0));
        // either the element is still there or the index is rejected
        match seq.get(0) {
            Ok(v) => assert_eq!(v, 7),
            Err(e) => assert_eq!(e.len, 0),
        }
        assert_eq!(handle.join().unwrap(), Ok(7));
        assert!(seq.is_empty());
    });
}

#[test]
fn iterate_while_removing() {
    loom::model(|| {
        let seq = Arc::new(SyncSeq::new(vec![1, 2]));
        let other = Arc::clone(&seq);
        let handle = thread::spawn(move || {
            let mut w = other.write();
            w.remove(0).unwrap();
            w[0] += 10;
        });
        // each step sees a whole state, before or after the writer, but the
        // writer may run between two steps
        let seen: Vec<_> = seq.iter().collect();
        assert!(
            [vec![1, 2], vec![1], vec![12]].contains(&seen),
            "{seen:?}"
        );
        handle.join().unwrap();
        assert_eq!(*seq, [12]);
    });
}
