use std::fs;
use std::path::PathBuf;
use std::thread;

use tracing::info;

use crate::error::{Error, Result};

/// One pending output: an already-encoded byte buffer and its destination.
/// Each request owns its bytes, so concurrent writes share no state.
#[derive(Debug)]
pub struct WriteRequest {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl WriteRequest {
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }
}

fn write_one(req: &WriteRequest) -> Result<()> {
    info!("saving image: {:?}", req.path);
    if let Some(parent) = req.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&req.path, &req.bytes)?;
    Ok(())
}

/// Persist all requests concurrently, one thread per output, and join.
/// Returns the first failure after every write has finished; no ordering
/// between writes is guaranteed.
pub fn write_all(requests: Vec<WriteRequest>) -> Result<()> {
    thread::scope(|scope| {
        let handles: Vec<_> = requests
            .iter()
            .map(|req| scope.spawn(move || write_one(req)))
            .collect();

        let mut first_err = None;
        for handle in handles {
            let outcome = handle
                .join()
                .unwrap_or_else(|_| Err(Error::Processing("write task panicked".into())));
            if let Err(e) = outcome {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_all_requests_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("out/a.bin");
        let b = dir.path().join("out/nested/b.bin");
        write_all(vec![
            WriteRequest::new(&a, vec![1, 2, 3]),
            WriteRequest::new(&b, vec![4, 5]),
        ])
        .unwrap();
        assert_eq!(fs::read(&a).unwrap(), vec![1, 2, 3]);
        assert_eq!(fs::read(&b).unwrap(), vec![4, 5]);
    }

    #[test]
    fn surfaces_a_failure_after_joining() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.bin");
        // A destination whose parent is a regular file cannot be created.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file").unwrap();
        let bad = blocker.join("child.bin");

        let err = write_all(vec![
            WriteRequest::new(&good, vec![9]),
            WriteRequest::new(&bad, vec![9]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        // The independent good write still completed.
        assert_eq!(fs::read(&good).unwrap(), vec![9]);
    }

    #[test]
    fn empty_request_list_is_a_noop() {
        write_all(Vec::new()).unwrap();
    }
}
