//! Writer-preference access gate for the alias directory.
//!
//! The gate owns the directory store and is the only way to reach it. Readers
//! share access, writers get it exclusively, and every write admitted by the
//! gate holds back *new* readers until it has finished:
//!
//! 1. [`WriterPreferenceGate::acquire_write`] bumps the pending-write counter,
//!    then queues for the exclusive lock.
//! 2. [`WriterPreferenceGate::acquire_read`] waits for the counter to reach
//!    zero, then takes the shared lock.
//! 3. Dropping a [`WriteTicket`] releases the exclusive lock and then
//!    decrements the counter; the counter's watch channel wakes every waiting
//!    reader once it is back at zero.
//!
//! Reads that already hold a ticket are never revoked. The barrier is checked
//! once at entry, so a continuous stream of writes can still delay readers.
//!
//! Acquisition futures are cancel-safe: dropping an `acquire_write` future
//! before the lock is granted still returns the counter to its prior value.

use std::fmt;
use std::ops::{Deref, DerefMut};

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard, watch};
use tracing::trace;

/// Coordinates shared and exclusive access to a value of type `T`.
pub struct WriterPreferenceGate<T> {
    directory: RwLock<T>,
    pending_writes: watch::Sender<usize>,
}

impl<T> WriterPreferenceGate<T> {
    /// Wraps `directory`; from here on it is reachable only through tickets.
    pub fn new(directory: T) -> Self {
        let (pending_writes, _) = watch::channel(0);
        Self {
            directory: RwLock::new(directory),
            pending_writes,
        }
    }

    /// Waits until no write is pending, then takes shared access.
    pub async fn acquire_read(&self) -> ReadTicket<'_, T> {
        let mut pending = self.pending_writes.subscribe();
        while *pending.borrow_and_update() > 0 {
            trace!("read waiting for pending writes");
            // The sender lives as long as `self`; an error cannot happen here.
            if pending.changed().await.is_err() {
                break;
            }
        }

        ReadTicket {
            guard: self.directory.read().await,
        }
    }

    /// Announces a pending write, then takes exclusive access.
    pub async fn acquire_write(&self) -> WriteTicket<'_, T> {
        let pending = PendingWrite::admit(&self.pending_writes);
        let guard = self.directory.write().await;

        WriteTicket {
            guard,
            _pending: pending,
        }
    }

    /// Number of writes admitted but not yet finished.
    pub fn pending_writes(&self) -> usize {
        *self.pending_writes.borrow()
    }

}

impl<T> fmt::Debug for WriterPreferenceGate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterPreferenceGate")
            .field("pending_writes", &self.pending_writes())
            .finish_non_exhaustive()
    }
}

/// One admitted write. Decrements the counter exactly once, on drop.
struct PendingWrite<'a> {
    counter: &'a watch::Sender<usize>,
}

impl<'a> PendingWrite<'a> {
    fn admit(counter: &'a watch::Sender<usize>) -> Self {
        counter.send_modify(|count| *count += 1);
        Self { counter }
    }
}

impl Drop for PendingWrite<'_> {
    fn drop(&mut self) {
        self.counter.send_modify(|count| {
            debug_assert!(*count > 0, "pending write counter underflow");
            *count = count.saturating_sub(1);
        });
    }
}

/// Shared access to the directory. Released on drop.
pub struct ReadTicket<'a, T> {
    guard: RwLockReadGuard<'a, T>,
}

impl<T> Deref for ReadTicket<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

/// Exclusive access to the directory.
///
/// Field order matters: the lock guard is dropped before the pending-write
/// marker, so the exclusive lock is released before readers are let in.
pub struct WriteTicket<'a, T> {
    guard: RwLockWriteGuard<'a, T>,
    _pending: PendingWrite<'a>,
}

impl<T> Deref for WriteTicket<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for WriteTicket<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    const SETTLE: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn test_readers_share_access() {
        let gate = WriterPreferenceGate::new(vec![1, 2, 3]);

        let first = gate.acquire_read().await;
        let second = gate.acquire_read().await;

        assert_eq!(first.len(), 3);
        assert_eq!(*second, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_write_ticket_mutates_and_restores_counter() {
        let gate = WriterPreferenceGate::new(Vec::<u32>::new());

        {
            let mut ticket = gate.acquire_write().await;
            assert_eq!(gate.pending_writes(), 1);
            ticket.push(7);
        }

        assert_eq!(gate.pending_writes(), 0);
        assert_eq!(*gate.acquire_read().await, vec![7]);
    }

    #[tokio::test]
    async fn test_new_reader_waits_for_pending_write() {
        let gate = Arc::new(WriterPreferenceGate::new(0u32));
        let mut ticket = gate.acquire_write().await;

        let reader_gate = gate.clone();
        let reader = tokio::spawn(async move {
            let value = *reader_gate.acquire_read().await;
            value
        });

        sleep(SETTLE).await;
        assert!(!reader.is_finished());

        *ticket = 42;
        drop(ticket);

        assert_eq!(reader.await.unwrap(), 42);
        assert_eq!(gate.pending_writes(), 0);
    }

    #[tokio::test]
    async fn test_started_read_is_not_revoked() {
        let gate = Arc::new(WriterPreferenceGate::new(String::from("before")));
        let held = gate.acquire_read().await;

        let writer_gate = gate.clone();
        let writer = tokio::spawn(async move {
            let mut ticket = writer_gate.acquire_write().await;
            ticket.push_str("+after");
        });

        sleep(SETTLE).await;
        // The writer is admitted but blocked behind the held read.
        assert_eq!(gate.pending_writes(), 1);
        assert!(!writer.is_finished());
        assert_eq!(held.as_str(), "before");

        // A new reader must not jump ahead of the admitted writer.
        let late = timeout(SETTLE, gate.acquire_read()).await;
        assert!(late.is_err());

        drop(held);
        writer.await.unwrap();

        assert_eq!(gate.acquire_read().await.as_str(), "before+after");
        assert_eq!(gate.pending_writes(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_write_restores_counter() {
        let gate = WriterPreferenceGate::new(());
        let held = gate.acquire_read().await;

        let attempt = timeout(SETTLE, gate.acquire_write()).await;
        assert!(attempt.is_err());
        assert_eq!(gate.pending_writes(), 0);

        drop(held);
        // Readers are not held back by the abandoned write.
        let _ticket = timeout(SETTLE, gate.acquire_read())
            .await
            .expect("read should not wait");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_writes_are_exclusive() {
        let gate = Arc::new(WriterPreferenceGate::new((0u64, 0u64)));

        let tasks: Vec<_> = (0..32)
            .map(|_| {
                let gate = gate.clone();
                tokio::spawn(async move {
                    for _ in 0..50 {
                        let mut ticket = gate.acquire_write().await;
                        let (a, b) = *ticket;
                        // Both halves move together; a torn write would split them.
                        ticket.0 = a + 1;
                        tokio::task::yield_now().await;
                        ticket.1 = b + 1;
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..8)
            .map(|_| {
                let gate = gate.clone();
                tokio::spawn(async move {
                    for _ in 0..50 {
                        let ticket = gate.acquire_read().await;
                        assert_eq!(ticket.0, ticket.1);
                    }
                })
            })
            .collect();

        for task in tasks.into_iter().chain(readers) {
            task.await.unwrap();
        }

        assert_eq!(*gate.acquire_read().await, (1600, 1600));
        assert_eq!(gate.pending_writes(), 0);
    }
}
