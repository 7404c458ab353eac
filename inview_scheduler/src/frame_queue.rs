// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-phase frame queue.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Write jobs produced by read jobs during a flush.
///
/// Handed to the read callback of [`FrameQueue::flush`] so a measurement
/// can schedule the mutation it decided on. Jobs pushed here run in the
/// same flush, after every read.
#[derive(Debug)]
pub struct WriteBatch<W> {
    jobs: Vec<W>,
}

impl<W> WriteBatch<W> {
    /// Schedules a write job for the write phase of the current flush.
    pub fn push(&mut self, job: W) {
        self.jobs.push(job);
    }
}

/// A two-phase queue of frame-aligned jobs: reads run before writes.
///
/// `R` is the read (measure) job type and `W` the write (mutate) job type;
/// both are plain data chosen by the consumer. The host drives
/// [`flush`](Self::flush) once per frame.
///
/// Jobs within a phase run in FIFO order. Across phases the ordering
/// guarantee is the whole point: every read queued before the flush, plus
/// nothing else, runs before the first write.
#[derive(Debug)]
pub struct FrameQueue<R, W> {
    reads: VecDeque<R>,
    writes: VecDeque<W>,
}

impl<R, W> Default for FrameQueue<R, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> FrameQueue<R, W> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reads: VecDeque::new(),
            writes: VecDeque::new(),
        }
    }

    /// Enqueues a read (measure) job for the next flush.
    pub fn read(&mut self, job: R) {
        self.reads.push_back(job);
    }

    /// Enqueues a write (mutate) job for the next flush.
    pub fn write(&mut self, job: W) {
        self.writes.push_back(job);
    }

    /// Returns the number of pending jobs in both phases.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.reads.len() + self.writes.len()
    }

    /// Returns `true` if no jobs are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty() && self.writes.is_empty()
    }

    /// Drops all pending jobs without running them.
    pub fn clear(&mut self) {
        self.reads.clear();
        self.writes.clear();
    }

    /// Takes every pending read job, leaving the read phase empty.
    ///
    /// For consumers whose processing state cannot be split across two
    /// closures: take the reads, process them (enqueueing any follow-up
    /// writes with [`write`](Self::write)), then take and process the
    /// writes. Processing all taken reads before calling
    /// [`take_writes`](Self::take_writes) preserves the reads-before-writes
    /// guarantee.
    #[must_use]
    pub fn take_reads(&mut self) -> VecDeque<R> {
        core::mem::take(&mut self.reads)
    }

    /// Takes every pending write job, leaving the write phase empty.
    #[must_use]
    pub fn take_writes(&mut self) -> VecDeque<W> {
        core::mem::take(&mut self.writes)
    }

    /// Runs all pending reads, then all pending writes.
    ///
    /// The read callback receives a [`WriteBatch`] so measurements can
    /// schedule follow-up mutations; those run in this flush's write phase,
    /// after directly-queued writes.
    pub fn flush(
        &mut self,
        mut on_read: impl FnMut(R, &mut WriteBatch<W>),
        mut on_write: impl FnMut(W),
    ) {
        let reads = self.take_reads();
        let mut writes = self.take_writes();

        let mut batch = WriteBatch { jobs: Vec::new() };
        for job in reads {
            on_read(job, &mut batch);
        }
        writes.extend(batch.jobs);

        for job in writes {
            on_write(job);
        }
    }
}
