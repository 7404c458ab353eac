// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inview Scheduler: frame-phased read/write job batching.
//!
//! Interaction triggers occasionally need to measure geometry and then
//! mutate subscriptions based on what they measured. Doing both from inside
//! a signal callback interleaves reads and writes within one rendering
//! frame, which forces synchronous layout in DOM-like hosts. This crate
//! provides [`FrameQueue`], a small two-phase queue that coalesces such
//! work: jobs are enqueued from signal handlers and drained once per frame,
//! all reads strictly before all writes.
//!
//! The queue carries no binding identity. It is process-wide shared state
//! that consumers inject by `&mut`; each consumer re-validates its own
//! state inside the flush callbacks (a binding may have been removed
//! between enqueue and flush) rather than relying on the queue to filter.
//!
//! ## Minimal example
//!
//! ```rust
//! use inview_scheduler::FrameQueue;
//!
//! let mut frames: FrameQueue<&str, &str> = FrameQueue::new();
//!
//! frames.read("measure a");
//! frames.write("mutate b");
//! frames.read("measure c");
//!
//! let order = core::cell::RefCell::new(Vec::new());
//! frames.flush(
//!     |job, writes| {
//!         order.borrow_mut().push(job);
//!         // A read may schedule a follow-up write; it still runs after
//!         // every read in this flush.
//!         if job == "measure a" {
//!             writes.push("mutate from a");
//!         }
//!     },
//!     |job| order.borrow_mut().push(job),
//! );
//!
//! assert_eq!(
//!     order.into_inner(),
//!     vec!["measure a", "measure c", "mutate b", "mutate from a"]
//! );
//! ```
//!
//! Tests that want the synchronous behavior of a no-op scheduler simply
//! call [`FrameQueue::flush`] immediately after every signal.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod frame_queue;

pub use frame_queue::{FrameQueue, WriteBatch};
