//! The result sink: where output records go, one per handled action.

use serde::Serialize;
use std::io;

/// One output record: the originating action id plus the free-form status
/// or value payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutput {
    pub id: u32,
    pub message: String,
}

/// Receives output records in action order.
///
/// An `Err` from `emit` is an I/O fault and aborts the run; domain-level
/// failures never surface here (they are ordinary records).
pub trait ResultSink {
    fn emit(&mut self, output: ActionOutput) -> io::Result<()>;
}

/// Collects outputs in memory; the binary serializes the collected records
/// at the end of the run, and tests assert on them directly.
#[derive(Debug, Default)]
pub struct VecSink {
    pub outputs: Vec<ActionOutput>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for VecSink {
    fn emit(&mut self, output: ActionOutput) -> io::Result<()> {
        self.outputs.push(output);
        Ok(())
    }
}
