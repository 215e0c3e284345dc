pub(crate) mod alpha;
pub(crate) mod interop;
pub(crate) mod options;
pub(crate) mod orchestrator;
