//! Section parsing core: header vocabulary, line-stream segmentation, and
//! presentation formatting. Everything here is pure and synchronous; the
//! HTTP surface lives in `handlers`.

pub mod formatter;
pub mod handlers;
pub mod segmenter;
pub mod vocabulary;
