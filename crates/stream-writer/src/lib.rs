//! Record consumers for stream-reader.
//!
//! Every type here implements [`stream_core::RecordConsumer`]:
//!
//! - [`JsonlWriter`] - one JSON array per record
//! - [`CsvRecordWriter`] - one CSV row per record
//! - [`CountingConsumer`] - counts and discards
//! - [`ChannelConsumer`] - bounded hand-off to another thread or task
//!
//! # Example
//!
//! ```rust
//! use stream_core::{ColumnValue, Record, RecordConsumer};
//! use stream_writer::JsonlWriter;
//!
//! let mut writer = JsonlWriter::new(Vec::new());
//! writer.send(&Record::from(vec![ColumnValue::Long(1)])).unwrap();
//! writer.flush().unwrap();
//! assert_eq!(writer.into_inner().unwrap(), b"[1]\n");
//! ```

pub mod channel;
pub mod convert;
pub mod counting;
pub mod csv_writer;
pub mod jsonl;

pub use channel::{record_channel, ChannelConsumer};
pub use convert::{to_csv_field, to_json_value};
pub use counting::CountingConsumer;
pub use csv_writer::CsvRecordWriter;
pub use jsonl::JsonlWriter;
