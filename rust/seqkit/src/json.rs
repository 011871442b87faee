//! JSON encoding of sequences.
//!
//! A present sequence encodes as an array and an absent one as `null`; decoding maps
//! `null` back to an absent sequence. Failures are reported as [`seqkit_common::Error`]:
//! a failing element's own message is kept verbatim, with the position `serde_json`
//! appends moved into separate fields.

use std::io;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use seqkit_common::{Result, error::Error};

use crate::Seq;

impl<T: Serialize> Serialize for Seq<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_absent() {
            serializer.serialize_none()
        } else {
            serializer.collect_seq(self.iter())
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Seq<'_, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<Vec<T>>::deserialize(deserializer).map(Seq::from)
    }
}

pub fn to_json<T: Serialize>(seq: &Seq<'_, T>) -> Result<String> {
    serde_json::to_string(seq).map_err(encode_error)
}

pub fn to_json_pretty<T: Serialize>(seq: &Seq<'_, T>) -> Result<String> {
    serde_json::to_string_pretty(seq).map_err(encode_error)
}

/// Writes the encoded sequence to `writer`. Write failures surface as
/// [`ErrorKind::Io`](seqkit_common::error::ErrorKind::Io).
pub fn to_writer<W, T>(writer: W, seq: &Seq<'_, T>) -> Result<()>
where
    W: io::Write,
    T: Serialize,
{
    serde_json::to_writer(writer, seq).map_err(encode_error)
}

pub fn to_value<T: Serialize>(seq: &Seq<'_, T>) -> Result<serde_json::Value> {
    serde_json::to_value(seq).map_err(encode_error)
}

/// Decodes a sequence from JSON text into owned storage.
pub fn from_json<'b, T>(text: &str) -> Result<Seq<'b, T>>
where
    T: DeserializeOwned + 'b,
{
    serde_json::from_str(text).map_err(|e| {
        if e.is_io() {
            return Error::io("decoding sequence", io::Error::from(e));
        }
        let (line, column) = (e.line(), e.column());
        Error::decode(bare_message(&e), line, column)
    })
}

fn encode_error(e: serde_json::Error) -> Error {
    if e.is_io() {
        log::trace!("sequence encoding failed writing output: {e}");
        return Error::io("encoding sequence", io::Error::from(e));
    }
    Error::encode(bare_message(&e))
}

/// The error text without the " at line L column C" suffix `serde_json` adds.
fn bare_message(e: &serde_json::Error) -> String {
    let text = e.to_string();
    if e.line() == 0 {
        return text;
    }
    let suffix = format!(" at line {} column {}", e.line(), e.column());
    match text.strip_suffix(&suffix) {
        Some(message) => message.to_string(),
        None => text,
    }
}
