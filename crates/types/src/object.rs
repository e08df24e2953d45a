use crate::ids::{GenNum, ObjNum, ObjectId};
use crate::value::{Dict, Value};

/// An indirect object ready to be written: its identifier, its value and
/// an optional stream payload.
///
/// The stream bytes are already encoded by the producer and are written
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRecord {
    id: ObjectId,
    value: Value,
    stream: Option<Vec<u8>>,
}

impl ObjectRecord {
    pub fn new(id: impl Into<ObjectId>, value: impl Into<Value>) -> Self {
        Self { id: id.into(), value: value.into(), stream: None }
    }

    /// Attaches a raw stream payload. The value is left untouched, so the
    /// caller is responsible for its `/Length` entry. An empty payload still
    /// gets an (empty) `stream`/`endstream` section.
    pub fn with_stream(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.stream = Some(payload.into());
        self
    }

    /// Builds a stream object, setting `/Length` in `dict` to the payload size.
    pub fn stream(id: impl Into<ObjectId>, dict: Dict, payload: impl Into<Vec<u8>>) -> Self {
        let payload = payload.into();
        let dict = dict.with("Length", payload.len());
        Self { id: id.into(), value: Value::Dict(dict), stream: Some(payload) }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn obj_num(&self) -> ObjNum {
        self.id.num
    }

    pub fn gen_num(&self) -> GenNum {
        self.id.generation
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn stream_payload(&self) -> Option<&[u8]> {
        self.stream.as_deref()
    }
}
