use mongodb::bson::{Bson, Document};
use mongodb::results::InsertOneResult;
use serde::Serialize;
use serde_json::Value;

/// Insert acknowledgment in the shape the store's own driver reports:
/// `{"acknowledged": true, "insertedId": <id>}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Value,
}

impl From<InsertOneResult> for InsertAck {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: bson_to_json(result.inserted_id),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCount {
    pub delete_count: u64,
}

#[derive(Debug, Serialize)]
pub struct TaskDeleted {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdated {
    pub message: String,
    pub task_id: String,
}

/// Render a stored document as plain JSON, with ObjectIds as their 24-char
/// hex strings rather than extended-JSON `{"$oid": ...}` wrappers.
pub fn document_to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => serde_json::to_value(&other).unwrap_or(Value::Null),
    }
}
