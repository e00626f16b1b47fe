use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Change types recorded by the external audit writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Update,
    Delete,
}

impl Action {
    /// Lowercase wire name, as stored in the `action` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

/// One change-log message, extracted from the `msg` field of a stored
/// log entry.
///
/// The variant is selected by the `action` field of the document; each
/// variant carries exactly the fields that action requires. Extra fields
/// in the document are ignored, missing ones fail deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Message {
    Add {
        time: String,
        user: String,
        model_name: String,
        fk: String,
        new_data: Document,
    },
    Update {
        time: String,
        user: String,
        model_name: String,
        pk: String,
        old_data: Document,
        new_data: Document,
    },
    Delete {
        time: String,
        user: String,
        model_name: String,
        pk: String,
        object_name: String,
    },
}

impl Message {
    pub fn action(&self) -> Action {
        match self {
            Message::Add { .. } => Action::Add,
            Message::Update { .. } => Action::Update,
            Message::Delete { .. } => Action::Delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document};

    #[test]
    fn add_message_deserializes() {
        let doc = doc! {
            "action": "add",
            "time": "2026-08-01 10:00:00",
            "user": "alice",
            "model_name": "Invoice",
            "fk": "42",
            "new_data": { "amount": 100 },
        };

        let msg: Message = from_document(doc).unwrap();
        assert_eq!(msg.action(), Action::Add);
        match msg {
            Message::Add { user, fk, new_data, .. } => {
                assert_eq!(user, "alice");
                assert_eq!(fk, "42");
                assert_eq!(new_data.get_i32("amount").unwrap(), 100);
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn update_message_carries_both_payloads() {
        let doc = doc! {
            "action": "update",
            "time": "t",
            "user": "bob",
            "model_name": "User",
            "pk": "7",
            "old_data": { "email": "old@x" },
            "new_data": { "email": "new@x" },
        };

        let msg: Message = from_document(doc).unwrap();
        match msg {
            Message::Update { old_data, new_data, .. } => {
                assert_eq!(old_data.get_str("email").unwrap(), "old@x");
                assert_eq!(new_data.get_str("email").unwrap(), "new@x");
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn delete_message_deserializes() {
        let doc = doc! {
            "action": "delete",
            "time": "t",
            "user": "carol",
            "model_name": "Order",
            "pk": "3",
            "object_name": "Order #3",
        };

        let msg: Message = from_document(doc).unwrap();
        assert_eq!(msg.action(), Action::Delete);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        // delete without object_name
        let doc = doc! {
            "action": "delete",
            "time": "t",
            "user": "carol",
            "model_name": "Order",
            "pk": "3",
        };

        assert!(from_document::<Message>(doc).is_err());
    }

    #[test]
    fn mistyped_field_is_an_error() {
        let doc = doc! {
            "action": "add",
            "time": "t",
            "user": "alice",
            "model_name": "Invoice",
            "fk": 42, // number where a string is expected
            "new_data": {},
        };

        assert!(from_document::<Message>(doc).is_err());
    }

    #[test]
    fn unknown_action_is_an_error() {
        let doc = doc! {
            "action": "archive",
            "time": "t",
            "user": "alice",
            "model_name": "Invoice",
        };

        assert!(from_document::<Message>(doc).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let doc = doc! {
            "action": "delete",
            "time": "t",
            "user": "carol",
            "model_name": "Order",
            "pk": "3",
            "object_name": "Order #3",
            "fk": "unused",
            "request_id": "abc-123",
        };

        assert!(from_document::<Message>(doc).is_ok());
    }
}
