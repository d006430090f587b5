//! Response envelopes.
//!
//! Every resource comes back as `{ "id", "type", "attributes" }`. The `type`
//! literal is tied to the attribute record through [`ResourceKind`], so a
//! `Resource<PaymentIntentAttributes>` only deserializes from a document whose
//! `type` is `"payment_intent"`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Unexpected};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Attribute record of a resource kind, bound to the kind's `type` literal.
pub trait ResourceKind {
    /// The literal the API puts in the envelope's `type` field.
    const TYPE: &'static str;
}

/// The `type` tag of a [`Resource`].
///
/// Zero-sized; it serializes as `A::TYPE` and rejects any other literal.
pub struct Kind<A>(PhantomData<fn() -> A>);

impl<A: ResourceKind> Kind<A> {
    /// The tag literal.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        A::TYPE
    }
}

impl<A> Default for Kind<A> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<A> Clone for Kind<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Kind<A> {}

impl<A> PartialEq for Kind<A> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<A> Eq for Kind<A> {}

impl<A: ResourceKind> fmt::Debug for Kind<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(A::TYPE)
    }
}

impl<A: ResourceKind> fmt::Display for Kind<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(A::TYPE)
    }
}

impl<A: ResourceKind> Serialize for Kind<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(A::TYPE)
    }
}

impl<'de, A: ResourceKind> Deserialize<'de> for Kind<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        if tag == A::TYPE {
            Ok(Self::default())
        } else {
            Err(de::Error::invalid_value(Unexpected::Str(&tag), &A::TYPE))
        }
    }
}

/// A single resource as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<A: ResourceKind> {
    /// Resource ID (e.g. `pi_...`, `cus_...`).
    pub id: String,
    /// Resource kind tag.
    #[serde(rename = "type")]
    pub kind: Kind<A>,
    /// Kind-specific attributes.
    pub attributes: A,
}

impl<A: ResourceKind> Resource<A> {
    /// Build a resource snapshot from its parts.
    #[must_use]
    pub fn new(id: impl Into<String>, attributes: A) -> Self {
        Self {
            id: id.into(),
            kind: Kind::default(),
            attributes,
        }
    }

    /// The `type` literal of this resource.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        A::TYPE
    }
}

/// `{ "data": ... }` wrapper around single-resource responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Wrapped value.
    pub data: T,
}

/// List response as it comes off the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<A: ResourceKind> {
    /// Page of resources, in server order.
    pub data: Vec<Resource<A>>,
    /// Whether another page follows.
    #[serde(default)]
    pub has_more: bool,
}

/// Unwrapped list page handed to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<A: ResourceKind> {
    /// Page of resources, in server order.
    pub items: Vec<Resource<A>>,
    /// Whether another page follows.
    pub has_more: bool,
}

impl<A: ResourceKind> ListResult<A> {
    /// ID of the last item, usable as the `after` cursor for the next page.
    #[must_use]
    pub fn last_id(&self) -> Option<&str> {
        self.items.last().map(|r| r.id.as_str())
    }

    /// Cursor for the next page, only when the server reported one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.last_id()
        } else {
            None
        }
    }
}

impl<A: ResourceKind> From<ListEnvelope<A>> for ListResult<A> {
    fn from(envelope: ListEnvelope<A>) -> Self {
        Self {
            items: envelope.data,
            has_more: envelope.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        size: i64,
    }

    impl ResourceKind for Widget {
        const TYPE: &'static str = "widget";
    }

    #[test]
    fn resource_deserializes_matching_tag() {
        let resource: Resource<Widget> = serde_json::from_value(json!({
            "id": "wd_1",
            "type": "widget",
            "attributes": { "size": 3 }
        }))
        .unwrap();

        assert_eq!(resource.id, "wd_1");
        assert_eq!(resource.type_name(), "widget");
        assert_eq!(resource.attributes.size, 3);
    }

    #[test]
    fn resource_rejects_foreign_tag() {
        let result: Result<Resource<Widget>, _> = serde_json::from_value(json!({
            "id": "wd_1",
            "type": "gadget",
            "attributes": { "size": 3 }
        }));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("gadget"), "unexpected error: {err}");
    }

    #[test]
    fn resource_serializes_tag() {
        let value = serde_json::to_value(Resource::new("wd_2", Widget { size: 1 })).unwrap();
        assert_eq!(value["type"], "widget");
        assert_eq!(value["attributes"]["size"], 1);
    }

    #[test]
    fn list_envelope_unwraps_and_reports_cursor() {
        let envelope: ListEnvelope<Widget> = serde_json::from_value(json!({
            "data": [
                { "id": "wd_3", "type": "widget", "attributes": { "size": 3 } },
                { "id": "wd_2", "type": "widget", "attributes": { "size": 2 } }
            ],
            "has_more": true
        }))
        .unwrap();

        let list = ListResult::from(envelope);
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].id, "wd_3");
        assert_eq!(list.next_cursor(), Some("wd_2"));
    }

    #[test]
    fn list_without_more_has_no_cursor() {
        let envelope: ListEnvelope<Widget> = serde_json::from_value(json!({
            "data": [{ "id": "wd_1", "type": "widget", "attributes": { "size": 1 } }]
        }))
        .unwrap();

        let list = ListResult::from(envelope);
        assert!(!list.has_more);
        assert_eq!(list.last_id(), Some("wd_1"));
        assert_eq!(list.next_cursor(), None);
    }
}
