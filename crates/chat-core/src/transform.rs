//! Per-type payload shaping for display.
//!
//! Stored message payloads arrive as vendor JSON. Before they reach
//! the viewer, media URLs lose their signed query strings and a couple
//! of structured types (`contactMessage`, `locationMessage`) are
//! flattened into a stable shape. Every other type passes through
//! unchanged and the viewer picks a template by the type tag.

use serde_json::{json, Value};

/// Strip tracking/signing query parameters from embedded URLs.
///
/// Takes ownership of the payload (the caller's copy stays intact at
/// the row-store layer since rows are decoded fresh per request) and
/// truncates any string field that starts with `http` and contains a
/// `?` at the first `?`. Objects are visited recursively; array
/// elements are not visited, so URLs nested inside list sections keep
/// their query strings. That asymmetry matches the links this service
/// has always emitted and is kept deliberately.
pub fn strip_tracking_params(mut payload: Value) -> Value {
    visit(&mut payload);
    payload
}

fn visit(value: &mut Value) {
    if let Value::Object(map) = value {
        for field in map.values_mut() {
            match field {
                Value::Object(_) => visit(field),
                Value::String(s) => {
                    if s.starts_with("http") {
                        if let Some(idx) = s.find('?') {
                            s.truncate(idx);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// Normalize a payload for display, dispatching on the message type.
///
/// Returns `None` when the stored row had no payload. Unrecognized
/// types (plain text, media, lists, reactions, …) pass through
/// unchanged.
pub fn normalize(message_type: &str, payload: Option<Value>) -> Option<Value> {
    let payload = payload?;

    let normalized = match message_type {
        "contactMessage" => {
            let contact = payload.get("contactMessage");
            json!({
                "displayName": str_field(contact, "displayName"),
                "vcard": str_field(contact, "vcard"),
            })
        }
        "locationMessage" => {
            let location = payload.get("locationMessage");
            json!({
                "url": str_field(location, "url"),
                "name": str_field(location, "name"),
                "address": str_field(location, "address"),
                "latitude": num_field(location, "degreesLatitude"),
                "longitude": num_field(location, "degreesLongitude"),
                "jpegThumbnail": str_field(location, "jpegThumbnail"),
            })
        }
        _ => payload,
    };

    Some(normalized)
}

fn str_field(obj: Option<&Value>, field: &str) -> String {
    obj.and_then(|o| o.get(field))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn num_field(obj: Option<&Value>, field: &str) -> Value {
    obj.and_then(|o| o.get(field))
        .filter(|v| v.is_number())
        .cloned()
        .unwrap_or_else(|| json!(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_query_string_from_http_urls() {
        let cleaned = strip_tracking_params(json!({
            "url": "http://x/y?a=1&sig=abc",
        }));
        assert_eq!(cleaned, json!({"url": "http://x/y"}));
    }

    #[test]
    fn strips_nested_object_urls() {
        let cleaned = strip_tracking_params(json!({
            "imageMessage": {
                "mediaUrl": "https://cdn.example/img.jpg?token=1",
                "caption": "foto",
            }
        }));
        assert_eq!(
            cleaned["imageMessage"]["mediaUrl"],
            "https://cdn.example/img.jpg"
        );
        assert_eq!(cleaned["imageMessage"]["caption"], "foto");
    }

    #[test]
    fn leaves_non_url_strings_alone() {
        let payload = json!({
            "text": "what? really?",
            "ftp": "ftp://host/file?x=1",
            "plain": "http://no-query.example/path",
        });
        assert_eq!(strip_tracking_params(payload.clone()), payload);
    }

    #[test]
    fn leaves_non_string_values_alone() {
        let payload = json!({"n": 3, "b": true, "nil": null});
        assert_eq!(strip_tracking_params(payload.clone()), payload);
    }

    #[test]
    fn does_not_traverse_arrays() {
        // Long-standing quirk: URLs inside array elements survive.
        let payload = json!({
            "sections": [{"url": "http://x/y?a=1"}]
        });
        assert_eq!(strip_tracking_params(payload.clone()), payload);
    }

    #[test]
    fn strip_is_idempotent() {
        let payload = json!({
            "a": {"url": "http://x/y?a=1"},
            "b": "https://z/w?s=2",
            "c": [1, 2, 3],
        });
        let once = strip_tracking_params(payload);
        let twice = strip_tracking_params(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_absent_payload_is_none() {
        assert_eq!(normalize("conversation", None), None);
    }

    #[test]
    fn normalize_contact_defaults_to_empty_strings() {
        assert_eq!(
            normalize("contactMessage", Some(json!({}))),
            Some(json!({"displayName": "", "vcard": ""}))
        );
    }

    #[test]
    fn normalize_contact_extracts_fields() {
        let payload = json!({
            "contactMessage": {
                "displayName": "Maria",
                "vcard": "BEGIN:VCARD\nEND:VCARD",
                "contextInfo": {"x": 1},
            }
        });
        assert_eq!(
            normalize("contactMessage", Some(payload)),
            Some(json!({
                "displayName": "Maria",
                "vcard": "BEGIN:VCARD\nEND:VCARD",
            }))
        );
    }

    #[test]
    fn normalize_location_defaults_missing_fields() {
        let normalized = normalize(
            "locationMessage",
            Some(json!({"locationMessage": {"degreesLatitude": 10}})),
        )
        .unwrap();
        assert_eq!(normalized["latitude"], 10);
        assert_eq!(normalized["longitude"], 0);
        assert_eq!(normalized["url"], "");
        assert_eq!(normalized["jpegThumbnail"], "");
    }

    #[test]
    fn normalize_location_renames_coordinate_fields() {
        let normalized = normalize(
            "locationMessage",
            Some(json!({"locationMessage": {
                "url": "https://maps.example/p",
                "name": "Praça",
                "address": "Centro",
                "degreesLatitude": -23.55,
                "degreesLongitude": -46.63,
                "jpegThumbnail": "dGh1bWI=",
            }})),
        )
        .unwrap();
        assert_eq!(normalized["latitude"], -23.55);
        assert_eq!(normalized["longitude"], -46.63);
        assert_eq!(normalized["name"], "Praça");
        assert!(normalized.get("degreesLatitude").is_none());
    }

    #[test]
    fn normalize_passes_other_types_through() {
        let payload = json!({"conversation": "oi"});
        assert_eq!(
            normalize("conversation", Some(payload.clone())),
            Some(payload)
        );

        let media = json!({"imageMessage": {"mediaUrl": "http://x/y"}});
        assert_eq!(normalize("imageMessage", Some(media.clone())), Some(media));
    }
}
