use serde_json::{json, Value};

/// One result entry in the mapping API's text-search response shape
pub fn search_result(
    external_id: &str,
    name: &str,
    address: &str,
    lat: f64,
    lng: f64,
    types: &[&str],
) -> Value {
    json!({
        "place_id": external_id,
        "name": name,
        "formatted_address": address,
        "location": { "lat": lat, "lng": lng },
        "types": types,
        "phone": null,
        "website": null,
    })
}

pub fn search_response(results: Vec<Value>) -> Value {
    json!({ "results": results })
}

pub fn details_response(result: Value) -> Value {
    json!({ "result": result })
}

/// Chat-completion response shape returned by the LLM API
pub fn completion_response(content: &str) -> Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}
