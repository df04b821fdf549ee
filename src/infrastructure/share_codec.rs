// Shareable layout link codec
//
// A layout travels between clients as an opaque URL-safe token: the layout
// wrapped in a typed JSON envelope, base64-encoded with the URL-safe
// alphabet so it can sit in a query parameter unescaped.
use crate::domain::layout::Layout;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

const SHARE_PAYLOAD_TYPE: &str = "dashboard-layout";

#[derive(Serialize, Deserialize)]
struct ShareEnvelope {
    #[serde(rename = "type")]
    payload_type: String,
    layout: Layout,
}

/// Encode a layout as a URL-safe share token.
pub fn encode_layout(layout: &Layout) -> String {
    let envelope = ShareEnvelope {
        payload_type: SHARE_PAYLOAD_TYPE.to_string(),
        layout: layout.clone(),
    };

    let json = match serde_json::to_vec(&envelope) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!("failed to serialize share envelope: {}", err);
            return String::new();
        }
    };
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a share token back into a layout. Malformed tokens of any kind
/// (bad base64, bad JSON, wrong envelope type, invalid layout) yield None.
pub fn decode_layout(token: &str) -> Option<Layout> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim()).ok()?;
    let envelope: ShareEnvelope = serde_json::from_slice(&bytes).ok()?;

    if envelope.payload_type != SHARE_PAYLOAD_TYPE {
        tracing::debug!("rejecting share token of type {:?}", envelope.payload_type);
        return None;
    }
    if let Err(err) = envelope.layout.validate() {
        tracing::debug!("rejecting share token with invalid layout: {}", err);
        return None;
    }
    Some(envelope.layout)
}

/// Build the copyable link for a layout.
pub fn share_url(origin: &str, layout: &Layout) -> String {
    format!(
        "{}?layout={}",
        origin.trim_end_matches('/'),
        encode_layout(layout)
    )
}
