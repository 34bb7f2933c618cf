//! Wire DTOs for the remote assistant endpoint.
//!
//! DESIGN
//! ======
//! These types mirror the assistant's response envelope so serde does the
//! structural validation and rendering code stays schema-driven. Numeric
//! fields tolerate string encodings because storefront backends disagree on
//! how they serialize ids and prices.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level envelope returned by `POST {backend_url}/api/chat`.
///
/// A reply is only treated as valid when `success` is `true` **and**
/// `response.message` is present; everything else is a failure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatEnvelope {
    /// Whether the backend handled the message.
    #[serde(default)]
    pub success: bool,
    /// Structured reply payload, present on success.
    #[serde(default)]
    pub response: Option<ReplyBody>,
    /// Backend-reported failure description. Logged, never rendered.
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply payload inside a successful envelope.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReplyBody {
    /// Assistant reply text.
    #[serde(default)]
    pub message: Option<String>,
    /// Optional reply classification tag; rendering does not depend on it.
    #[serde(rename = "type", default)]
    pub reply_type: Option<String>,
    /// Single highlighted product.
    #[serde(default)]
    pub product: Option<Product>,
    /// Ordered product recommendations.
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

/// A product reference owned by the remote store. Read-only here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store product identifier; some backends send it as a number.
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub id: String,
    /// Display title (`title`, or legacy `name`, on the wire).
    #[serde(alias = "name")]
    pub title: String,
    /// Unit price; accepts numbers or numeric strings.
    #[serde(deserialize_with = "deserialize_f64_from_value")]
    pub price: f64,
    /// Optional short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional feature highlights.
    #[serde(default)]
    pub features: Vec<String>,
}

/// A validated assistant reply, ready to append to the session log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssistantReply {
    /// Reply text shown in the assistant bubble.
    pub text: String,
    /// Single attached product, if any.
    pub product: Option<Product>,
    /// Attached product list; empty means none.
    pub products: Vec<Product>,
}

fn deserialize_string_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_f64_from_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .filter(|float| float.is_finite())
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|float| float.is_finite())
            .ok_or_else(|| D::Error::custom("expected numeric string")),
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}
