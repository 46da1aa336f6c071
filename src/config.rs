//! Injected settings: endpoints, addresses and vendor template markers

use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DRAWS_API_URL: &str = "https://euromillions.api.pedromealha.dev/v1/draws";
pub const DEFAULT_SENDER_ADDRESS: &str = "envios@loteriasyapuestas.es";
pub const DEFAULT_RESULTS_LINK: &str = "https://www.loteriasyapuestas.es/es/resultados";

/// Runtime configuration. Any field left out of a JSON override keeps its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Draw results feed, handed to the draw source
    pub draws_api_url: String,

    /// Sender of the ticket confirmation emails
    pub sender_address: String,

    /// Link appended to every draw message
    pub results_link: String,

    /// Substring of the coupon container's `id` attribute
    pub coupon_id_marker: String,

    /// Background image of the coupon cell, used when the id lookup fails
    pub coupon_background_asset: String,

    /// Width of the coupon container in the rendered document
    pub coupon_width: u32,

    /// Viewport handed to the renderer
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draws_api_url: DEFAULT_DRAWS_API_URL.to_string(),
            sender_address: DEFAULT_SENDER_ADDRESS.to_string(),
            results_link: DEFAULT_RESULTS_LINK.to_string(),
            coupon_id_marker: "resguardo".to_string(),
            coupon_background_asset: "bg_ticket.png".to_string(),
            coupon_width: 600,
            viewport_width: 640,
            viewport_height: 900,
        }
    }
}

impl Config {
    /// Load a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
