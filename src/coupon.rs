//! Coupon fragment extraction.
//!
//! Cuts the visual ticket out of a confirmation email and wraps it in a
//! standalone page a headless renderer can screenshot. Unlike field
//! extraction this is all-or-nothing: without a fragment there is nothing
//! to render.

use crate::config::Config;
use crate::error::{LotteryError, Result};
use crate::types::CouponDocument;
use regex::{Regex, escape};
use std::sync::LazyLock;
use tracing::debug;

// Image proxy URLs carry the original after a `#`:
// https://ci3.googleusercontent.com/meips/ADKq...=s0-d-e1-ft#https://vendor/img.png
static PROXY_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)https?://[a-z0-9.-]*googleusercontent\.com/(?:proxy|meips)/[^"'\s>#]*#(https?://[^"'\s>)]+)"#,
    )
    .unwrap()
});

/// Extract the coupon fragment and wrap it as a renderable document
pub fn extract_coupon(html: &str, config: &Config) -> Result<CouponDocument> {
    let fragment = if let Some(fragment) = fragment_by_id(html, &config.coupon_id_marker)? {
        fragment
    } else {
        debug!(
            "No container with id containing {:?}, trying background {:?}",
            config.coupon_id_marker, config.coupon_background_asset
        );
        let cell = fragment_by_background(html, &config.coupon_background_asset)?
            .ok_or(LotteryError::CouponNotFound)?;
        format!(r#"<table cellpadding="0" cellspacing="0" border="0"><tr>{cell}</tr></table>"#)
    };

    let fragment = unproxy_image_urls(&fragment);
    debug!("Coupon fragment: {} bytes", fragment.len());

    Ok(CouponDocument {
        html: wrap_document(&fragment, config.coupon_width),
        width: config.coupon_width,
    })
}

/// Replace image-proxy URLs with the URL they proxy
#[must_use]
pub fn unproxy_image_urls(html: &str) -> String {
    PROXY_URL_REGEX.replace_all(html, "$1").into_owned()
}

fn fragment_by_id(html: &str, marker: &str) -> Result<Option<String>> {
    if marker.is_empty() {
        return Ok(None);
    }

    let open = Regex::new(&format!(
        r#"(?is)<([a-z][a-z0-9]*)\b[^>]*[\s"']id\s*=\s*["'][^"']*{}[^"']*["'][^>]*>"#,
        escape(marker)
    ))?;

    let Some(cap) = open.captures(html) else {
        return Ok(None);
    };
    let (Some(whole), Some(tag)) = (cap.get(0), cap.get(1)) else {
        return Ok(None);
    };

    balanced_element(html, whole.start(), whole.end(), tag.as_str())
}

fn fragment_by_background(html: &str, asset: &str) -> Result<Option<String>> {
    if asset.is_empty() {
        return Ok(None);
    }

    let open = Regex::new(&format!(
        r"(?is)<td\b[^>]*background[^>]*{}[^>]*>",
        escape(asset)
    ))?;

    let Some(found) = open.find(html) else {
        return Ok(None);
    };

    balanced_element(html, found.start(), found.end(), "td")
}

/// Slice from an opening tag to its matching close, counting nested
/// elements of the same name. `None` if the element is never closed.
fn balanced_element(
    html: &str,
    start: usize,
    open_end: usize,
    tag: &str,
) -> Result<Option<String>> {
    let tags = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", escape(tag)))?;

    let mut depth = 1usize;
    for cap in tags.captures_iter(&html[open_end..]) {
        let (Some(whole), Some(slash)) = (cap.get(0), cap.get(1)) else {
            continue;
        };

        if slash.as_str().is_empty() {
            if !whole.as_str().ends_with("/>") {
                depth += 1;
            }
        } else {
            depth -= 1;
            if depth == 0 {
                let end = open_end + whole.end();
                return Ok(Some(html[start..end].to_string()));
            }
        }
    }

    debug!("<{tag}> opened at {start} is never closed");
    Ok(None)
}

fn wrap_document(fragment: &str, width: u32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
body {{
  margin: 0; padding: 0; background: #ffffff;
  font-family: Arial, Helvetica, sans-serif; font-size: 14px;
}}
.coupon {{ width: {width}px; margin: 0 auto; }}
</style>
</head>
<body>
<div class="coupon">
{fragment}
</div>
</body>
</html>
"#
    )
}
