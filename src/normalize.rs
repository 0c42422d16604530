/*
 * Copyright (c) 2025 William Stadtwald Demchick <william.demchick@gmail.com>
 *
 * Permission to use, copy, modify, and distribute this software for any
 * purpose with or without fee is hereby granted, provided that the above
 * copyright notice and this permission notice appear in all copies.
 *
 * THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
 * WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
 * MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
 * ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
 * WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
 * ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
 * OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
 */

use chrono::{DateTime, Utc};

use crate::errors::BuildError;
use crate::expiration::{Expiration, format_timestamp};
use crate::schema::{FieldSpec, FieldValues, Normalizer};

/// RFC 9116 wants contact URIs, but people pass bare e-mail addresses. A
/// value with an @ in it and no mailto: prefix gets one prepended; everything
/// else passes through untouched.
pub fn contact_uri(value: &str) -> String {
    if value.contains('@') && !value.starts_with("mailto:") {
        format!("mailto:{}", value)
    } else {
        value.to_owned()
    }
}

/// Append one field's output lines, applying the normalizer the schema entry
/// carries. Fields with nothing to say append nothing.
pub fn emit_field(spec: &FieldSpec, values: FieldValues<'_>, now: DateTime<Utc>, out: &mut Vec<String>) -> Result<(), BuildError> {
    match spec.normalizer {
        Normalizer::ContactUri =>
            for value in values.present() {
                out.push(format!("{}: {}", spec.label, contact_uri(value)));
            },
        Normalizer::Expiry => {
            let present = values.present();
            if let Some(raw) = present.first() {
                let expiration: Expiration = raw.parse()?;
                let instant = expiration.resolve(now)?;
                out.push(format!("{}: {}", spec.label, format_timestamp(instant)));
            }
        },
        Normalizer::LanguageList => {
            let present = values.present();
            if !present.is_empty() {
                out.push(format!("{}: {}", spec.label, present.join(", ")));
            }
        },
        Normalizer::Verbatim =>
            for value in values.present() {
                out.push(format!("{}: {}", spec.label, value));
            }
    }
    Ok(())
}
