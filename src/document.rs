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

use crate::cli::Cli;
use crate::errors::BuildError;
use crate::normalize::emit_field;
use crate::schema::{FIELDS, FieldKey};

// contact and expires must both be usable before anything is normalized.
fn ensure_required(flags: &Cli) -> Result<(), BuildError> {
    if flags.values(FieldKey::Contact).present().is_empty() {
        Err(BuildError::MissingRequiredField(FieldKey::Contact.flag()))
    } else if flags.values(FieldKey::Expires).present().is_empty() {
        Err(BuildError::MissingRequiredField(FieldKey::Expires.flag()))
    } else {
        Ok(())
    }
}

/// Build the complete security.txt document. Fields come out in schema order
/// no matter how the flags were ordered on the command line; fields with no
/// usable values are left out entirely rather than emitted blank.
pub fn render(flags: &Cli, now: DateTime<Utc>) -> Result<String, BuildError> {
    ensure_required(flags)?;

    let mut lines = Vec::new();
    for spec in FIELDS.iter() {
        emit_field(spec, flags.values(spec.key), now, &mut lines)?;
    }
    Ok(lines.join("\n"))
}
