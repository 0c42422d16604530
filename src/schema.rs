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

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKey {
    Contact,
    Expires,
    Lang,
    Canonical,
    Encryption,
    Ack,
    Policy,
    Hiring,
    Csaf
}

impl FieldKey {
    /// The long flag name this field is set with on the command line
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Expires => "expires",
            Self::Lang => "lang",
            Self::Canonical => "canonical",
            Self::Encryption => "encryption",
            Self::Ack => "ack",
            Self::Policy => "policy",
            Self::Hiring => "hiring",
            Self::Csaf => "csaf"
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Multiplicity {
    Single,
    Multiple
}

/// How a field's raw flag values turn into output lines. Selected once per
/// field at schema definition time rather than dispatched on the field name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Normalizer {
    /// Rewrite bare e-mail addresses to mailto: URIs, one line per value
    ContactUri,

    /// Resolve a day count or absolute date-time to one timestamp line
    Expiry,

    /// Join all values into a single comma-separated line
    LanguageList,

    /// One line per value, unchanged
    Verbatim
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub label: &'static str,
    pub multiplicity: Multiplicity,
    pub short: char,
    pub normalizer: Normalizer
}

/// Every supported output field, in RFC 9116 emission order.
pub const FIELDS: [FieldSpec; 9] = [
    FieldSpec { key: FieldKey::Contact, label: "Contact", multiplicity: Multiplicity::Multiple, short: 'c', normalizer: Normalizer::ContactUri },
    FieldSpec { key: FieldKey::Expires, label: "Expires", multiplicity: Multiplicity::Single, short: 'e', normalizer: Normalizer::Expiry },
    FieldSpec { key: FieldKey::Lang, label: "Preferred-Languages", multiplicity: Multiplicity::Multiple, short: 'l', normalizer: Normalizer::LanguageList },
    FieldSpec { key: FieldKey::Canonical, label: "Canonical", multiplicity: Multiplicity::Multiple, short: 'u', normalizer: Normalizer::Verbatim },
    FieldSpec { key: FieldKey::Encryption, label: "Encryption", multiplicity: Multiplicity::Multiple, short: 'x', normalizer: Normalizer::Verbatim },
    FieldSpec { key: FieldKey::Ack, label: "Acknowledgments", multiplicity: Multiplicity::Multiple, short: 'a', normalizer: Normalizer::Verbatim },
    FieldSpec { key: FieldKey::Policy, label: "Policy", multiplicity: Multiplicity::Multiple, short: 'p', normalizer: Normalizer::Verbatim },
    FieldSpec { key: FieldKey::Hiring, label: "Hiring", multiplicity: Multiplicity::Multiple, short: 'h', normalizer: Normalizer::Verbatim },
    FieldSpec { key: FieldKey::Csaf, label: "CSAF", multiplicity: Multiplicity::Multiple, short: 's', normalizer: Normalizer::Verbatim }
];

/// One field's values as resolved by the flag parser. `Many` preserves the
/// order the values appeared in on the command line.
#[derive(Clone, Copy, Debug)]
pub enum FieldValues<'a> {
    Absent,
    Single(&'a str),
    Many(&'a [String])
}

impl<'a> FieldValues<'a> {
    /// The non-blank values, in first-seen order. Blank values are dropped
    /// here so no normalizer ever emits a label with an empty value.
    pub fn present(&self) -> Vec<&'a str> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(value) =>
                if value.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![*value]
                },
            Self::Many(values) =>
                values.iter().map(|value| value.as_str()).filter(|value| !value.trim().is_empty()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_order() -> () {
        let labels: Vec<&str> = FIELDS.iter().map(|spec| spec.label).collect();
        assert_eq!(labels, vec![
            "Contact",
            "Expires",
            "Preferred-Languages",
            "Canonical",
            "Encryption",
            "Acknowledgments",
            "Policy",
            "Hiring",
            "CSAF"
        ]);
    }

    #[test]
    fn test_short_aliases_are_unique() -> () {
        for (i, a) in FIELDS.iter().enumerate() {
            for b in FIELDS.iter().skip(i + 1) {
                assert_ne!(a.short, b.short);
            }
        }
    }

    #[test]
    fn test_only_expires_is_single_valued() -> () {
        for spec in FIELDS.iter() {
            if spec.key == FieldKey::Expires {
                assert_eq!(spec.multiplicity, Multiplicity::Single);
            } else {
                assert_eq!(spec.multiplicity, Multiplicity::Multiple);
            }
        }
    }

    #[test]
    fn test_present_discards_blanks() -> () {
        let values = vec!["en".to_owned(), "".to_owned(), "  ".to_owned(), "fi".to_owned()];
        assert_eq!(FieldValues::Many(&values).present(), vec!["en", "fi"]);
        assert_eq!(FieldValues::Single("  ").present(), Vec::<&str>::new());
        assert_eq!(FieldValues::Single("6").present(), vec!["6"]);
        assert!(FieldValues::Absent.present().is_empty());
    }
}
