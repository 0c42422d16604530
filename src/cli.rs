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

use clap::Parser;

use crate::schema::{FieldKey, FieldValues};

const EXAMPLES: &str = "Examples:
  Write to stdout:
    create-security-txt -c security@example.com -e 30
  Write a GPG signed file to the .well-known directory:
    create-security-txt -c itsec@example.org -e 7 | gpg --clearsign > .well-known/security.txt";

// -h is taken by --hiring, so clap's automatic short help flag is disabled;
// --help is re-added by hand below.
/// Generate the contents of an RFC 9116 security.txt file on stdout
#[derive(Clone, Debug)]
#[derive(Parser)]
#[command(name = "create-security-txt", version, disable_help_flag = true)]
#[command(override_usage = "create-security-txt -c URI -e DAYS|DATE [OPTIONS...]", after_help = EXAMPLES)]
pub struct Cli {
    /// A link or e-mail address for people to contact you about security
    /// issues. Remember to include "https://" for URLs, and "mailto:" for
    /// e-mails.
    #[arg(short = 'c', long)]
    pub contact: Vec<String>,

    /// Expiration after which the content of the security.txt file should be
    /// considered stale (so security researchers should then not trust it).
    /// Either a number of days from now (negative is allowed), or an ISO-8601
    /// date-time.
    #[arg(short = 'e', long, allow_negative_numbers = true)]
    pub expires: Option<String>,

    /// A language code that your security team speaks.
    #[arg(short = 'l', long)]
    pub lang: Vec<String>,

    /// The URLs for accessing your security.txt file. It is important to
    /// include this if you are digitally signing the security.txt file, so
    /// that the location of the security.txt file can be digitally signed
    /// too.
    #[arg(short = 'u', long)]
    pub canonical: Vec<String>,

    /// A link to a key which security researchers should use to securely talk
    /// to you. Remember to include "https://".
    #[arg(short = 'x', long)]
    pub encryption: Vec<String>,

    /// A link to a web page where you say thank you to security researchers
    /// who have helped you. Remember to include "https://".
    #[arg(short = 'a', long)]
    pub ack: Vec<String>,

    /// A link to a policy detailing what security researchers should do when
    /// searching for or reporting security issues. Remember to include
    /// "https://".
    #[arg(short = 'p', long)]
    pub policy: Vec<String>,

    /// A link to any security-related job openings in your organisation.
    /// Remember to include "https://".
    #[arg(short = 'h', long)]
    pub hiring: Vec<String>,

    /// A link to the provider metadata of your CSAF (Common Security Advisory
    /// Framework) endpoint. Remember to include "https://".
    #[arg(short = 's', long)]
    pub csaf: Vec<String>,

    /// Print help
    #[arg(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>
}

impl Cli {
    /// The resolved values for one schema field, in command-line order.
    pub fn values(&self, key: FieldKey) -> FieldValues<'_> {
        match key {
            FieldKey::Contact => FieldValues::Many(&self.contact),
            FieldKey::Expires =>
                match &self.expires {
                    Some(value) => FieldValues::Single(value),
                    None => FieldValues::Absent
                },
            FieldKey::Lang => FieldValues::Many(&self.lang),
            FieldKey::Canonical => FieldValues::Many(&self.canonical),
            FieldKey::Encryption => FieldValues::Many(&self.encryption),
            FieldKey::Ack => FieldValues::Many(&self.ack),
            FieldKey::Policy => FieldValues::Many(&self.policy),
            FieldKey::Hiring => FieldValues::Many(&self.hiring),
            FieldKey::Csaf => FieldValues::Many(&self.csaf)
        }
    }
}

/// Render the long usage help to stderr; stdout stays reserved for the
/// document itself.
pub fn print_usage_to_stderr() -> () {
    let mut command = <Cli as clap::CommandFactory>::command();
    eprint!("{}", command.render_long_help());
}
