use assert_cmd::Command;
use predicates::prelude::*;

fn run(args: &[&str]) -> assert_cmd::assert::Assert {
    Command::cargo_bin("create-security-txt").unwrap().args(args).assert()
}

const EXPIRES_LINE: &str = r"Expires: \d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z";

#[test]
fn input_without_contact_or_expires_shows_help() -> () {
    run(&[])
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn input_with_contact_but_without_expires_shows_help() -> () {
    run(&["-c", "itsec@acme.org"])
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn input_with_expires_but_without_contact_shows_help() -> () {
    run(&["-e", "7"])
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn unparsable_expires_shows_help() -> () {
    run(&["-c", "itsec@acme.org", "-e", "FAIL"])
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn input_with_minimal_flags() -> () {
    run(&["--contact", "itsec@acme.org", "--expires", "6"])
        .success()
        .stdout(predicate::str::contains("Contact: mailto:itsec@acme.org\n"))
        .stdout(predicate::str::is_match(EXPIRES_LINE).unwrap());
}

#[test]
fn input_with_all_flags() -> () {
    run(&[
        "--contact", "itsec@acme.org",
        "--expires", "6",
        "--lang", "en",
        "--canonical", "https://acme.org/.well-known/security.txt",
        "--encryption", "https://acme.org/key.asc",
        "--ack", "https://acme.org/security/acknowledgments.txt",
        "--policy", "https://acme.org/security/policy.txt",
        "--hiring", "https://acme.org/jobs",
        "--csaf", "https://acme.org/.well-known/csaf/provider-metadata.json"
    ])
        .success()
        .stdout(predicate::str::is_match([
            r"^Contact: mailto:itsec@acme\.org\n",
            EXPIRES_LINE,
            r"\nPreferred-Languages: en",
            r"\nCanonical: https://acme\.org/\.well-known/security\.txt",
            r"\nEncryption: https://acme\.org/key\.asc",
            r"\nAcknowledgments: https://acme\.org/security/acknowledgments\.txt",
            r"\nPolicy: https://acme\.org/security/policy\.txt",
            r"\nHiring: https://acme\.org/jobs",
            r"\nCSAF: https://acme\.org/\.well-known/csaf/provider-metadata\.json\n$"
        ].concat()).unwrap());
}

#[test]
fn input_with_more_than_one_contact_point() -> () {
    run(&[
        "--contact", "itsec@acme.org",
        "--contact", "https://acme.org/contact",
        "--expires", "6"
    ])
        .success()
        .stdout(predicate::str::is_match(
            r"Contact: mailto:itsec@acme\.org\nContact: https://acme\.org/contact\n"
        ).unwrap());
}

#[test]
fn input_with_more_than_one_preferred_language() -> () {
    run(&["-c", "itsec@acme.org", "-e", "6", "-l", "en", "-l", "fi"])
        .success()
        .stdout(predicate::str::contains("Preferred-Languages: en, fi\n"));
}

#[test]
fn mailto_prefix_is_not_doubled() -> () {
    run(&["-c", "mailto:security@example.com", "-e", "7"])
        .success()
        .stdout(predicate::str::contains("Contact: mailto:security@example.com\n"))
        .stdout(predicate::str::contains("mailto:mailto:").not());
}

#[test]
fn absolute_expires_is_echoed_in_utc() -> () {
    run(&["-c", "itsec@acme.org", "-e", "2031-01-01T02:00:00+02:00"])
        .success()
        .stdout(predicate::str::contains("Expires: 2031-01-01T00:00:00Z\n"));
}

#[test]
fn long_help_is_available_even_though_short_h_is_hiring() -> () {
    run(&["--help"])
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--hiring"));
}
