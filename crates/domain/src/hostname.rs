use std::fmt;
use thiserror::Error;

/// Maximum hostname length in bytes, measured after the root dot is stripped.
pub const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of a single label in bytes.
pub const MAX_LABEL_LEN: usize = 63;

/// Characters that mark a path, query or fragment rather than a hostname.
pub const PATH_OR_QUERY_CHARS: [char; 5] = ['/', '\\', '?', '&', '#'];

const WHITESPACE_CHARS: [char; 3] = [' ', '\t', '\n'];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    #[error("Invalid input: hostname is empty")]
    EmptyInput,

    #[error("Invalid input: hostname exceeds 253 characters")]
    TooLong,

    #[error(
        "Invalid input: looks like a URL (contains \"://\"). Please pass a hostname like \"example.com\"."
    )]
    LooksLikeUrl,

    #[error("Invalid input: contains path or query characters ('/', '\\', '?', '&', '#')")]
    ContainsPathOrQueryChars,

    #[error("Invalid input: no whitespace allowed")]
    ContainsWhitespace,

    #[error("Invalid input: empty label (leading, trailing or consecutive dots)")]
    EmptyLabel,

    #[error("Invalid input: label exceeds 63 characters")]
    LabelTooLong,

    #[error("Invalid input: label must not start or end with '-'")]
    LabelHyphenBoundary,

    #[error("Invalid input: label contains characters outside [A-Za-z0-9-]")]
    LabelInvalidChar,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::TooLong => "too_long",
            Self::LooksLikeUrl => "looks_like_url",
            Self::ContainsPathOrQueryChars => "contains_path_or_query_chars",
            Self::ContainsWhitespace => "contains_whitespace",
            Self::EmptyLabel => "empty_label",
            Self::LabelTooLong => "label_too_long",
            Self::LabelHyphenBoundary => "label_hyphen_boundary",
            Self::LabelInvalidChar => "label_invalid_char",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<(), InvalidReason> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(reason) => Err(reason),
        }
    }
}

/// Checks `input` against DNS hostname syntax. The first failing rule wins.
pub fn validate(input: &str) -> ValidationResult {
    match check(input) {
        Ok(()) => ValidationResult::Valid,
        Err(reason) => ValidationResult::Invalid(reason),
    }
}

fn check(input: &str) -> Result<(), InvalidReason> {
    if input.is_empty() {
        return Err(InvalidReason::EmptyInput);
    }

    if strip_root_dot(input).len() > MAX_HOSTNAME_LEN {
        return Err(InvalidReason::TooLong);
    }

    if input.contains("://") {
        return Err(InvalidReason::LooksLikeUrl);
    }

    if input.contains(PATH_OR_QUERY_CHARS) {
        return Err(InvalidReason::ContainsPathOrQueryChars);
    }

    if input.contains(WHITESPACE_CHARS) {
        return Err(InvalidReason::ContainsWhitespace);
    }

    let name = strip_root_dot(input);
    if name.is_empty() {
        return Err(InvalidReason::EmptyLabel);
    }

    name.split('.').try_for_each(check_label)
}

fn check_label(label: &str) -> Result<(), InvalidReason> {
    if label.is_empty() {
        return Err(InvalidReason::EmptyLabel);
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(InvalidReason::LabelTooLong);
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(InvalidReason::LabelHyphenBoundary);
    }
    if !label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(InvalidReason::LabelInvalidChar);
    }
    Ok(())
}

fn strip_root_dot(input: &str) -> &str {
    input.strip_suffix('.').unwrap_or(input)
}

/// A hostname that passed [`validate`]. Keeps the caller's original text,
/// root dot included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(Box<str>);

impl Hostname {
    pub fn parse(input: &str) -> Result<Self, InvalidReason> {
        validate(input).into_result()?;
        Ok(Self(input.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_fully_qualified(&self) -> bool {
        self.0.ends_with('.')
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        strip_root_dot(&self.0).split('.')
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
