//! Command line argument display mapping.
//!
//! The argument source hands the reporting core a flat, insertion-ordered
//! mapping of flag name to value, with a secrecy bit per entry. Secret
//! values are masked before they ever reach a report.

use serde::{Deserialize, Serialize};

/// Mask substituted for secret argument values in reports and logs.
pub const HIDDEN_VALUE: &str = "*HIDDEN*";

/// One named argument with its raw value and secrecy bit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argument {
    /// Flag name, without leading dashes.
    pub name: String,
    /// Raw value; empty when the flag carried none.
    pub value: String,
    /// Whether the value must be masked in any displayed output.
    pub secret: bool,
}

impl Argument {
    /// The value as it may be displayed: masked when secret.
    pub fn display_value(&self) -> &str {
        if self.secret {
            HIDDEN_VALUE
        } else {
            &self.value
        }
    }
}

/// Insertion-order-preserving list of arguments.
///
/// Order is preserved so that rendered reports are reproducible from the
/// same invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArgumentList {
    entries: Vec<Argument>,
}

impl ArgumentList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a non-secret argument.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Argument {
            name: name.into(),
            value: value.into(),
            secret: false,
        });
    }

    /// Append a secret argument whose value will be masked on display.
    pub fn push_secret(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Argument {
            name: name.into(),
            value: value.into(),
            secret: true,
        });
    }

    /// Extract `-flag [value]` pairs from raw arguments, in order.
    ///
    /// A token starting with `-` opens a flag; the following token is its
    /// value unless it is itself a flag. Flags whose name appears in
    /// `secrets` are marked secret.
    pub fn parse<I, S>(args: I, secrets: &[&str]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        let mut list = Self::new();

        for (current, token) in tokens.iter().enumerate() {
            if !token.starts_with('-') {
                continue;
            }
            let name = token.trim_start_matches('-').to_string();

            let value = match tokens.get(current + 1) {
                Some(next) if !next.starts_with('-') => next.clone(),
                _ => String::new(),
            };

            if secrets.contains(&name.as_str()) {
                log::debug!("found flag {} with value {}", name, HIDDEN_VALUE);
                list.push_secret(name, value);
            } else {
                log::debug!("found flag {} with value {}", name, value);
                list.push(name, value);
            }
        }

        list
    }

    /// Iterate over the arguments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.entries.iter()
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
