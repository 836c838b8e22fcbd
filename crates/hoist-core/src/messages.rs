//! Message presentation for [`ErrorKind`]s.
//!
//! Error identity (kind + context) is decoupled from display text: a
//! [`MessageCatalog`] maps each kind to a template with `{key}` placeholders,
//! which are filled from the error's context. [`DefaultMessages`] yields the
//! same text as the errors' `Display` impls.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::error::ErrorKind;

/// Source of message templates, one per [`ErrorKind`].
pub trait MessageCatalog {
    fn template(&self, kind: ErrorKind) -> Cow<'static, str>;

    fn render(&self, kind: ErrorKind, context: &BTreeMap<&'static str, String>) -> String {
        substitute(&self.template(kind), context)
    }
}

/// Built-in English messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageCatalog for DefaultMessages {
    fn template(&self, kind: ErrorKind) -> Cow<'static, str> {
        Cow::Borrowed(default_template(kind))
    }
}

/// Template text used by [`DefaultMessages`].
pub const fn default_template(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::FileUnreadable => {
            "cannot read '{path}'; make sure you are in the correct directory"
        }
        ErrorKind::DocumentUndecodable => {
            "cannot decode '{path}' into the hoist.yml format: {reason}"
        }
        ErrorKind::VersionRequired => "hoist.yml version is required",
        ErrorKind::VersionUnsupported => {
            "only hoist.yml version 0.1.0 is supported, got '{version}'"
        }
        ErrorKind::StackMissingName => "hoist.yml stack name is required",
        ErrorKind::StackNameInvalid => {
            "stack name '{name}' is invalid; use 1-63 lowercase letters, digits or '-', starting and ending with a letter or digit"
        }
        ErrorKind::ServiceNameInvalid => {
            "service name '{name}' is invalid; use 1-63 lowercase letters, digits or '-', starting and ending with a letter or digit"
        }
        ErrorKind::ServiceMissingType => "service '{name}' missing type",
        ErrorKind::ServiceMissingPath => {
            "service '{name}' missing path (use '.' for same directory)"
        }
        ErrorKind::ServicesInvalid => "hoist.yml services invalid ({count})",
        ErrorKind::ManifestExists => "manifest already exists at '{path}'",
        ErrorKind::EncodeFailed => "could not encode template: {reason}",
        ErrorKind::FilesystemError => "filesystem error at '{path}': {reason}",
        ErrorKind::FilesystemLock => "in-memory filesystem lock poisoned",
    }
}

/// Replace every `{key}` in `template` with its context value.
///
/// Placeholders without a matching key are left untouched.
pub fn substitute(template: &str, context: &BTreeMap<&'static str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match context.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect()
    }

    #[test]
    fn substitutes_known_placeholders() {
        let out = substitute("service '{name}' missing type", &ctx(&[("name", "api")]));
        assert_eq!(out, "service 'api' missing type");
    }

    #[test]
    fn leaves_unknown_placeholders() {
        let out = substitute("got '{version}'", &BTreeMap::new());
        assert_eq!(out, "got '{version}'");
    }

    #[test]
    fn unterminated_brace_is_copied() {
        let out = substitute("open { brace", &ctx(&[("x", "y")]));
        assert_eq!(out, "open { brace");
    }

    struct Terse;

    impl MessageCatalog for Terse {
        fn template(&self, kind: ErrorKind) -> Cow<'static, str> {
            Cow::Owned(format!("{kind}: {{name}}"))
        }
    }

    #[test]
    fn custom_catalog_swaps_presentation() {
        let out = Terse.render(ErrorKind::StackNameInvalid, &ctx(&[("name", "-x")]));
        assert_eq!(out, "stack_name_invalid: -x");
    }
}
