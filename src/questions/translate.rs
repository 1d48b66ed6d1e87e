//! Translation hook for explanation steps
//!
//! The engine never owns string tables. Callers hand in a `Translator`;
//! without one, the English fallback text is templated directly.

use std::fmt::Display;

/// Named values substituted into `{name}` tokens
pub type Params<'a> = [(&'a str, &'a dyn Display)];

/// Resolves a message key to display text
pub trait Translator {
    fn translate(&self, key: &str, fallback: &str, params: &Params<'_>) -> String;
}

/// Templates the fallback text itself
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackTranslator;

impl Translator for FallbackTranslator {
    fn translate(&self, _key: &str, fallback: &str, params: &Params<'_>) -> String {
        fill_template(fallback, params)
    }
}

impl<F> Translator for F
where
    F: Fn(&str, &str, &Params<'_>) -> String,
{
    fn translate(&self, key: &str, fallback: &str, params: &Params<'_>) -> String {
        self(key, fallback, params)
    }
}

/// Replace each `{name}` token with its parameter. Unknown tokens stay as-is.
pub fn fill_template(template: &str, params: &Params<'_>) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        let token = format!("{{{}}}", name);
        if out.contains(&token) {
            out = out.replace(&token, &value.to_string());
        }
    }
    out
}
