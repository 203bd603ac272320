//! Template strings around a localized date
//!
//! `data-string="Due"` renders as "Due Oct 14, 2016 04:00 EDT": the
//! template gets a ` {date}` placeholder appended, goes through the
//! translation catalog, then the placeholder is filled.

/// Message catalog lookup (gettext)
pub trait Translator {
    fn gettext(&self, msgid: &str) -> String;
}

/// Catalog that returns every message untranslated
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn gettext(&self, msgid: &str) -> String {
        self(msgid)
    }
}

/// Replace `{name}` placeholders with values
///
/// Placeholder names are word characters only. Placeholders without a
/// value are left in place.
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            let is_word = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
            if !is_word {
                return None;
            }
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Prefix a display date with a translatable template
pub fn date_template<T>(translator: &T, template: &str, date: &str) -> String
where
    T: Translator + ?Sized,
{
    let msgid = format!("{} {{date}}", template);
    interpolate(&translator.gettext(&msgid), &[("date", date)])
}
