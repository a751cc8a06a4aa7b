//! Budgeted payload assembly.

use tracing::debug;

use crate::resolve::{FieldRef, resolve};
use crate::value::FieldSource;
use crate::{DEFAULT_MAX_LENGTH, FIELD_SEPARATOR};

/// Field satisfied by the caller-supplied URL when the object has none.
pub const URL_FIELD: &str = "url";

/// Character accounting for the payload.
///
/// `raw` sums fragment lengths without separators (seeded with the URL) and
/// must stay strictly below `max`. `joined` is the length of the assembled
/// payload, separators included, and must not exceed `max`.
#[derive(Debug)]
struct Budget {
    raw: usize,
    joined: usize,
    fragments: usize,
    max: usize,
}

impl Budget {
    fn new(max: usize) -> Self {
        Self {
            raw: 0,
            joined: 0,
            fragments: 0,
            max,
        }
    }

    fn joined_with(&self, len: usize) -> usize {
        if self.fragments == 0 {
            self.joined + len
        } else {
            self.joined + FIELD_SEPARATOR.len() + len
        }
    }

    /// Seed the raw count, used for the URL.
    fn reserve_raw(&mut self, len: usize) {
        self.raw += len;
    }

    /// Account for a fragment that is appended unconditionally.
    fn reserve_fragment(&mut self, len: usize) {
        self.joined = self.joined_with(len);
        self.fragments += 1;
    }

    fn try_take(&mut self, len: usize) -> bool {
        let joined = self.joined_with(len);
        if self.raw + len < self.max && joined <= self.max {
            self.raw += len;
            self.joined = joined;
            self.fragments += 1;
            true
        } else {
            false
        }
    }
}

/// Builds the text encoded into the QR symbol (or printed beside it).
#[derive(Debug, Clone)]
pub struct PayloadBuilder<'a> {
    url: Option<&'a str>,
    max_length: usize,
}

impl Default for PayloadBuilder<'_> {
    fn default() -> Self {
        Self {
            url: None,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl<'a> PayloadBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: URL substituted for a `url` field the object lacks.
    pub fn with_url(mut self, url: Option<&'a str>) -> Self {
        self.url = url;
        self
    }

    /// Builder: character budget for the whole payload.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Resolve `fields` in order against `object` and join what fits.
    pub fn build<S>(&self, fields: &[String], object: &S) -> String
    where
        S: FieldSource + ?Sized,
    {
        let url_fallback = self.url.filter(|_| !object.has_field(URL_FIELD));
        let is_fallback = |field: &FieldRef<'_>| field.attribute == URL_FIELD && field.key.is_none();

        let mut budget = Budget::new(self.max_length);
        if let Some(url) = self.url {
            let len = url.chars().count();
            budget.reserve_raw(len);
            if url_fallback.is_some() {
                for _ in fields.iter().filter(|name| is_fallback(&FieldRef::parse(name))) {
                    budget.reserve_fragment(len);
                }
            }
        }

        let mut fragments: Vec<String> = Vec::with_capacity(fields.len());
        for name in fields {
            let field = FieldRef::parse(name);

            if is_fallback(&field) && !object.has_field(URL_FIELD) {
                if let Some(url) = url_fallback {
                    fragments.push(url.to_string());
                }
                continue;
            }

            let fragment = match resolve(object, &field) {
                Ok(Some(text)) => text,
                Ok(None) => continue,
                Err(e) => {
                    debug!(field = %name, error = %e, "Skipping unresolvable field");
                    continue;
                }
            };

            if budget.try_take(fragment.chars().count()) {
                fragments.push(fragment);
            } else {
                debug!(field = %name, raw = budget.raw, joined = budget.joined, max = budget.max, "Field exceeds payload budget");
            }
        }

        fragments.join(FIELD_SEPARATOR)
    }
}

/// Free-function form of [`PayloadBuilder::build`].
pub fn build_payload<S>(fields: &[String], object: &S, url: Option<&str>, max_length: usize) -> String
where
    S: FieldSource + ?Sized,
{
    PayloadBuilder::new()
        .with_url(url)
        .with_max_length(max_length)
        .build(fields, object)
}
