//! CSP-mode formatting styles.
//!
//! The Rust rendering of the `Style` namedtuple and `Cell._choose_formats_`
//! from the original `cspsh` interpreter. Each non-atomic [`super::Node`]
//! variant owns one [`Style`] describing how to join its children into
//! canonical CSP source (spec.md §4.4, §4.7).
//!
//! A template is either empty (`""`), a single `"{}"` placeholder standing
//! for the formatted child, or literal text around it. `head`/`tail` take
//! no placeholder at all.

#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub head: Option<&'static str>,
    pub first: Option<&'static str>,
    pub middle: Option<&'static str>,
    pub last: Option<&'static str>,
    pub tail: Option<&'static str>,
}

impl Style {
    pub const fn new() -> Self {
        Style {
            head: None,
            first: None,
            middle: None,
            last: None,
            tail: None,
        }
    }

    pub const fn head(mut self, s: &'static str) -> Self {
        self.head = Some(s);
        self
    }

    pub const fn first(mut self, s: &'static str) -> Self {
        self.first = Some(s);
        self
    }

    pub const fn middle(mut self, s: &'static str) -> Self {
        self.middle = Some(s);
        self
    }

    pub const fn last(mut self, s: &'static str) -> Self {
        self.last = Some(s);
        self
    }

    pub const fn tail(mut self, s: &'static str) -> Self {
        self.tail = Some(s);
        self
    }

    fn resolved(&self) -> (&'static str, &'static str, &'static str, &'static str, &'static str) {
        let middle = self.middle.unwrap_or("{}");
        let first = self.first.unwrap_or(middle);
        let last = self.last.unwrap_or(middle);
        (
            self.head.unwrap_or(""),
            first,
            middle,
            last,
            self.tail.unwrap_or(""),
        )
    }

    /// Join `children`'s already-formatted CSP text using this style,
    /// mirroring `Cell._as_source_`: the first child always uses `first`
    /// (even when it is also the last), interior children use `middle`,
    /// and the final child (when there is more than one) uses `last`.
    pub fn join(&self, children: &[String]) -> String {
        let (head, first, middle, last, tail) = self.resolved();

        let mut out = String::from(head);
        let last_index = children.len().saturating_sub(1);

        for (index, child) in children.iter().enumerate() {
            let template = if index == 0 {
                first
            } else if index == last_index {
                last
            } else {
                middle
            };
            out.push_str(&template.replace("{}", child));
        }

        out.push_str(tail);
        out
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::new()
    }
}
