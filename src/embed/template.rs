//! Embedded text templates with typed `__PLACEHOLDER__` substitution.
//!
//! Used for files whose shape is fixed at compile time; user templates go
//! through Tera instead.

use std::marker::PhantomData;

/// Values substituted into a [`Template`].
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Static template bound to one variable set.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting<'a>(&'a str);

    impl TemplateVars for Greeting<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__NAME__", self.0)
        }
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        const HELLO: Template<Greeting<'static>> = Template::new("__NAME__, hi __NAME__");
        assert_eq!(HELLO.render(&Greeting("ada")), "ada, hi ada");
    }
}
