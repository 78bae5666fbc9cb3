//! Prototype: derive new products by cloning a configured original.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: u32,
    pub description: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }

    /// Deep copy of `self`, adjusted by `edit`. The prototype is untouched.
    pub fn clone_with(&self, edit: impl FnOnce(&mut Product)) -> Product {
        let mut copy = self.clone();
        edit(&mut copy);
        copy
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.price, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_prototype_when_cloning_with_edits_then_original_is_unchanged() {
        let prototype = Product::new("Basic product", 100, "This is a basic product");

        let custom = prototype.clone_with(|p| {
            p.name = "Custom product".into();
            p.price = 150;
        });

        assert_eq!(prototype.to_string(), "Basic product 100 This is a basic product");
        assert_eq!(custom.name, "Custom product");
        assert_eq!(custom.price, 150);
        assert_eq!(custom.description, prototype.description);
    }
}
