use std::fmt::{self, Display};

use itertools::Itertools;

use crate::inventory::InventoryError;

/// A named numeric attribute of a product.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryAttribute {
    pub name: String,
    pub value: f64,
}

impl InventoryAttribute {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Display for InventoryAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6}", self.name, self.value)
    }
}

/// Flattens a product into the text that gets compressed:
///
/// ```text
/// <name>:(<attribute>:<value>), (<attribute>:<value>), ...
/// ```
///
/// Values are written with six decimal places.
pub fn product_to_string(attributes: &[InventoryAttribute], name: &str) -> String {
    format!(
        "{}:{}",
        name,
        attributes
            .iter()
            .map(|attribute| format!("({}:{:.6})", attribute.name, attribute.value))
            .join(", ")
    )
}

/// A product re-assembled from its flattened text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodedProduct {
    /// The whole flattened text. Empty when the code it came from was malformed.
    pub text: String,
    pub name: String,
    pub attributes: Vec<InventoryAttribute>,
}

impl DecodedProduct {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Re-assembles a product from its flattened text.
///
/// The name is whatever precedes the first `:`. Then every `(`...`)` group is split on its first
/// `:` into the name and the value of an attribute; groups without `:` are skipped. A text without
/// any `:` is kept as it is, with no name nor attributes.
///
/// # Errors
/// [`InventoryError::InvalidAttribute`] if the value of a group is not a number.
pub fn parse_product(text: &str) -> Result<DecodedProduct, InventoryError> {
    let mut product = DecodedProduct {
        text: text.to_owned(),
        ..Default::default()
    };

    let Some((name, mut rest)) = text.split_once(':') else {
        return Ok(product);
    };
    product.name = name.to_owned();

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')').map(|close| open + close) else {
            break;
        };

        let group = &rest[open + 1..close];
        if let Some((attribute, value)) = group.split_once(':') {
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|source| InventoryError::InvalidAttribute {
                    group: group.to_owned(),
                    source,
                })?;
            product.attributes.push(InventoryAttribute::new(attribute, value));
        }

        rest = &rest[close + 1..];
    }

    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Vec<InventoryAttribute> {
        vec![
            InventoryAttribute::new("weight", 1.5),
            InventoryAttribute::new("depth", 24.0),
            InventoryAttribute::new("color", 2.0),
        ]
    }

    #[test]
    fn products_are_flattened_with_six_decimals() {
        assert_eq!(
            product_to_string(&laptop(), "Laptop"),
            "Laptop:(weight:1.500000), (depth:24.000000), (color:2.000000)"
        );
        assert_eq!(product_to_string(&[], "Empty"), "Empty:");
        assert_eq!(
            product_to_string(&[InventoryAttribute::new("t", -0.25)], "x"),
            "x:(t:-0.250000)"
        );
    }

    #[test]
    fn flattened_products_are_re_assembled() {
        let text = product_to_string(&laptop(), "Laptop");
        let product = parse_product(&text).unwrap();

        assert_eq!(product.text, text);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.attributes, laptop());
    }

    #[test]
    fn text_without_colon_has_no_name() {
        let product = parse_product("just text").unwrap();

        assert_eq!(product.text, "just text");
        assert!(product.name.is_empty());
        assert!(product.attributes.is_empty());
    }

    #[test]
    fn groups_without_colon_or_closing_parenthesis_are_skipped() {
        let product = parse_product("Lamp:(broken), (watt:40.000000), (open:1.0").unwrap();

        assert_eq!(product.name, "Lamp");
        assert_eq!(product.attributes, vec![InventoryAttribute::new("watt", 40.0)]);
    }

    #[test]
    fn values_must_be_numbers() {
        let error = parse_product("Lamp:(watt:forty)").unwrap_err();

        assert!(matches!(error, InventoryError::InvalidAttribute { ref group, .. } if group == "watt:forty"));
    }
}
