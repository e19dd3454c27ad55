use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::inventory::record::{parse_product, InventoryAttribute};
use crate::inventory::InventoryError;

/// Anything providing products to compress.
pub trait SymbolSource {
    /// The number of products.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The name of the product at `index`.
    fn name_of(&self, index: usize) -> Result<&str, InventoryError>;

    /// The attributes of the product at `index`, in their original order.
    fn attributes_of(&self, index: usize) -> Result<&[InventoryAttribute], InventoryError>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Product {
    pub name: String,
    pub attributes: Vec<InventoryAttribute>,
    pub quantity: u32,
}

/// An in-memory list of products.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an inventory with one flattened product per line, as written by
    /// [`product_to_string`](super::product_to_string). Blank lines and lines starting with `#`
    /// are skipped, and every product gets a zero quantity.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, InventoryError> {
        let mut inventory = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if !line.contains(':') {
                return Err(InventoryError::MissingName { line: index + 1 });
            }

            let product = parse_product(line)?;
            inventory.add_product(product.attributes, product.name, 0);
        }

        Ok(inventory)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InventoryError> {
        let inventory = Self::from_reader(BufReader::new(File::open(path.as_ref())?))?;
        info!("Loaded {} products from {}", inventory.len(), path.as_ref().display());
        Ok(inventory)
    }

    pub fn add_product(
        &mut self,
        attributes: Vec<InventoryAttribute>,
        name: impl Into<String>,
        quantity: u32,
    ) {
        self.products.push(Product {
            name: name.into(),
            attributes,
            quantity,
        });
    }

    pub fn remove_product(&mut self, index: usize) -> Result<Product, InventoryError> {
        self.check_index(index)?;
        Ok(self.products.remove(index))
    }

    pub fn product(&self, index: usize) -> Result<&Product, InventoryError> {
        self.check_index(index)?;
        Ok(&self.products[index])
    }

    pub fn quantity_of(&self, index: usize) -> Result<u32, InventoryError> {
        Ok(self.product(index)?.quantity)
    }

    pub fn update_quantity(&mut self, index: usize, quantity: u32) -> Result<(), InventoryError> {
        self.check_index(index)?;
        self.products[index].quantity = quantity;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), InventoryError> {
        match index < self.products.len() {
            true => Ok(()),
            false => Err(InventoryError::InvalidIndex {
                index,
                len: self.products.len(),
            }),
        }
    }
}

impl SymbolSource for Inventory {
    fn len(&self) -> usize {
        self.products.len()
    }

    fn name_of(&self, index: usize) -> Result<&str, InventoryError> {
        Ok(&self.product(index)?.name)
    }

    fn attributes_of(&self, index: usize) -> Result<&[InventoryAttribute], InventoryError> {
        Ok(&self.product(index)?.attributes)
    }
}
