use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// One inventory line item.
///
/// Every `Product` in existence satisfies its invariants: positive id,
/// non-blank name, non-negative stock and price. There is no way to build
/// or mutate one into an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    quantity_in_stock: i64,
    price: Money,
}

impl Product {
    /// Validate and build a product. The first violated field is reported,
    /// checked in the order id, name, quantity, price.
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, price: Money) -> DomainResult<Self> {
        let id = ProductId::new(id)?;
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::invalid("name", "product name cannot be empty"));
        }
        ensure_quantity(quantity)?;
        if price.is_negative() {
            return Err(DomainError::invalid("price", "price cannot be negative"));
        }

        Ok(Self {
            id,
            name,
            quantity_in_stock: quantity,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity_in_stock(&self) -> i64 {
        self.quantity_in_stock
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// `quantity_in_stock * price`, computed on demand.
    pub fn total_value(&self) -> Money {
        self.price.times(self.quantity_in_stock)
    }

    /// Only the owning manager changes stock levels.
    pub(crate) fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        ensure_quantity(quantity)?;
        self.quantity_in_stock = quantity;
        Ok(())
    }
}

fn ensure_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::invalid(
            "quantity",
            "quantity in stock cannot be negative",
        ));
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product ID: {}, Name: {}, Quantity in Stock: {}, Price: {}",
            self.id, self.name, self.quantity_in_stock, self.price
        )
    }
}

/// Wire shape of a product; deserializing goes back through `Product::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductRecord {
    id: i64,
    name: String,
    quantity: i64,
    price: Money,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(r: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(r.id, r.name, r.quantity, r.price)
    }
}

impl From<Product> for ProductRecord {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.get(),
            name: p.name,
            quantity: p.quantity_in_stock,
            price: p.price,
        }
    }
}
