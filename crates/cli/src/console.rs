//! Text menu over the inventory ledger.
//!
//! Input is line-oriented. Prompts repeat until the entered value parses;
//! domain failures are printed and the menu comes back. End of input at any
//! prompt ends the session.

use std::io::{self, BufRead, Write};

use stockbook_core::{DomainError, Money, ProductId};
use stockbook_inventory::InventoryManager;

use crate::format::{CurrencyFormatter, product_table};

const MENU: &str = "\nInventory Management System
=================================
1. Add Product
2. Remove Product
3. Update Product
4. List Products
5. Exit";

/// Whether the session goes on after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

pub struct Console<R, W> {
    input: R,
    output: W,
    inventory: InventoryManager,
    currency: CurrencyFormatter,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, inventory: InventoryManager, currency: CurrencyFormatter) -> Self {
        Self {
            input,
            output,
            inventory,
            currency,
        }
    }

    pub fn inventory(&self) -> &InventoryManager {
        &self.inventory
    }

    pub fn into_inventory(self) -> InventoryManager {
        self.inventory
    }

    /// Run the menu loop until `5. Exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Inventory Management System!")?;

        loop {
            writeln!(self.output, "{MENU}")?;
            write!(self.output, "Please select an option (1-5): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let Ok(choice) = line.trim().parse::<i64>() else {
                writeln!(self.output, "Invalid input. Please enter a number between 1 and 5.")?;
                continue;
            };

            let step = match choice {
                1 => self.add_product()?,
                2 => self.remove_product()?,
                3 => self.update_product()?,
                4 => self.list_products()?,
                5 => Step::Quit,
                _ => {
                    writeln!(self.output, "Invalid choice. Please enter a number between 1 and 5.")?;
                    Step::Continue
                }
            };
            if step == Step::Quit {
                break;
            }
        }

        tracing::debug!("console session ended");
        Ok(())
    }

    fn add_product(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt(
            "Enter a product name: ",
            "Invalid input. Please enter a valid product name.",
            parse_name,
        )?
        else {
            return Ok(Step::Quit);
        };
        let Some(quantity) = self.prompt(
            "Enter the quantity: ",
            "Invalid input. Please enter a valid product quantity.",
            parse_quantity,
        )?
        else {
            return Ok(Step::Quit);
        };
        let Some(price) = self.prompt(
            "Enter the price: ",
            "Invalid input. Please enter a valid product price.",
            parse_price,
        )?
        else {
            return Ok(Step::Quit);
        };

        match self.inventory.add_new(name, quantity, price) {
            Ok(_) => writeln!(self.output, "Product added successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    fn remove_product(&mut self) -> io::Result<Step> {
        let Some(id) = self.prompt(
            "Enter the product ID to remove: ",
            "Invalid input. Please enter a valid product ID.",
            parse_id,
        )?
        else {
            return Ok(Step::Quit);
        };

        match self.inventory.remove_product(id) {
            Ok(_) => writeln!(self.output, "Product removed successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    fn update_product(&mut self) -> io::Result<Step> {
        let Some(id) = self.prompt(
            "Enter the product ID to update: ",
            "Invalid input. Please enter a valid product ID.",
            parse_id,
        )?
        else {
            return Ok(Step::Quit);
        };
        let Some(quantity) = self.prompt(
            "Enter the new quantity: ",
            "Invalid input. Please enter a valid quantity.",
            parse_quantity,
        )?
        else {
            return Ok(Step::Quit);
        };

        match self.inventory.update_product(id, quantity) {
            Ok(()) => writeln!(self.output, "Product updated successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Step::Continue)
    }

    fn list_products(&mut self) -> io::Result<Step> {
        let table = product_table(
            &self.inventory.list_products(),
            self.inventory.total_value(),
            &self.currency,
        );
        write!(self.output, "{table}")?;
        Ok(Step::Continue)
    }

    fn report(&mut self, err: &DomainError) -> io::Result<()> {
        writeln!(self.output, "Error: {err}")
    }

    /// Ask until `parse` accepts the line. `None` means input ended.
    fn prompt<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            writeln!(self.output, "{invalid}")?;
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}

fn parse_name(input: &str) -> Option<String> {
    let name = input.trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn parse_quantity(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|q| *q >= 0)
}

fn parse_id(input: &str) -> Option<ProductId> {
    input.parse().ok()
}

fn parse_price(input: &str) -> Option<Money> {
    input.parse::<Money>().ok().filter(|p| !p.is_negative())
}
