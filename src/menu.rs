//! The interactive menu loop.
//!
//! This is the only layer that prints to the user: store outcomes arrive as
//! values from the [`InventoryClient`] and are rendered here. The loop is
//! generic over its input and output streams so sessions can be scripted in
//! tests.

use std::io::Write;
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::inventory::{InventoryError, ProductDraft};
use crate::store_actor::InventoryClient;

const MENU: &str = "\nInventory Management System\n\
1. Add Product\n\
2. Remove Product\n\
3. Update Product Quantity\n\
4. List Products\n\
5. Get Total Inventory Value\n\
6. Exit";

/// Runs the menu loop until the user picks Exit or input ends.
///
/// Malformed numeric input re-prompts rather than ending the session;
/// end-of-input anywhere is treated as a clean exit.
pub async fn run_menu<R, W>(
    client: &InventoryClient,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt_line(input, output, "Select an option: ").await? else {
            break;
        };
        match choice.as_str() {
            "1" => add_product(client, input, output).await?,
            "2" => remove_product(client, input, output).await?,
            "3" => update_quantity(client, input, output).await?,
            "4" => list_products(client, output).await?,
            "5" => total_value(client, output).await?,
            "6" => {
                info!("Exit requested");
                break;
            }
            _ => writeln!(output, "Invalid option. Please try again.")?,
        }
    }
    Ok(())
}

async fn add_product<R, W>(
    client: &InventoryClient,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(id) = prompt_number(input, output, "Enter Product ID: ").await? else {
        return Ok(());
    };
    let Some(name) = prompt_line(input, output, "Enter Product Name: ").await? else {
        return Ok(());
    };
    let Some(quantity) = prompt_number(input, output, "Enter Quantity: ").await? else {
        return Ok(());
    };
    let Some(price) = prompt_number(input, output, "Enter Price: ").await? else {
        return Ok(());
    };

    let draft = ProductDraft {
        id,
        name,
        quantity,
        price,
    };
    match client.add(draft).await {
        Ok(product) => writeln!(output, "Product '{}' added to inventory.", product.name),
        Err(e) => report(output, e),
    }
}

async fn remove_product<R, W>(
    client: &InventoryClient,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(id) = prompt_number(input, output, "Enter Product ID to remove: ").await? else {
        return Ok(());
    };
    match client.remove(id).await {
        Ok(product) => writeln!(
            output,
            "Product with ID {} removed from inventory.",
            product.id
        ),
        Err(e) => report(output, e),
    }
}

async fn update_quantity<R, W>(
    client: &InventoryClient,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(id) = prompt_number(input, output, "Enter Product ID to update: ").await? else {
        return Ok(());
    };
    let Some(quantity) = prompt_number(input, output, "Enter new quantity: ").await? else {
        return Ok(());
    };
    match client.update_quantity(id, quantity).await {
        Ok(product) => writeln!(
            output,
            "Quantity of product with ID {} updated to {}.",
            product.id, product.quantity
        ),
        Err(e) => report(output, e),
    }
}

async fn list_products<W>(client: &InventoryClient, output: &mut W) -> std::io::Result<()>
where
    W: Write,
{
    match client.list().await {
        Ok(products) if products.is_empty() => writeln!(output, "Inventory is empty."),
        Ok(products) => {
            writeln!(output, "Inventory Products:")?;
            for p in &products {
                writeln!(
                    output,
                    "ID: {}, Name: {}, Quantity: {}, Price: ${:.2}",
                    p.id, p.name, p.quantity, p.price
                )?;
            }
            Ok(())
        }
        Err(e) => report(output, e),
    }
}

async fn total_value<W>(client: &InventoryClient, output: &mut W) -> std::io::Result<()>
where
    W: Write,
{
    match client.total_value().await {
        Ok(total) => writeln!(output, "Total Inventory Value: ${total:.2}"),
        Err(e) => report(output, e),
    }
}

fn report<W: Write>(output: &mut W, error: InventoryError) -> std::io::Result<()> {
    warn!(error = %error, "Inventory operation rejected");
    writeln!(output, "{error}.")
}

/// Prints the label and reads one trimmed line. `None` means end of input.
async fn prompt_line<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts until the line parses as `T`, re-prompting on malformed input.
async fn prompt_number<R, W, T>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> std::io::Result<Option<T>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    T: FromStr,
{
    loop {
        let Some(line) = prompt_line(input, output, label).await? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Please enter a valid number.")?,
        }
    }
}
