#[cfg(test)]
mod tests {
    use tokio::io::BufReader;

    use crate::app_system::InventorySystem;
    use crate::menu::run_menu;

    /// Drives a full menu session from scripted input and returns the output.
    async fn run_session(script: &str) -> String {
        let system = InventorySystem::new();
        let mut input = BufReader::new(script.as_bytes());
        let mut output = Vec::new();
        run_menu(&system.inventory_client, &mut input, &mut output)
            .await
            .unwrap();
        system.shutdown().await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn add_then_total_session() {
        let output = run_session("1\n1\nWidget\n3\n2.50\n5\n6\n").await;
        assert!(output.contains("Product 'Widget' added to inventory."));
        assert!(output.contains("Total Inventory Value: $7.50"));
    }

    #[tokio::test]
    async fn list_session_shows_products_in_order() {
        let output = run_session("4\n1\n1\nWidget\n3\n2.50\n1\n2\nGadget\n1\n10\n4\n6\n").await;
        assert!(output.contains("Inventory is empty."));
        let widget = output.find("ID: 1, Name: Widget, Quantity: 3, Price: $2.50");
        let gadget = output.find("ID: 2, Name: Gadget, Quantity: 1, Price: $10.00");
        assert!(widget.is_some() && gadget.is_some());
        assert!(widget < gadget);
    }

    #[tokio::test]
    async fn invalid_option_redisplays_menu() {
        let output = run_session("9\n6\n").await;
        assert!(output.contains("Invalid option. Please try again."));
        assert_eq!(output.matches("Inventory Management System").count(), 2);
    }

    #[tokio::test]
    async fn malformed_number_reprompts() {
        let output = run_session("1\nabc\n2\nWidget\n1\n1.00\n6\n").await;
        assert!(output.contains("Please enter a valid number."));
        assert!(output.contains("Product 'Widget' added to inventory."));
    }

    #[tokio::test]
    async fn remove_missing_product_reports_not_found() {
        let output = run_session("2\n42\n6\n").await;
        assert!(output.contains("Product with ID 42 not found."));
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected_and_session_continues() {
        let output = run_session("1\n1\nWidget\n1\n1\n1\n1\nGadget\n1\n1\n5\n6\n").await;
        assert!(output.contains("Product with ID 1 already exists."));
        assert!(output.contains("Total Inventory Value: $1.00"));
    }

    #[tokio::test]
    async fn end_of_input_terminates_cleanly() {
        let output = run_session("").await;
        assert!(output.contains("Inventory Management System"));
    }

    #[tokio::test]
    async fn store_state_survives_the_menu_loop() {
        let system = InventorySystem::new();
        let client = system.inventory_client.clone();

        let mut input = BufReader::new("1\n7\nCable\n2\n4.25\n6\n".as_bytes());
        let mut output = Vec::new();
        run_menu(&system.inventory_client, &mut input, &mut output)
            .await
            .unwrap();

        let products = client.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 7);
        assert_eq!(products[0].quantity, 2);

        drop(client);
        system.shutdown().await.unwrap();
    }
}
