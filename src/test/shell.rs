#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rust_decimal_macros::dec;

    use crate::app::{Portfolio, Reply, Shell};

    fn shell() -> Shell {
        Shell::new(Portfolio::new()).unwrap()
    }

    fn output(shell: &mut Shell, line: &str) -> String {
        match shell.execute(line) {
            Reply::Output(text) => text,
            Reply::Quit => panic!("unexpected quit for '{}'", line),
        }
    }

    #[test]
    fn buy_with_quoted_name() {
        let mut shell = shell();

        assert_eq!(
            output(&mut shell, r#"buy stock AAPL "Apple Inc" 10 100.0"#),
            "New investment added successfully!"
        );
        assert_eq!(
            output(&mut shell, "  BUY Stock aapl Apple 5 110  "),
            "Updated existing investment successfully!"
        );

        let holding = shell.portfolio().get("AAPL").unwrap();
        assert_eq!(holding.name(), "Apple Inc");
        assert_eq!(*holding.quantity(), 15);
    }

    #[test]
    fn ledger_errors_are_shown_verbatim() {
        let mut shell = shell();

        assert_eq!(
            output(&mut shell, "buy stock AAPL Apple 0 100"),
            "Error: Quantity and price must be positive values."
        );
        assert_eq!(
            output(&mut shell, "sell TSLA 1 100"),
            "Error: Investment with symbol TSLA not found."
        );
        assert_eq!(
            output(&mut shell, "update TSLA -3"),
            "Error: Price must be a positive value."
        );
        assert!(output(&mut shell, "buy crypto BTC Bitcoin 1 100").starts_with("Error: Invalid investment type 'crypto'"));
    }

    #[test]
    fn malformed_numbers_never_reach_ledger() {
        let mut shell = shell();

        assert_eq!(
            output(&mut shell, "buy stock AAPL Apple ten 100"),
            "Error: Invalid input. Please enter valid numeric values for quantity and price."
        );
        assert_eq!(
            output(&mut shell, "sell AAPL 1 1.2.3"),
            "Error: Invalid input. Please enter valid numeric values for quantity and price."
        );
        assert_eq!(
            output(&mut shell, "update AAPL abc"),
            "Error: Invalid price. Please enter a valid number."
        );
        assert_eq!(
            output(&mut shell, "search low=cheap"),
            "Error: Invalid price input. Please enter valid numeric values for low and high prices."
        );
        assert!(shell.portfolio().transactions().is_empty());
    }

    #[test]
    fn sell_and_update() {
        let mut shell = shell();
        output(&mut shell, "buy stock AAPL Apple 10 100");

        assert_eq!(
            output(&mut shell, "sell aapl 4 120"),
            "Sold 4 of aapl successfully."
        );
        assert_eq!(
            output(&mut shell, "update AAPL 130"),
            "Updated price of AAPL successfully."
        );

        let holding = shell.portfolio().get("AAPL").unwrap();
        assert_eq!(*holding.book_value(), dec!(605.994));
        assert_eq!(*holding.price(), dec!(130));
    }

    #[test]
    fn search_with_options() {
        let mut shell = shell();
        output(&mut shell, r#"buy stock AAPL "Apple Inc" 10 100"#);
        output(&mut shell, r#"buy mutualfund FUND1 "Tech Growth Fund" 100 10"#);

        assert_eq!(
            output(&mut shell, "search"),
            "AAPL: Apple Inc (Stock)\nFUND1: Tech Growth Fund (Mutual Fund)\n"
        );
        assert_eq!(
            output(&mut shell, r#"search keywords="growth fund""#),
            "FUND1: Tech Growth Fund (Mutual Fund)\n"
        );
        assert_eq!(
            output(&mut shell, "search symbol=aapl high=99"),
            "No investments found matching the criteria."
        );
        assert!(output(&mut shell, "search AAPL").starts_with("Usage: search"));
    }

    #[test]
    fn gain_breakdown() {
        let mut shell = shell();

        assert_eq!(
            output(&mut shell, "gain"),
            "No investments to calculate gains.\nTotal gain: 0.00"
        );

        output(&mut shell, "buy mutualfund FUND1 Growth 100 10");
        output(&mut shell, "buy stock AAPL Apple 10 100");
        output(&mut shell, "update AAPL 120");

        assert_eq!(
            output(&mut shell, "gain"),
            "Gains by Investment:\nFUND1 (Mutual Fund): -50.00\nAAPL (Stock): 180.02\nTotal gain: 130.02"
        );
    }

    #[test]
    fn list_history_and_export() {
        let mut shell = shell();
        assert_eq!(output(&mut shell, "list"), "No investments to display.");
        assert_eq!(output(&mut shell, "history"), "No transactions recorded.");

        output(&mut shell, "buy stock AAPL Apple 10 100");
        output(&mut shell, "buy mutualfund FUND1 Growth 100 10");

        assert_eq!(
            output(&mut shell, "list"),
            "1 of 2: AAPL: Apple (Stock) quantity 10 @ 100.00, book value 1009.99\n\
             2 of 2: FUND1: Growth (Mutual Fund) quantity 100 @ 10.00, book value 1025.00"
        );

        let history = output(&mut shell, "history");
        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#1 "));
        assert!(lines[0].ends_with("Buy AAPL 10 @ 100.00 (book value +1009.99)"));

        let json: serde_json::Value = serde_json::from_str(&output(&mut shell, "export")).unwrap();
        let holdings = json.as_array().unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0]["symbol"], "AAPL");
        assert_eq!(holdings[1]["investment_type"], "MutualFund");
    }

    #[test]
    fn usage_unknown_and_blank() {
        let mut shell = shell();

        assert!(output(&mut shell, "buy stock AAPL").starts_with("Usage: buy"));
        assert!(output(&mut shell, "sell AAPL 1").starts_with("Usage: sell"));
        assert!(output(&mut shell, "update").starts_with("Usage: update"));
        assert_eq!(
            output(&mut shell, "dance"),
            "Error: Unknown command 'dance'. Type 'help' for commands."
        );
        assert_eq!(output(&mut shell, "   "), "");
        assert!(output(&mut shell, "help").contains("buy <stock|mutualfund>"));
        assert_eq!(shell.execute("quit"), Reply::Quit);
        assert_eq!(shell.execute("EXIT"), Reply::Quit);
    }

    #[test]
    fn run_reads_until_quit() {
        let mut shell = shell();
        let input = Cursor::new("buy stock AAPL Apple 10 100\nsell AAPL 10 100\nquit\nbuy stock MSFT Microsoft 1 1\n");
        let mut out = Vec::new();

        shell.run(input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("New investment added successfully!"));
        assert!(text.contains("Sold 10 of AAPL successfully."));
        assert!(shell.portfolio().is_empty());
        assert_eq!(shell.portfolio().transactions().len(), 2);
    }

    #[test]
    fn oversized_buy_is_rejected() {
        let mut shell = shell();

        assert_eq!(
            output(&mut shell, "buy stock X x 9223372036854775807 100000000000"),
            "Error: Quantity or price is too large."
        );
        assert!(shell.portfolio().is_empty());
        assert!(shell.portfolio().transactions().is_empty());
    }

    #[test]
    fn positional_tokens_keep_equals_sign() {
        let mut shell = shell();

        assert_eq!(
            output(&mut shell, "buy stock T AT=T 1 1"),
            "New investment added successfully!"
        );
        assert_eq!(shell.portfolio().get("T").unwrap().name(), "AT=T");

        output(&mut shell, "buy stock A=B Name 1 1");
        assert_eq!(shell.portfolio().get("A=B").unwrap().symbol(), "A=B");
        assert_eq!(
            output(&mut shell, "search symbol=a=b"),
            "A=B: Name (Stock)\n"
        );
        assert!(output(&mut shell, "search name=T").starts_with("Usage: search"));
    }
}
