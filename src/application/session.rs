use crate::application::ledger::OrderLedger;
use crate::domain::cart::{Cart, Quantity};
use crate::domain::catalog::Catalog;
use crate::domain::payment::PaymentMethod;
use crate::error::{CheckoutError, Result};
use crate::interfaces::console::prompt::Prompter;
use crate::interfaces::console::render;
use std::io::{BufRead, Write};

/// Where the session currently is in the menu flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Browsing,
    CartView,
    SelectPayment,
    Checkout(PaymentMethod),
    HistoryView,
    Exited,
}

/// Errors that end the session instead of returning to the menu.
fn is_fatal(err: &CheckoutError) -> bool {
    matches!(err, CheckoutError::InputClosed | CheckoutError::IoError(_))
}

/// Interactive checkout session.
///
/// Owns the catalog, the cart and the injected ledger, and drives them from
/// the console. Domain errors are printed and the session carries on; only a
/// closed input stream or a broken output stream stops [`Session::run`].
pub struct Session<R: BufRead, W: Write> {
    catalog: Catalog,
    cart: Cart,
    ledger: OrderLedger,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, cart: Cart, ledger: OrderLedger, input: R, output: W) -> Self {
        Self {
            catalog,
            cart,
            ledger,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.prompt.out(),
            "===== Welcome to the Daniboy's E-commerce System ====="
        )?;

        let mut screen = Screen::MainMenu;
        while screen != Screen::Exited {
            screen = match self.step(screen) {
                Ok(next) => next,
                Err(e) if is_fatal(&e) => return Err(e),
                Err(e) => {
                    let out = self.prompt.out();
                    writeln!(out, "An error occurred: {}", e.with_causes())?;
                    writeln!(out, "Please try again.")?;
                    Screen::MainMenu
                }
            };
        }
        Ok(())
    }

    /// Handles one screen and returns the one to show next.
    pub fn step(&mut self, screen: Screen) -> Result<Screen> {
        match screen {
            Screen::MainMenu => self.main_menu(),
            Screen::Browsing => self.browse(),
            Screen::CartView => self.view_cart(),
            Screen::SelectPayment => self.select_payment(),
            Screen::Checkout(method) => self.checkout(method),
            Screen::HistoryView => self.view_history(),
            Screen::Exited => Ok(Screen::Exited),
        }
    }

    fn main_menu(&mut self) -> Result<Screen> {
        let out = self.prompt.out();
        writeln!(out, "\n===== Main Menu =====")?;
        writeln!(out, "1. View Products")?;
        writeln!(out, "2. View Shopping Cart")?;
        writeln!(out, "3. View Orders")?;
        writeln!(out, "4. Exit")?;

        let next = match self.prompt.read_int("Enter your choice (1-4): ")? {
            1 => Screen::Browsing,
            2 => Screen::CartView,
            3 => Screen::HistoryView,
            4 => {
                writeln!(
                    self.prompt.out(),
                    "Thank you for using the E-commerce System. Goodbye!"
                )?;
                Screen::Exited
            }
            _ => {
                writeln!(
                    self.prompt.out(),
                    "Invalid choice. Please enter a number between 1 and 4."
                )?;
                Screen::MainMenu
            }
        };
        Ok(next)
    }

    fn browse(&mut self) -> Result<Screen> {
        render::catalog(self.prompt.out(), &self.catalog)?;

        loop {
            let again = match self.add_one() {
                Ok(()) => {
                    writeln!(self.prompt.out(), "Product added successfully!")?;
                    self.prompt
                        .confirm("Do you want to add another product? (Y/N): ")?
                }
                Err(e) if is_fatal(&e) => return Err(e),
                Err(e) => {
                    writeln!(self.prompt.out(), "{}", e.with_causes())?;
                    self.prompt.confirm("Do you want to try again? (Y/N): ")?
                }
            };
            if !again {
                return Ok(Screen::MainMenu);
            }
        }
    }

    fn add_one(&mut self) -> Result<()> {
        let id = self.prompt.read_non_empty(
            "\nEnter the ID of the product you want to add in the shopping cart: ",
        )?;
        let product = self.catalog.find_by_id(&id)?;
        let quantity = Quantity::new(self.prompt.read_int("Enter quantity: ")?)?;
        self.cart.add_item(product, quantity)
    }

    fn view_cart(&mut self) -> Result<Screen> {
        if self.cart.is_empty() {
            writeln!(
                self.prompt.out(),
                "Your shopping cart is empty. Please add products before checking out."
            )?;
            return Ok(Screen::MainMenu);
        }

        render::cart(self.prompt.out(), &self.cart)?;
        if self
            .prompt
            .confirm("\nDo you want to check out all the products? (Y/N): ")?
        {
            Ok(Screen::SelectPayment)
        } else {
            Ok(Screen::MainMenu)
        }
    }

    fn select_payment(&mut self) -> Result<Screen> {
        loop {
            let out = self.prompt.out();
            writeln!(out, "\nSelect payment method:")?;
            for (i, method) in PaymentMethod::ALL.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, method.name())?;
            }

            let choice = self.prompt.read_int("Enter your choice (1-3): ")?;
            match PaymentMethod::from_choice(choice) {
                Some(method) => return Ok(Screen::Checkout(method)),
                None => writeln!(
                    self.prompt.out(),
                    "Invalid choice. Please enter a number between 1 and 3."
                )?,
            }
        }
    }

    fn checkout(&mut self, method: PaymentMethod) -> Result<Screen> {
        match self.ledger.checkout(&self.cart, method) {
            Ok(order) => {
                let confirmation = method.confirmation(order.total());
                let out = self.prompt.out();
                writeln!(out, "{confirmation}")?;
                writeln!(out, "\nYou have successfully checked out the products!")?;
                self.cart.clear();
            }
            Err(e) => {
                writeln!(self.prompt.out(), "Error: {}", e.with_causes())?;
            }
        }
        Ok(Screen::MainMenu)
    }

    fn view_history(&mut self) -> Result<Screen> {
        render::history(self.prompt.out(), self.ledger.history())?;
        Ok(Screen::MainMenu)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::infrastructure::in_memory::InMemoryOrderSink;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    fn session(script: &str, sink: InMemoryOrderSink) -> TestSession {
        Session::new(
            Catalog::seeded(),
            Cart::new(),
            OrderLedger::new(Box::new(sink)),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn output(s: TestSession) -> String {
        String::from_utf8(s.into_output()).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let mut s = session("4\n", InMemoryOrderSink::new());
        s.run().unwrap();
        assert!(output(s).contains("Goodbye!"));
    }

    #[test]
    fn test_add_then_checkout_with_cash() {
        let sink = InMemoryOrderSink::new();
        let script = "1\na1b2c3\n1\ny\nX9Y8Z7\n3\nn\n2\ny\n1\n4\n";
        let mut s = session(script, sink.clone());
        s.run().unwrap();

        assert!(s.cart().is_empty());
        assert_eq!(s.ledger().order_count(), 1);
        let order = &s.ledger().history()[0];
        assert_eq!(order.total(), Money::new(dec!(74)).unwrap());
        assert_eq!(order.payment_method(), PaymentMethod::Cash);
        assert_eq!(sink.lines().len(), 1);

        let text = output(s);
        assert!(text.contains("Total Amount: ₱74.00"));
        assert!(text.contains("Processing cash payment of ₱74.00"));
        assert!(text.contains("You have successfully checked out the products!"));
    }

    #[test]
    fn test_unknown_product_then_give_up() {
        let mut s = session("1\nZZZ\nn\n4\n", InMemoryOrderSink::new());
        s.run().unwrap();

        assert!(s.cart().is_empty());
        assert!(output(s).contains("Product with ID 'ZZZ' not found!"));
    }

    #[test]
    fn test_declining_checkout_keeps_cart() {
        let mut s = session("1\nM7N8O9\n1\nn\n2\nn\n4\n", InMemoryOrderSink::new());
        s.run().unwrap();

        assert_eq!(s.cart().len(), 1);
        assert_eq!(s.ledger().order_count(), 0);
    }

    #[test]
    fn test_out_of_range_menu_choices() {
        let mut s = session("9\n2\n3\n4\n", InMemoryOrderSink::new());
        s.run().unwrap();

        let text = output(s);
        assert!(text.contains("Invalid choice. Please enter a number between 1 and 4."));
        assert!(text.contains("Your shopping cart is empty. Please add products before checking out."));
        assert!(text.contains("No orders to display."));
    }

    #[test]
    fn test_invalid_payment_choice_reprompts() {
        let mut s = session("1\nJ1K2L3\n2\nn\n2\ny\n7\n3\n3\n4\n", InMemoryOrderSink::new());
        s.run().unwrap();

        assert_eq!(s.ledger().history()[0].payment_method(), PaymentMethod::GCash);
        let text = output(s);
        assert!(text.contains("Invalid choice. Please enter a number between 1 and 3."));
        assert!(text.contains("Payment Method: GCash"));
    }

    #[test]
    fn test_undecodable_menu_input_is_reprompted() {
        let mut s = Session::new(
            Catalog::seeded(),
            Cart::new(),
            OrderLedger::new(Box::new(InMemoryOrderSink::new())),
            Cursor::new(b"\xff\xfe\n4\n".to_vec()),
            Vec::new(),
        );
        s.run().unwrap();

        let text = output(s);
        assert!(text.contains("Input must be valid text."));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn test_closed_input_is_fatal() {
        let mut s = session("1\n", InMemoryOrderSink::new());
        assert!(matches!(s.run(), Err(CheckoutError::InputClosed)));
    }

    #[test]
    fn test_step_transitions() {
        let mut s = session("J1K2L3\n1\nn\ny\n2\n", InMemoryOrderSink::new());
        assert_eq!(s.step(Screen::Browsing).unwrap(), Screen::MainMenu);
        assert_eq!(s.step(Screen::CartView).unwrap(), Screen::SelectPayment);
        assert_eq!(
            s.step(Screen::SelectPayment).unwrap(),
            Screen::Checkout(PaymentMethod::Card)
        );
        assert_eq!(
            s.step(Screen::Checkout(PaymentMethod::Card)).unwrap(),
            Screen::MainMenu
        );
        assert!(s.cart().is_empty());
        assert_eq!(s.step(Screen::Exited).unwrap(), Screen::Exited);
    }
}
