use std::io::{BufRead, Write};

use uuid::Uuid;

use crate::application::shop_service::ShopService;
use crate::errors::AppError;
use storefront_types::domain::customer::Customer;
use storefront_types::domain::money::format_amount;
use storefront_types::ports::product_catalog::ProductCatalog;

#[derive(Clone, Debug)]
pub struct MenuConfig {
    pub customer_id: i64,
    pub first_order_id: i64,
    pub max_input_attempts: u32,
}

/// Interactive storefront over any line-oriented input and text output.
pub struct ConsoleMenu<C, R, W>
where
    C: ProductCatalog,
{
    catalog: C,
    config: MenuConfig,
    terminal: Terminal<R, W>,
}

struct Terminal<R, W> {
    input: R,
    out: W,
    max_input_attempts: u32,
}

enum Flow {
    Continue,
    Exit,
}

impl<C, R, W> ConsoleMenu<C, R, W>
where
    C: ProductCatalog,
    R: BufRead,
    W: Write,
{
    pub fn new(catalog: C, config: MenuConfig, input: R, out: W) -> Self {
        let terminal = Terminal {
            input,
            out,
            max_input_attempts: config.max_input_attempts,
        };
        Self {
            catalog,
            config,
            terminal,
        }
    }

    /// Asks for the customer's name, then serves menu commands until the user
    /// exits. Returns the session so callers can inspect what happened.
    pub fn run(self) -> Result<ShopService<C>, AppError> {
        let ConsoleMenu {
            catalog,
            config,
            mut terminal,
        } = self;

        let customer = terminal.create_customer(config.customer_id)?;
        let mut service =
            ShopService::new(catalog, customer).with_first_order_id(config.first_order_id);
        loop {
            terminal.print_menu()?;
            let choice = terminal.read_int()?;
            let command_id = Uuid::new_v4();
            let span = tracing::info_span!("menu_command", %command_id, choice);
            let _guard = span.enter();

            match terminal.dispatch(&mut service, choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(service),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "command failed");
                    writeln!(terminal.out, "Error: {e}")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    fn create_customer(&mut self, customer_id: i64) -> Result<Customer, AppError> {
        write!(self.out, "\nEnter your name: ")?;
        self.out.flush()?;
        let name = self.read_line()?.ok_or(AppError::EndOfInput)?;
        let customer = Customer::new(customer_id, name)?;
        writeln!(self.out, "Customer created successfully: {customer}")?;
        tracing::info!(customer_id = customer.customer_id(), "session started");
        Ok(customer)
    }

    fn print_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "\n======= Menu =======")?;
        writeln!(self.out, "1. 📚 Browse Products")?;
        writeln!(self.out, "2. 🛒 Add to Cart")?;
        writeln!(self.out, "3. 🗂 View Cart")?;
        writeln!(self.out, "4. 📦 Place Order")?;
        writeln!(self.out, "5. ⏹ Exit")?;
        writeln!(self.out, "6. 🗑 Remove from Cart")?;
        write!(self.out, "Select an option: ")?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch<C: ProductCatalog>(
        &mut self,
        service: &mut ShopService<C>,
        choice: i64,
    ) -> Result<Flow, AppError> {
        match choice {
            1 => self.browse_products(service)?,
            2 => self.add_to_cart(service)?,
            3 => {
                self.view_cart(service)?;
            }
            4 => self.place_order(service)?,
            5 => {
                writeln!(self.out, "Thank you for shopping with us!")?;
                return Ok(Flow::Exit);
            }
            6 => self.remove_from_cart(service)?,
            _ => writeln!(self.out, "Invalid choice. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn browse_products<C: ProductCatalog>(
        &mut self,
        service: &ShopService<C>,
    ) -> Result<(), AppError> {
        writeln!(self.out, "\n=== Available Products ===")?;
        for p in service.browse_products() {
            writeln!(self.out, "{p}")?;
        }
        Ok(())
    }

    fn add_to_cart<C: ProductCatalog>(
        &mut self,
        service: &mut ShopService<C>,
    ) -> Result<(), AppError> {
        self.browse_products(service)?;
        write!(self.out, "Enter Product ID to add to cart: ")?;
        self.out.flush()?;
        let product_id = self.read_int()?;
        match service.add_to_cart(product_id) {
            Ok(product) => writeln!(self.out, "Added to cart: {}", product.name())?,
            Err(AppError::NotFound(_)) => writeln!(self.out, "Invalid Product ID.")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn remove_from_cart<C: ProductCatalog>(
        &mut self,
        service: &mut ShopService<C>,
    ) -> Result<(), AppError> {
        if !self.view_cart(service)? {
            return Ok(());
        }
        write!(self.out, "Enter Product ID to remove from cart: ")?;
        self.out.flush()?;
        let product_id = self.read_int()?;
        match service.remove_from_cart(product_id) {
            Ok(product) => writeln!(self.out, "Removed from cart: {}", product.name())?,
            Err(AppError::NotFound(_)) => writeln!(self.out, "Invalid Product ID.")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Prints the cart; returns whether it had anything in it.
    fn view_cart<C: ProductCatalog>(
        &mut self,
        service: &ShopService<C>,
    ) -> Result<bool, AppError> {
        writeln!(self.out, "\n=== Shopping Cart ===")?;
        let cart = service.view_cart();
        if cart.is_empty() {
            writeln!(self.out, "Your cart is empty.")?;
            return Ok(false);
        }
        for item in &cart.items {
            writeln!(self.out, "- {}: ${}", item.name(), format_amount(item.price()))?;
        }
        writeln!(self.out, "Cart Total: ${}", format_amount(cart.total))?;
        Ok(true)
    }

    fn place_order<C: ProductCatalog>(
        &mut self,
        service: &mut ShopService<C>,
    ) -> Result<(), AppError> {
        match service.place_order() {
            Ok(order) => {
                writeln!(self.out, "{}", order.generate_order_summary())?;
                writeln!(
                    self.out,
                    "\nOrder placed successfully. Your cart has been cleared."
                )?;
            }
            Err(AppError::EmptyCart) => writeln!(
                self.out,
                "Your cart is empty. Add items before placing an order."
            )?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Next line without its line terminator; `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(len);
        Ok(Some(buf))
    }

    /// Reads a whole number, re-prompting up to `max_input_attempts` times.
    /// Blank lines are skipped without costing an attempt.
    fn read_int(&mut self) -> Result<i64, AppError> {
        let max = self.max_input_attempts;
        let mut attempts = 0;
        loop {
            let line = self.read_line()?.ok_or(AppError::EndOfInput)?;
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            if let Ok(n) = token.parse::<i64>() {
                return Ok(n);
            }
            attempts += 1;
            write!(
                self.out,
                "Invalid input. Please enter a valid number (Attempt {attempts} of {max}): "
            )?;
            self.out.flush()?;
            if attempts >= max {
                tracing::warn!(attempts, "giving up on numeric input");
                return Err(AppError::InputExhausted { attempts });
            }
        }
    }
}
