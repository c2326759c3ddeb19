use anyhow::{Context, Result};
use rust_decimal::Decimal;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::models::{Holding, HoldingDraft};

/// What the main screen is doing with the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Mode {
    #[default]
    Viewing,
    Creating,
    /// Editing the holding with this id.
    Editing(String),
}

#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq)]
pub enum FormField {
    #[strum(to_string = "Symbol")]
    Symbol,
    #[strum(to_string = "Quantity")]
    Quantity,
    #[strum(to_string = "Buy Price")]
    BuyPrice,
}

/// Text buffers behind the add/edit popup. Only `submit` interprets them;
/// until then every keystroke is accepted as-is.
pub struct FormState {
    mode: Mode,
    active: FormField,
    symbol: String,
    quantity: String,
    buy_price: String,
    error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Viewing,
            active: FormField::Symbol,
            symbol: String::new(),
            quantity: String::new(),
            buy_price: String::new(),
            error: None,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != Mode::Viewing
    }

    pub fn active(&self) -> FormField {
        self.active
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn buffer(&self, field: FormField) -> &str {
        match field {
            FormField::Symbol => &self.symbol,
            FormField::Quantity => &self.quantity,
            FormField::BuyPrice => &self.buy_price,
        }
    }

    pub fn open_create(&mut self) {
        self.reset();
        self.mode = Mode::Creating;
    }

    /// Pre-fills the buffers from the holding being edited.
    pub fn open_edit(&mut self, holding: &Holding) {
        self.reset();
        self.mode = Mode::Editing(holding.id().clone());
        self.symbol = holding.symbol().clone();
        self.quantity = holding.quantity().to_string();
        self.buy_price = holding.buy_price().to_string();
    }

    pub fn close(&mut self) {
        self.reset();
    }

    pub fn next_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let i = fields.iter().position(|f| *f == self.active).unwrap_or(0);
        self.active = fields[(i + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields: Vec<FormField> = FormField::iter().collect();
        let i = fields.iter().position(|f| *f == self.active).unwrap_or(0);
        self.active = fields[(i + fields.len() - 1) % fields.len()];
    }

    pub fn insert_char(&mut self, c: char) {
        self.error = None;
        self.active_buffer_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.error = None;
        self.active_buffer_mut().pop();
    }

    /// Validates the buffers into a draft. On failure the form stays open
    /// and the error is shown inline.
    pub fn submit(&mut self) -> Option<HoldingDraft> {
        match self.validate() {
            Ok(draft) => {
                self.error = None;
                Some(draft)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    fn validate(&self) -> Result<HoldingDraft> {
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            anyhow::bail!("Symbol must not be empty");
        }

        let quantity = parse_decimal(&self.quantity, "quantity")?;
        if quantity <= Decimal::ZERO {
            anyhow::bail!("Quantity must be positive");
        }

        let buy_price = parse_decimal(&self.buy_price, "buy price")?;
        if buy_price < Decimal::ZERO {
            anyhow::bail!("Buy price must not be negative");
        }

        Ok(HoldingDraft::new(symbol.to_string(), quantity, buy_price))
    }

    fn active_buffer_mut(&mut self) -> &mut String {
        match self.active {
            FormField::Symbol => &mut self.symbol,
            FormField::Quantity => &mut self.quantity,
            FormField::BuyPrice => &mut self.buy_price,
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::Viewing;
        self.active = FormField::Symbol;
        self.symbol.clear();
        self.quantity.clear();
        self.buy_price.clear();
        self.error = None;
    }
}

fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field.trim()))
}
