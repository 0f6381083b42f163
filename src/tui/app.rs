use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;

use crate::form::PaymentForm;
use crate::gateway::{PaymentGateway, Receipt};
use crate::model::{Clock, PaymentDetails, SystemClock};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    HelpState, PaymentScreenState, draw_help, draw_payment, draw_receipt, handle_receipt_key,
};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Enter card details.
    Payment,
    /// Show the receipt of an accepted payment.
    Receipt,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable screen name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Payment => "Payment",
            Self::Receipt => "Receipt",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App<G, C = SystemClock> {
    screen: Screen,
    payment: PaymentScreenState<C>,
    help: HelpState,
    receipt: Option<Receipt>,
    gateway: G,
    should_quit: bool,
}

impl<G: PaymentGateway> App<G, SystemClock> {
    /// Creates a new `App` on the [`Screen::Payment`] screen.
    pub fn new(gateway: G) -> Self {
        Self::with_clock(gateway, SystemClock)
    }
}

impl<G: PaymentGateway, C: Clock> App<G, C> {
    /// Creates a new `App` whose form reads dates from `clock`.
    pub fn with_clock(gateway: G, clock: C) -> Self {
        Self {
            screen: Screen::Payment,
            payment: PaymentScreenState::new(PaymentForm::with_clock(clock)),
            help: HelpState::new(),
            receipt: None,
            gateway,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        tracing::info!("payment form started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        tracing::info!("payment form closed");
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        match (self.screen, &self.receipt) {
            (Screen::Help, _) => draw_help(&self.help, frame, area),
            (Screen::Receipt, Some(receipt)) => draw_receipt(receipt, frame, area),
            _ => draw_payment(&self.payment, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.open_from(self.screen);
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Payment => self.payment.handle_key(key),
            Screen::Receipt => handle_receipt_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(details) => self.submit(&details),
            Action::NewPayment => {
                self.payment.reset();
                self.receipt = None;
                self.screen = Screen::Payment;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn submit(&mut self, details: &PaymentDetails) {
        match self.gateway.submit(details) {
            Ok(receipt) => {
                self.receipt = Some(receipt);
                self.screen = Screen::Receipt;
            }
            Err(e) => {
                tracing::warn!(error = %e, "payment submission failed");
                self.payment.set_error(e.to_string());
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the payment screen state.
    pub fn payment(&self) -> &PaymentScreenState<C> {
        &self.payment
    }

    /// Returns the receipt of the last accepted payment, if any.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Returns a reference to the gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
