//! UI state and the reducer that drives it.
//!
//! All interaction state lives in one [`UiState`] value and changes only
//! through [`UiState::apply`]. Session and order status depend solely on the
//! most recent relevant action; nothing is appended or remembered.

use secrecy::{ExposeSecret, SecretString};
use tinyshop_core::Product;

/// Status line shown after an order was accepted.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully!";

/// Status line shown when ordering without logging in.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in first.";

/// Something that happened: a user interaction or the catalog load outcome.
#[derive(Debug)]
pub enum Action {
    /// The email field was edited.
    EmailChanged(String),
    /// The password field was edited.
    PasswordChanged(SecretString),
    /// The login form was submitted.
    LoginSubmitted,
    /// The "Place Order" control was activated.
    OrderPlaced,
    /// The catalog fetch returned products.
    ProductsLoaded(Vec<Product>),
    /// The catalog fetch failed; the message is for diagnostics only.
    ProductsFetchFailed(String),
}

/// Whether the user has logged in during this session.
///
/// There is no transition out of `LoggedIn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Outcome of the last order attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    /// No order attempted yet.
    #[default]
    None,
    /// Ordered while logged in.
    Placed,
    /// Ordered while logged out.
    LoginRequired,
}

impl OrderStatus {
    /// The status line to display, empty for [`OrderStatus::None`].
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Placed => ORDER_PLACED_MESSAGE,
            Self::LoginRequired => LOGIN_REQUIRED_MESSAGE,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Contents of the login form.
///
/// Only checked for presence; never sent anywhere.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: SecretString::from(""),
        }
    }
}

impl Credentials {
    /// Whether both fields are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.expose_secret().is_empty()
    }
}

/// Everything the page displays.
#[derive(Debug, Default)]
pub struct UiState {
    products: Vec<Product>,
    credentials: Credentials,
    session: SessionState,
    order_status: OrderStatus,
}

impl UiState {
    /// Fresh state: no products, empty form, logged out, no order status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::EmailChanged(email) => self.credentials.email = email,
            Action::PasswordChanged(password) => self.credentials.password = password,
            Action::LoginSubmitted => {
                if self.credentials.is_complete() {
                    if self.session == SessionState::LoggedOut {
                        tracing::info!(email = %self.credentials.email, "Logged in");
                    }
                    self.session = SessionState::LoggedIn;
                } else {
                    tracing::debug!("Login submitted with an empty field, ignoring");
                }
            }
            Action::OrderPlaced => {
                self.order_status = match self.session {
                    SessionState::LoggedIn => OrderStatus::Placed,
                    SessionState::LoggedOut => OrderStatus::LoginRequired,
                };
                tracing::debug!(status = ?self.order_status, "Order action evaluated");
            }
            Action::ProductsLoaded(products) => {
                tracing::debug!(count = products.len(), "Products loaded");
                self.products = products;
            }
            Action::ProductsFetchFailed(reason) => {
                tracing::debug!(%reason, "Keeping current product list after failed fetch");
            }
        }
    }

    /// Products currently displayed.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Login form contents.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Current session state.
    #[must_use]
    pub const fn session(&self) -> SessionState {
        self.session
    }

    /// Outcome of the last order attempt.
    #[must_use]
    pub const fn order_status(&self) -> OrderStatus {
        self.order_status
    }

    /// The email to greet, present only once logged in.
    ///
    /// Reads the live form value, so later edits to the email field show up
    /// in the greeting.
    #[must_use]
    pub fn welcome_email(&self) -> Option<&str> {
        match self.session {
            SessionState::LoggedIn => Some(&self.credentials.email),
            SessionState::LoggedOut => None,
        }
    }
}
