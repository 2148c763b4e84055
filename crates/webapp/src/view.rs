//! Text rendering of the page.

use askama::Template;
use secrecy::ExposeSecret;
use tinyshop_core::Product;

use crate::state::UiState;

/// The whole page, rendered from a [`UiState`] snapshot.
#[derive(Template)]
#[template(path = "page.txt")]
pub struct PageView<'a> {
    pub email: &'a str,
    pub password_mask: String,
    pub welcome: Option<&'a str>,
    pub products: &'a [Product],
    pub order_status: &'static str,
}

impl<'a> PageView<'a> {
    /// Build the view for the current state.
    #[must_use]
    pub fn new(state: &'a UiState) -> Self {
        let credentials = state.credentials();
        Self {
            email: &credentials.email,
            password_mask: "*".repeat(credentials.password.expose_secret().chars().count()),
            welcome: state.welcome_email(),
            products: state.products(),
            order_status: state.order_status().message(),
        }
    }
}

/// Render the page for `state`.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render(state: &UiState) -> askama::Result<String> {
    PageView::new(state).render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::state::Action;

    #[test]
    fn test_initial_page() {
        let page = render(&UiState::new()).unwrap();

        assert!(page.contains("E-Commerce Frontend"));
        assert!(page.contains("[ Place Order ]"));
        assert!(!page.contains("Welcome"));
        assert!(!page.contains("  - "));
        assert!(!page.contains("Please log in first."));
    }

    #[test]
    fn test_lists_products_in_order() {
        let mut state = UiState::new();
        state.apply(Action::ProductsLoaded(vec![
            Product::new(2, "Phone"),
            Product::new(1, "Laptop"),
        ]));
        let page = render(&state).unwrap();

        let phone = page.find("  - Phone").unwrap();
        let laptop = page.find("  - Laptop").unwrap();
        assert!(phone < laptop);
    }

    #[test]
    fn test_masks_password() {
        let mut state = UiState::new();
        state.apply(Action::EmailChanged("a@b.com".to_string()));
        state.apply(Action::PasswordChanged(SecretString::from("hunter2")));
        let page = render(&state).unwrap();

        assert!(page.contains("Email:    a@b.com"));
        assert!(page.contains("Password: *******"));
        assert!(!page.contains("hunter2"));
    }

    #[test]
    fn test_welcome_and_order_status() {
        let mut state = UiState::new();
        state.apply(Action::OrderPlaced);
        assert!(render(&state).unwrap().contains("Please log in first."));

        state.apply(Action::EmailChanged("a@b.com".to_string()));
        state.apply(Action::PasswordChanged(SecretString::from("x")));
        state.apply(Action::LoginSubmitted);
        state.apply(Action::OrderPlaced);
        let page = render(&state).unwrap();

        assert!(page.contains("Welcome, a@b.com"));
        assert!(page.contains("Order placed successfully!"));
        assert!(!page.contains("Please log in first."));
    }

    #[test]
    fn test_product_names_are_not_escaped() {
        let mut state = UiState::new();
        let product = Product::new(1, "Fish & Chips <XL>");
        state.apply(Action::ProductsLoaded(vec![product]));

        assert!(render(&state).unwrap().contains("  - Fish & Chips <XL>"));
    }
}
