use std::future::Future;

use crate::product::Product;

/// How long the "Order placed successfully!" banner stays up.
pub const SUCCESS_BANNER_MS: u32 = 3_000;

/// Top-level view selector. The custom-order form is a modal, not a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Products,
    Orders,
}

/// Handle for one showing of the success banner. Dismissing with a stale
/// ticket is a no-op, so a newer banner keeps its full time on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket(u64);

/// Process-local UI state shared by the app shell and its modals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub page: Page,
    pub selected_product: Option<Product>,
    pub show_checkout: bool,
    pub show_custom_order: bool,
    banner: Option<BannerTicket>,
    next_ticket: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    pub fn open_checkout(&mut self, product: Product) {
        self.selected_product = Some(product);
        self.show_checkout = true;
    }

    pub fn close_checkout(&mut self) {
        self.show_checkout = false;
    }

    /// The product the checkout modal should render, if it is open.
    pub fn checkout_product(&self) -> Option<&Product> {
        self.selected_product
            .as_ref()
            .filter(|_| self.show_checkout)
    }

    pub fn open_custom_order(&mut self) {
        self.show_custom_order = true;
    }

    pub fn close_custom_order(&mut self) {
        self.show_custom_order = false;
    }

    /// Show the success banner. The caller schedules `dismiss_banner` after
    /// [`SUCCESS_BANNER_MS`].
    pub fn order_placed(&mut self) -> BannerTicket {
        let ticket = BannerTicket(self.next_ticket);
        self.next_ticket += 1;
        self.banner = Some(ticket);
        ticket
    }

    /// Hide the banner if `ticket` is still the one showing.
    pub fn dismiss_banner(&mut self, ticket: BannerTicket) -> bool {
        if self.banner == Some(ticket) {
            self.banner = None;
            true
        } else {
            false
        }
    }

    pub fn banner_visible(&self) -> bool {
        self.banner.is_some()
    }
}

/// Hold the banner for `ticket` for [`SUCCESS_BANNER_MS`], then dismiss it.
///
/// `sleep` is the platform timer; `dismiss` is usually
/// [`SessionState::dismiss_banner`] on the shared state. Returns whether the
/// banner was actually hidden.
pub async fn expire_banner<S, F, D>(ticket: BannerTicket, sleep: S, dismiss: D) -> bool
where
    S: FnOnce(u32) -> F,
    F: Future<Output = ()>,
    D: FnOnce(BannerTicket) -> bool,
{
    sleep(SUCCESS_BANNER_MS).await;
    dismiss(ticket)
}
